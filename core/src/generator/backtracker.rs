use rand::{Rng, SeedableRng, rngs::SmallRng};
use smallvec::SmallVec;

use super::*;

/// Randomized depth-first carving with an explicit stack, producing a perfect maze.
#[derive(Clone, Debug, PartialEq)]
pub struct BacktrackingGenerator {
    seed: u64,
}

impl BacktrackingGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MazeGenerator for BacktrackingGenerator {
    fn generate(self, size: Coord) -> Grid {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        carve_maze(size, &mut rng)
    }
}

/// Carves a spanning tree over a `size`×`size` grid, drawing every choice from `rng`.
pub fn carve_maze<R: Rng>(size: Coord, rng: &mut R) -> Grid {
    let mut grid = Grid::new(size);
    if size == 0 {
        log::warn!("Empty grid requested, nothing to carve");
        return grid;
    }

    let origin = (0, 0);
    grid.mark_visited(origin);
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let options: SmallVec<[Direction; 4]> = grid
            .iter_neighbors(current)
            .filter(|&(_, next)| !grid.cell_at(next).is_visited())
            .map(|(direction, _)| direction)
            .collect();

        if options.is_empty() {
            stack.pop();
            continue;
        }

        let direction = options[rng.random_range(0..options.len())];
        if let Some(next) = grid.carve(current, direction) {
            stack.push(next);
        }
    }

    log::debug!(
        "Carved {}x{} maze with {} passages",
        size,
        size,
        grid.passage_count()
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_size_yields_a_perfect_maze() {
        for size in 1..=12 {
            for seed in 0..8 {
                let grid = BacktrackingGenerator::new(seed).generate(size);

                assert_eq!(grid.size(), size);
                assert!(grid.is_perfect(), "size {size} seed {seed}");
                assert_eq!(grid.passage_count(), square(size) - 1);
                assert_eq!(grid.reachable_cells(), square(size));
            }
        }
    }

    #[test]
    fn every_cell_is_visited() {
        let grid = BacktrackingGenerator::new(7).generate(9);

        for row in 0..9 {
            for col in 0..9 {
                assert!(grid.cell_at((row, col)).is_visited());
            }
        }
    }

    #[test]
    fn outer_walls_stay_closed() {
        let size = 6;
        let grid = BacktrackingGenerator::new(3).generate(size);

        for i in 0..size {
            assert!(!grid.is_open((0, i), Direction::Top));
            assert!(!grid.is_open((size - 1, i), Direction::Bottom));
            assert!(!grid.is_open((i, 0), Direction::Left));
            assert!(!grid.is_open((i, size - 1), Direction::Right));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = BacktrackingGenerator::new(42).generate(10);
        let b = BacktrackingGenerator::new(42).generate(10);

        assert_eq!(a, b);
    }

    #[test]
    fn injected_rng_drives_carving() {
        let mut rng = SmallRng::seed_from_u64(5);
        let grid = carve_maze(4, &mut rng);

        assert!(grid.is_perfect());
    }

    #[test]
    fn large_maze_does_not_recurse() {
        let grid = BacktrackingGenerator::new(1).generate(200);

        assert!(grid.is_perfect());
    }
}
