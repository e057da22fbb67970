use std::collections::VecDeque;
use std::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square arrangement of cells, indexed `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// A grid where every wall is standing and no cell has been visited.
    pub fn new(size: Coord) -> Self {
        Self {
            cells: Array2::from_elem([usize::from(size); 2], Cell::default()),
        }
    }

    /// Builds a grid with a known wall pattern, opening each listed side and its counterpart.
    pub fn from_passages(size: Coord, passages: &[(Coord2, Direction)]) -> Result<Self> {
        let mut grid = Self::new(size);
        for &(coords, direction) in passages {
            let coords = grid.validate_coords(coords)?;
            grid.carve(coords, direction).ok_or(MazeError::InvalidCoords)?;
        }
        for cell in grid.cells.iter_mut() {
            cell.mark_visited();
        }
        Ok(grid)
    }

    pub fn size(&self) -> Coord {
        let (rows, _) = self.cells.dim();
        Coord::try_from(rows).unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(MazeError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn neighbor(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        step(coords, direction, self.size())
    }

    /// Whether the side of `coords` facing `direction` has no wall.
    pub fn is_open(&self, coords: Coord2, direction: Direction) -> bool {
        !self.cell_at(coords).has_wall(direction)
    }

    pub(crate) fn mark_visited(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].mark_visited();
    }

    #[cfg(test)]
    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Clears the wall between `coords` and its neighbor towards `direction` on both cells, and marks the neighbor
    /// visited.
    pub(crate) fn carve(&mut self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        let next = self.neighbor(coords, direction)?;
        self.cells[coords.to_nd_index()].open(direction);
        let neighbor = &mut self.cells[next.to_nd_index()];
        neighbor.open(direction.opposite());
        neighbor.mark_visited();
        Some(next)
    }

    /// Open passages, counted once per pair of cells. A side opened on only one of the two cells does not count.
    pub fn passage_count(&self) -> CellCount {
        let mut count = 0;
        for ((row, col), cell) in self.cells.indexed_iter() {
            let coords = (row as Coord, col as Coord);
            for direction in [Direction::Right, Direction::Bottom] {
                if cell.has_wall(direction) {
                    continue;
                }
                if let Some(next) = self.neighbor(coords, direction) {
                    if self.is_open(next, direction.opposite()) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Cells reachable from the origin through open passages.
    pub fn reachable_cells(&self) -> CellCount {
        if self.size() == 0 {
            return 0;
        }

        let mut seen: Array2<bool> = Array2::from_elem(self.cells.dim(), false);
        let mut queue = VecDeque::from([(0, 0)]);
        seen[[0, 0]] = true;
        let mut count = 0;

        while let Some(coords) = queue.pop_front() {
            count += 1;
            for (direction, next) in self.iter_neighbors(coords) {
                let passable =
                    self.is_open(coords, direction) && self.is_open(next, direction.opposite());
                if passable && !seen[next.to_nd_index()] {
                    seen[next.to_nd_index()] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    /// Whether the passages form a spanning tree: every cell reachable and exactly `N² - 1` passages.
    pub fn is_perfect(&self) -> bool {
        let total = self.total_cells();
        total > 0
            && self.reachable_cells() == total
            && self.passage_count() == total - 1
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
