use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::Cell;

/// Single coordinate axis used for maze size and cell positions.
pub type Coord = u16;

/// Count type used for cell and passage counts.
pub type CellCount = u32;

/// Two-dimensional grid position `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn square(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

/// Side of a cell, in clockwise order starting at the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Row/col displacement of the neighbor across this side.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    pub const fn wall(self) -> Cell {
        match self {
            Self::Top => Cell::WALL_TOP,
            Self::Right => Cell::WALL_RIGHT,
            Self::Bottom => Cell::WALL_BOTTOM,
            Self::Left => Cell::WALL_LEFT,
        }
    }
}

/// Applies `direction` to `coords`, returning a value only when it remains inside a `bounds`×`bounds` grid.
pub fn step(coords: Coord2, direction: Direction, bounds: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = direction.delta();

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= bounds {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= bounds {
        return None;
    }

    Some((next_row, next_col))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, _) = self.dim();
        NeighborIter::new(index, Coord::try_from(rows).unwrap_or(Coord::MAX))
    }
}

/// In-bounds orthogonal neighbors of a cell, paired with the side they are reached through.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = (Direction, Coord2);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(coords) = step(self.center, direction, self.bounds) {
                return Some((direction, coords));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_in_bounds() {
        assert_eq!(step((0, 0), Direction::Top, 3), None);
        assert_eq!(step((0, 0), Direction::Left, 3), None);
        assert_eq!(step((2, 2), Direction::Right, 3), None);
        assert_eq!(step((1, 1), Direction::Bottom, 3), Some((2, 1)));
    }

    #[test]
    fn corner_cell_has_two_neighbors() {
        let grid: Array2<u8> = Array2::zeros([3, 3]);
        let neighbors: Vec<_> = grid.iter_neighbors((0, 0)).collect();

        assert_eq!(
            neighbors,
            vec![(Direction::Right, (0, 1)), (Direction::Bottom, (1, 0))]
        );
        assert_eq!(grid.iter_neighbors((1, 1)).count(), 4);
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.wall(), direction.opposite().wall());
        }
    }
}
