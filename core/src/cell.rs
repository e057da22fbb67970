use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::Direction;

bitflags! {
    /// Wall and visitation state of a single maze cell.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Cell: u8 {
        const WALL_LEFT = 0b0_0001;
        const WALL_BOTTOM = 0b0_0010;
        const WALL_RIGHT = 0b0_0100;
        const WALL_TOP = 0b0_1000;
        const UNVISITED = 0b1_0000;

        const WALLS = Self::WALL_TOP.bits()
            | Self::WALL_RIGHT.bits()
            | Self::WALL_BOTTOM.bits()
            | Self::WALL_LEFT.bits();
    }
}

impl Cell {
    /// The 4-bit wall configuration, top/right/bottom/left from high to low bit.
    pub const fn wall_config(self) -> u8 {
        self.intersection(Self::WALLS).bits()
    }

    pub const fn has_wall(self, direction: Direction) -> bool {
        self.contains(direction.wall())
    }

    pub const fn is_visited(self) -> bool {
        !self.contains(Self::UNVISITED)
    }

    pub fn open(&mut self, direction: Direction) {
        self.remove(direction.wall());
    }

    pub fn mark_visited(&mut self) {
        self.remove(Self::UNVISITED);
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cell_is_walled_and_unvisited() {
        let cell = Cell::default();

        assert_eq!(cell.wall_config(), 0b1111);
        assert!(!cell.is_visited());
        assert!(Direction::ALL.iter().all(|&dir| cell.has_wall(dir)));
    }

    #[test]
    fn opening_a_side_clears_only_that_wall() {
        let mut cell = Cell::default();
        cell.open(Direction::Right);
        cell.mark_visited();

        assert_eq!(cell.wall_config(), 0b1011);
        assert!(cell.is_visited());
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Left));
    }
}
