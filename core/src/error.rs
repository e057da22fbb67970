use thiserror::Error;

use crate::{Coord, Coord2, Corner};

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum MazeError {
    #[error("Invalid maze size {0}, must be at least 1")]
    InvalidSize(Coord),
    #[error("Invalid margin {0}, must lie strictly between 0 and 0.5")]
    InvalidMargin(f64),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid is {actual}x{actual} but the configuration asks for {expected}x{expected}")]
    SizeMismatch { expected: Coord, actual: Coord },
    #[error("Boundary trace reached cell {coords:?} with walls {config:#06b} from corner {corner:?}")]
    BrokenContour {
        coords: Coord2,
        config: u8,
        corner: Corner,
    },
    #[error("Boundary trace left the grid at cell {0:?}")]
    ContourEscaped(Coord2),
    #[error("Boundary trace did not return to the origin after {0} steps")]
    ContourDiverged(usize),
}

pub type Result<T> = core::result::Result<T, MazeError>;
