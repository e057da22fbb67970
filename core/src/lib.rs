use serde::{Deserialize, Serialize};

pub use cell::*;
pub use contour::*;
pub use error::*;
pub use generator::*;
pub use geometry::*;
pub use grid::*;
pub use polygon::*;
pub use types::*;
pub use visibility::*;

mod cell;
mod contour;
mod error;
mod generator;
mod geometry;
mod grid;
mod polygon;
mod types;
mod visibility;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub size: Coord,
    /// Fraction of a cell inset on each side, the wall thickness of the outline.
    pub margin: f64,
}

impl MazeConfig {
    pub const fn new_unchecked(size: Coord, margin: f64) -> Self {
        Self { size, margin }
    }

    pub fn new(size: Coord, margin: f64) -> Result<Self> {
        let config = Self::new_unchecked(size, margin);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size < 1 {
            return Err(MazeError::InvalidSize(self.size));
        }
        // also rejects NaN
        if !(self.margin > 0.0 && self.margin < 0.5) {
            return Err(MazeError::InvalidMargin(self.margin));
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    /// Smallest distance between two distinct vertex coordinates of the outline: either a pillar (`2·margin`) or a
    /// passage (`1 - 2·margin`), scaled to one cell.
    pub fn feature_size(&self) -> f64 {
        let pillar = 2.0 * self.margin;
        let passage = 1.0 - 2.0 * self.margin;
        pillar.min(passage) / f64::from(self.size)
    }

    pub fn axis_tolerance(&self) -> f64 {
        self.feature_size() * AXIS_TOLERANCE_FRACTION
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new_unchecked(5, 0.25)
    }
}

/// A generated grid together with its traced outline. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    polygon: Polygon,
    start: Point,
}

impl Maze {
    pub fn new(config: MazeConfig, generator: impl MazeGenerator) -> Result<Self> {
        config.validate()?;
        let grid = generator.generate(config.size);
        Self::from_grid(config, grid)
    }

    pub fn random(config: MazeConfig, seed: u64) -> Result<Self> {
        Self::new(config, BacktrackingGenerator::new(seed))
    }

    pub fn from_grid(config: MazeConfig, grid: Grid) -> Result<Self> {
        config.validate()?;
        if grid.size() != config.size {
            return Err(MazeError::SizeMismatch {
                expected: config.size,
                actual: grid.size(),
            });
        }
        if !grid.is_perfect() {
            log::warn!("Grid is not a perfect maze, outline covers only cells reachable from the origin");
        }

        let Contour { polygon, start } =
            trace_boundary(&grid, config.margin, config.axis_tolerance())?;
        Ok(Self {
            config,
            grid,
            polygon,
            start,
        })
    }

    pub fn config(&self) -> MazeConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Default viewpoint, the center of cell `(0, 0)`.
    pub fn start(&self) -> Point {
        self.start
    }
}
