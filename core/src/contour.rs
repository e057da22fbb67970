use serde::{Deserialize, Serialize};

use crate::*;

/// Inset corner of a cell, in `(row, col)` orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        }
    }

    /// Position of this corner of `coords`, pulled `margin` of a cell inwards from each side.
    pub fn point(self, coords: Coord2, size: Coord, margin: f64) -> Point {
        let (row, col) = (f64::from(coords.0), f64::from(coords.1));
        let size = f64::from(size);
        let near = margin;
        let far = 1.0 - margin;
        let (dy, dx) = match self {
            Self::TopLeft => (near, near),
            Self::TopRight => (near, far),
            Self::BottomRight => (far, far),
            Self::BottomLeft => (far, near),
        };
        Point::new((row + dy) / size, (col + dx) / size)
    }
}

/// One entry of the tracing automaton.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Corners of the cursor cell to append to the polygon, in order.
    pub emit: &'static [Corner],
    pub next: Corner,
    /// Cursor move after emitting, `None` keeps the cursor in place.
    pub step: Option<Direction>,
}

const fn go(emit: &'static [Corner], next: Corner, step: Direction) -> Option<Transition> {
    Some(Transition {
        emit,
        next,
        step: Some(step),
    })
}

const fn every(transition: Option<Transition>) -> [Option<Transition>; 4] {
    [transition, transition, transition, transition]
}

use Corner::{BottomLeft as D, BottomRight as C, TopLeft as A, TopRight as B};
use Direction::{Bottom as DOWN, Left as LEFT, Right as RIGHT, Top as UP};

const NONE: Option<Transition> = None;

/// Transitions keyed by `[wall_config][corner]`, wall bits top/right/bottom/left from high to low.
///
/// Each step emits corners of the cursor cell only where the boundary turns, then rotates to the next corner and
/// optionally moves the cursor.
///
/// `None` marks states that a boundary of a perfect maze never reaches.
pub const TRANSITIONS: [[Option<Transition>; 4]; 16] = [
    // 0b0000
    [
        go(&[A], B, LEFT),
        go(&[B], C, UP),
        go(&[C], D, RIGHT),
        go(&[D], A, DOWN),
    ],
    // 0b0001, left
    [go(&[], A, DOWN), go(&[B], C, UP), go(&[C], D, RIGHT), NONE],
    // 0b0010, bottom
    [go(&[A], B, LEFT), go(&[B], C, UP), NONE, go(&[], D, RIGHT)],
    // 0b0011, bottom left
    [go(&[D], D, RIGHT), go(&[B], C, UP), NONE, NONE],
    // 0b0100, right
    [go(&[A], B, LEFT), NONE, go(&[], C, UP), go(&[D], A, DOWN)],
    // 0b0101, right left
    [go(&[], A, DOWN), NONE, go(&[], C, UP), NONE],
    // 0b0110, right bottom
    [go(&[A], B, LEFT), NONE, NONE, go(&[C], C, UP)],
    // 0b0111, open top only
    every(go(&[D, C], C, UP)),
    // 0b1000, top
    [NONE, go(&[], B, LEFT), go(&[C], D, RIGHT), go(&[D], A, DOWN)],
    // 0b1001, top left; the first entry only fires at the origin
    [go(&[A], A, DOWN), go(&[A], A, DOWN), go(&[C], D, RIGHT), NONE],
    // 0b1010, top bottom
    [NONE, go(&[], B, LEFT), NONE, go(&[], D, RIGHT)],
    // 0b1011, open right only
    every(go(&[A, D], D, RIGHT)),
    // 0b1100, top right
    [NONE, NONE, go(&[B], B, LEFT), go(&[D], A, DOWN)],
    // 0b1101, open bottom only
    every(go(&[B, A], A, DOWN)),
    // 0b1110, open left only
    every(go(&[C, B], B, LEFT)),
    // 0b1111, a lone cell
    every(Some(Transition {
        emit: &[A, D, C, B],
        next: A,
        step: None,
    })),
];

pub fn transition(config: u8, corner: Corner) -> Option<Transition> {
    TRANSITIONS
        .get(usize::from(config))
        .and_then(|row| row[corner.index()])
}

/// Traced outline of the navigable area and the default viewpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub polygon: Polygon,
    /// Center of cell `(0, 0)`.
    pub start: Point,
}

/// Traces the boundary of the open region of `grid`, starting at the top-left corner of cell `(0, 0)`.
///
/// Only cells connected to the origin are outlined. Wall bits that no perfect maze produces surface as an error instead
/// of an endless walk.
pub fn trace_boundary(grid: &Grid, margin: f64, tolerance: f64) -> Result<Contour> {
    let size = grid.size();
    if size == 0 {
        return Err(MazeError::InvalidSize(size));
    }

    let origin = (0, 0);
    let origin_config = grid[origin].wall_config();
    let first = transition(origin_config, Corner::TopLeft).ok_or(MazeError::BrokenContour {
        coords: origin,
        config: origin_config,
        corner: Corner::TopLeft,
    })?;

    let max_steps = 4 * grid.total_cells() as usize + 4;
    let mut vertices = Vec::new();
    let mut cursor = origin;
    let mut corner = Corner::TopLeft;

    for steps in 1..=max_steps {
        let config = grid[cursor].wall_config();
        let Transition { emit, next, step } =
            transition(config, corner).ok_or(MazeError::BrokenContour {
                coords: cursor,
                config,
                corner,
            })?;

        vertices.extend(emit.iter().map(|c| c.point(cursor, size, margin)));
        corner = next;
        if let Some(direction) = step {
            cursor = grid
                .neighbor(cursor, direction)
                .ok_or(MazeError::ContourEscaped(cursor))?;
        }

        // back at the origin in a state that would repeat the opening move
        if cursor == origin && transition(origin_config, corner) == Some(first) {
            log::debug!(
                "Traced {} vertices in {} steps over a {}x{} grid",
                vertices.len(),
                steps,
                size,
                size
            );
            let start = Point::new(0.5 / f64::from(size), 0.5 / f64::from(size));
            return Ok(Contour {
                polygon: Polygon::with_tolerance(vertices, tolerance),
                start,
            });
        }
    }

    Err(MazeError::ContourDiverged(max_steps))
}
