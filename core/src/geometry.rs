use core::cmp::Ordering;
use core::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

/// Points closer than this to a polygon edge count as lying on it. Normalized-space units.
pub const COINCIDENT_EPSILON: f64 = 1e-9;

/// Sine of the largest angle between two directions that still counts as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-12;

/// Fraction of the smallest feature size used as the tolerance for classifying an edge as axis-aligned.
pub const AXIS_TOLERANCE_FRACTION: f64 = 0.25;

/// Position in normalized `[0, 1]×[0, 1]` space, row coordinate first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub y: f64,
    pub x: f64,
}

impl Point {
    pub const fn new(y: f64, x: f64) -> Self {
        Self { y, x }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.y * other.y + self.x * other.x
    }

    /// Z component of the cross product, treating `y` as the first axis.
    pub fn cross(self, other: Self) -> f64 {
        self.y * other.x - self.x * other.y
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        let d = self - other;
        d.dot(d)
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.y.is_finite() && self.x.is_finite()
    }

    /// Counter-clockwise angle from the positive row axis, in `(-π, π]`.
    pub fn angle(self) -> f64 {
        self.x.atan2(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.y + rhs.y, self.x + rhs.x)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.y - rhs.y, self.x - rhs.x)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Point::new(self.y * rhs, self.x * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((y, x): (f64, f64)) -> Self {
        Self::new(y, x)
    }
}

/// Strict counter-clockwise test, collinear triples are never counter-clockwise.
fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Whether the open segments `p1p2` and `p3p4` cross.
///
/// Each segment's endpoints must lie strictly on opposite sides of the other segment's line. Touching and collinear
/// configurations are not reported as crossings.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    ccw(p1, p3, p4) != ccw(p2, p3, p4) && ccw(p1, p2, p3) != ccw(p1, p2, p4)
}

/// Side of the line along `direction` that `offset` points to. `Greater` is counter-clockwise.
///
/// Offsets within [`COLLINEAR_EPSILON`] of the line, relative to both lengths, are `Equal`.
pub fn side_of(direction: Point, offset: Point) -> Ordering {
    let cross = direction.cross(offset);
    if cross.abs() <= COLLINEAR_EPSILON * direction.length() * offset.length() {
        Ordering::Equal
    } else if cross > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Intersection of the infinite line through `origin` and `through` with the interior of edge `p1p2`.
///
/// Edges whose rows (or columns) differ by less than `tolerance` are solved against their fixed coordinate, anything
/// else falls back to a parametric solve. A line parallel to the edge has no intersection, and neither does one that
/// only touches an endpoint.
pub fn ray_edge_intersection(
    origin: Point,
    through: Point,
    p1: Point,
    p2: Point,
    tolerance: f64,
) -> Option<Point> {
    let dir = through - origin;

    let hit = if (p1.y - p2.y).abs() < tolerance {
        // constant row
        if dir.y == 0.0 {
            return None;
        }
        let y = p1.y;
        let x = origin.x + (y - origin.y) * dir.x / dir.y;
        within(x, p1.x, p2.x).then_some(Point::new(y, x))
    } else if (p1.x - p2.x).abs() < tolerance {
        // constant column
        if dir.x == 0.0 {
            return None;
        }
        let x = p1.x;
        let y = origin.y + (x - origin.x) * dir.y / dir.x;
        within(y, p1.y, p2.y).then_some(Point::new(y, x))
    } else {
        let edge = p2 - p1;
        let denom = dir.cross(edge);
        if denom == 0.0 {
            return None;
        }
        let u = (p1 - origin).cross(dir) / denom;
        (u > 0.0 && u < 1.0).then_some(p1 + edge * u)
    };

    hit.filter(|point| point.is_finite())
}

fn within(value: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    lo < value && value < hi
}

/// Twice the signed area enclosed by `points`, positive for counter-clockwise winding.
pub fn doubled_signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| points[i].cross(points[(i + 1) % n]))
        .sum()
}

/// Distance from `point` to the closed segment `ab`.
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    };
    point.distance_squared(a + ab * t).sqrt()
}
