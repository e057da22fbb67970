use serde::{Deserialize, Serialize};

use crate::geometry::*;

/// Implicitly closed vertex loop in normalized space, carrying the tolerance used to classify its edges as
/// axis-aligned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
    tolerance: f64,
}

impl Polygon {
    pub fn with_tolerance(vertices: Vec<Point>, tolerance: f64) -> Self {
        Self {
            vertices,
            tolerance,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Vertex `index`, wrapping at the end. Empty polygons have none.
    pub fn vertex(&self, index: usize) -> Option<Point> {
        let len = self.vertices.len();
        (len > 0).then(|| self.vertices[index % len])
    }

    /// Edge from vertex `index` to its successor, wrapping at the end.
    pub fn edge(&self, index: usize) -> Option<(Point, Point)> {
        Some((self.vertex(index)?, self.vertex(index + 1)?))
    }

    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let len = self.vertices.len();
        (0..len).map(move |i| (self.vertices[i], self.vertices[(i + 1) % len]))
    }

    pub fn signed_area(&self) -> f64 {
        doubled_signed_area(&self.vertices) / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Crossing-number containment test.
    ///
    /// Casts a ray towards increasing `x` and counts the edges whose row span straddles the point. Edges of constant
    /// row never straddle and drop out on their own. Points exactly on the boundary may land either way.
    pub fn contains(&self, point: Point) -> bool {
        if !point.is_finite() {
            return false;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let crossing_x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < crossing_x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    pub fn on_boundary(&self, point: Point, tolerance: f64) -> bool {
        self.edges()
            .any(|(a, b)| distance_to_segment(point, a, b) <= tolerance)
    }

    /// Whether no two non-adjacent edges cross.
    pub fn is_simple(&self) -> bool {
        let edges: Vec<_> = self.edges().collect();
        let n = edges.len();
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let ((a, b), (c, d)) = (edges[i], edges[j]);
                if segments_intersect(a, b, c, d) {
                    return false;
                }
            }
        }
        true
    }
}
