use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::*;

/// Whether `point` lies inside `polygon`. Non-finite points are never inside.
pub fn is_inside(polygon: &Polygon, point: Point) -> bool {
    polygon.contains(point)
}

/// Boundary point where a sight ray stops.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Hit {
    /// Distance along the ray, scaled by the length of its direction.
    reach: f64,
    point: Point,
    /// Polygon vertex sitting at `point`.
    vertex: Option<usize>,
}

/// Sight line from the viewpoint through a vertex, resolved for the rays turned infinitesimally clockwise (`right`)
/// and counter-clockwise (`left`) of it.
///
/// An edge ending on the line only blocks the side it leaves towards, and an edge lying along the line blocks
/// neither. A line grazing a corner therefore keeps going on the open side.
struct SightRay {
    viewpoint: Point,
    direction: Point,
    right: Option<Hit>,
    left: Option<Hit>,
}

impl SightRay {
    fn cast(polygon: &Polygon, viewpoint: Point, through: Point) -> Self {
        let mut ray = Self {
            viewpoint,
            direction: through - viewpoint,
            right: None,
            left: None,
        };
        let len = polygon.len();

        for (index, (a, b)) in polygon.edges().enumerate() {
            let side_a = side_of(ray.direction, a - viewpoint);
            let side_b = side_of(ray.direction, b - viewpoint);
            match (side_a, side_b) {
                (Ordering::Equal, Ordering::Equal) => {}
                (Ordering::Equal, side) => ray.offer(side, a, Some(index)),
                (side, Ordering::Equal) => ray.offer(side, b, Some((index + 1) % len)),
                (side_a, side_b) if side_a != side_b => {
                    let crossing =
                        ray_edge_intersection(viewpoint, through, a, b, polygon.tolerance())
                            .unwrap_or_else(|| {
                                let cross_a = ray.direction.cross(a - viewpoint);
                                let cross_b = ray.direction.cross(b - viewpoint);
                                a + (b - a) * (cross_a / (cross_a - cross_b))
                            });
                    ray.offer(Ordering::Less, crossing, None);
                    ray.offer(Ordering::Greater, crossing, None);
                }
                _ => {}
            }
        }
        ray
    }

    fn offer(&mut self, side: Ordering, point: Point, vertex: Option<usize>) {
        let reach = (point - self.viewpoint).dot(self.direction);
        // behind the viewpoint
        if reach <= 0.0 || !point.is_finite() {
            return;
        }
        let slot = match side {
            Ordering::Less => &mut self.right,
            Ordering::Greater => &mut self.left,
            Ordering::Equal => return,
        };
        if slot.is_none_or(|hit| reach < hit.reach) {
            *slot = Some(Hit {
                reach,
                point,
                vertex,
            });
        }
    }
}

fn same_direction(a: Point, b: Point) -> bool {
    side_of(a, b) == Ordering::Equal && a.dot(b) > 0.0
}

/// Corners of the visible region in counter-clockwise order, starting at the visible vertex with the lowest index.
fn visible_corners(polygon: &Polygon, viewpoint: Point) -> Vec<Hit> {
    if polygon.len() < 3
        || !is_inside(polygon, viewpoint)
        || polygon.on_boundary(viewpoint, COINCIDENT_EPSILON)
    {
        return Vec::new();
    }

    let mut order: Vec<(f64, Point)> = polygon
        .vertices()
        .iter()
        .map(|&vertex| ((vertex - viewpoint).angle(), vertex))
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));

    // vertices lined up behind each other share one sight line
    let mut targets: Vec<Point> = Vec::with_capacity(order.len());
    for (_, vertex) in order {
        let repeats = targets
            .last()
            .is_some_and(|&last| same_direction(last - viewpoint, vertex - viewpoint));
        if !repeats {
            targets.push(vertex);
        }
    }
    let wraps = match targets.as_slice() {
        [first, .., last] => same_direction(*first - viewpoint, *last - viewpoint),
        _ => false,
    };
    if wraps {
        targets.pop();
    }

    let mut corners = Vec::with_capacity(targets.len() * 2);
    for through in targets {
        let ray = SightRay::cast(polygon, viewpoint, through);
        let (Some(right), Some(left)) = (ray.right, ray.left) else {
            log::warn!(
                "Sight line through ({}, {}) never met the boundary",
                through.y,
                through.x
            );
            continue;
        };
        if right.point != left.point {
            corners.extend([right, left]);
        } else if let Some(vertex) = right.vertex.or(left.vertex) {
            corners.push(Hit {
                vertex: Some(vertex),
                ..right
            });
        }
    }
    corners.dedup_by(|a, b| a.point == b.point);

    let start = corners
        .iter()
        .enumerate()
        .filter_map(|(i, hit)| Some((hit.vertex?, i)))
        .min()
        .map_or(0, |(_, i)| i);
    corners.rotate_left(start);
    corners
}

/// Indices of the polygon vertices that are corners of the region seen from `viewpoint`, ascending.
///
/// A vertex only passed by a sight line running along a wall is not a corner.
pub fn visible_vertices(polygon: &Polygon, viewpoint: Point) -> Vec<usize> {
    let mut vertices: Vec<usize> = visible_corners(polygon, viewpoint)
        .iter()
        .filter_map(|hit| hit.vertex)
        .collect();
    vertices.sort_unstable();
    vertices
}

/// The region of `polygon` visible from `viewpoint`, empty when the viewpoint is outside or on the outline.
///
/// Sight lines are cast through every vertex in angular order. Their nearest hits that are not vertices close the gaps
/// behind occluding corners.
pub fn visibility_polygon(polygon: &Polygon, viewpoint: Point) -> Polygon {
    let corners = visible_corners(polygon, viewpoint);
    if corners.is_empty()
        && is_inside(polygon, viewpoint)
        && !polygon.on_boundary(viewpoint, COINCIDENT_EPSILON)
    {
        log::warn!("Nothing visible from {viewpoint:?} although it is inside");
    }

    log::trace!(
        "{} corners visible from ({:.4}, {:.4}) in a polygon of {}",
        corners.len(),
        viewpoint.y,
        viewpoint.x,
        polygon.len()
    );
    let vertices = corners.into_iter().map(|hit| hit.point).collect();
    Polygon::with_tolerance(vertices, polygon.tolerance())
}

/// Viewpoint and the region it sees, recomputed from scratch on every move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEngine {
    viewpoint: Point,
    visible: Polygon,
}

impl VisibilityEngine {
    /// Starts at the maze's default viewpoint.
    pub fn new(maze: &Maze) -> Self {
        let viewpoint = maze.start();
        Self {
            viewpoint,
            visible: visibility_polygon(maze.polygon(), viewpoint),
        }
    }

    /// Moves to `viewpoint` and replaces the visible region.
    pub fn update(&mut self, polygon: &Polygon, viewpoint: Point) -> &Polygon {
        self.viewpoint = viewpoint;
        self.visible = visibility_polygon(polygon, viewpoint);
        &self.visible
    }

    pub fn viewpoint(&self) -> Point {
        self.viewpoint
    }

    pub fn visible(&self) -> &Polygon {
        &self.visible
    }

    /// Whether the last viewpoint was inside the polygon it was checked against.
    pub fn sees_anything(&self) -> bool {
        !self.visible.is_empty()
    }
}
