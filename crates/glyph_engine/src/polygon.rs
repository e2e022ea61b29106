//! Freehand path to cell mask conversion.
//!
//! A lasso path is a list of real valued points in cell units: cell `(x, y)`
//! covers the square `[x, x + 1] x [y, y + 1]`. The path is treated as a closed
//! polygon (last point connects back to the first) and a cell is part of the
//! mask if its center or any of its corners is inside the polygon (even-odd
//! rule), or if any polygon edge crosses one of the cell's four sides. The edge
//! test keeps thin strokes that never enclose a cell center.

use serde::{Deserialize, Serialize};

use crate::{Position, SelectionMask, Size};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        PathPoint { x, y }
    }

    /// Center of the given cell.
    pub fn cell_center(pos: Position) -> Self {
        PathPoint::new(pos.x as f32 + 0.5, pos.y as f32 + 0.5)
    }

    pub fn distance(&self, other: PathPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The cell this point lies in.
    pub fn cell(&self) -> Position {
        Position::from((self.x, self.y))
    }
}

impl From<(f32, f32)> for PathPoint {
    fn from(value: (f32, f32)) -> Self {
        PathPoint::new(value.0, value.1)
    }
}

impl From<Position> for PathPoint {
    fn from(value: Position) -> Self {
        PathPoint::cell_center(value)
    }
}

/// Drops points closer than `tolerance` to the previously kept point.
///
/// The first and last point always survive. This only thins out pointer noise;
/// it is not a polyline simplification and ignores how far the dropped points
/// deviate from the resulting segments.
pub fn smooth_path(points: &[PathPoint], tolerance: f32) -> Vec<PathPoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let mut result = Vec::with_capacity(points.len());
    let mut last_kept = points[0];
    result.push(last_kept);

    for point in &points[1..points.len() - 1] {
        if point.distance(last_kept) >= tolerance {
            result.push(*point);
            last_kept = *point;
        }
    }

    if let Some(last) = points.last() {
        result.push(*last);
    }
    result
}

/// Even-odd ray casting: counts crossings of a horizontal ray going right from `point`.
pub fn is_point_inside(point: PathPoint, polygon: &[PathPoint]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

/// Parametric segment intersection. Parallel (and collinear) segments never intersect.
pub fn segments_intersect(p1: PathPoint, p2: PathPoint, q1: PathPoint, q2: PathPoint) -> bool {
    let rx = p2.x - p1.x;
    let ry = p2.y - p1.y;
    let sx = q2.x - q1.x;
    let sy = q2.y - q1.y;

    let denom = cross(rx, ry, sx, sy);
    if denom == 0.0 {
        return false;
    }
    let qpx = q1.x - p1.x;
    let qpy = q1.y - p1.y;
    let t = cross(qpx, qpy, sx, sy) / denom;
    let u = cross(qpx, qpy, rx, ry) / denom;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

fn cell_is_covered(pos: Position, polygon: &[PathPoint]) -> bool {
    if is_point_inside(PathPoint::cell_center(pos), polygon) {
        return true;
    }

    let x0 = pos.x as f32;
    let y0 = pos.y as f32;
    let corners = [
        PathPoint::new(x0, y0),
        PathPoint::new(x0 + 1.0, y0),
        PathPoint::new(x0 + 1.0, y0 + 1.0),
        PathPoint::new(x0, y0 + 1.0),
    ];
    if corners.iter().any(|corner| is_point_inside(*corner, polygon)) {
        return true;
    }

    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        for side in 0..4 {
            if segments_intersect(a, b, corners[side], corners[(side + 1) % 4]) {
                return true;
            }
        }
    }
    false
}

/// Converts the closed polygon described by `points` into the mask of covered cells.
///
/// Fewer than three points can't enclose anything and give an empty mask.
pub fn rasterize_polygon(points: &[PathPoint], size: Size) -> SelectionMask {
    let mut mask = SelectionMask::new();
    if points.len() < 3 || size.is_empty() {
        return mask;
    }

    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let left = (min_x.floor() as i32).clamp(0, size.width - 1);
    let top = (min_y.floor() as i32).clamp(0, size.height - 1);
    let right = (max_x.floor() as i32).clamp(0, size.width - 1);
    let bottom = (max_y.floor() as i32).clamp(0, size.height - 1);

    for y in top..=bottom {
        for x in left..=right {
            let pos = Position::new(x, y);
            if cell_is_covered(pos, points) {
                mask.set_is_selected(pos, true);
            }
        }
    }
    log::debug!("rasterized lasso of {} points into {} cells", points.len(), mask.len());
    mask
}
