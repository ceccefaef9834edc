//! Closed polygon measures. The vertex slice is treated as implicitly closed: the edge from the
//! last vertex back to the first is always part of the boundary, and a repeated closing vertex
//! contributes a zero-length edge.

use itertools::Itertools;
use ncollide2d::na::Point2;

fn cross(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Shoelace area, positive for counter-clockwise vertex order and negative for clockwise
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    points
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .map(|(a, b)| cross(a, b))
        .sum::<f64>()
        * 0.5
}

/// Enclosed area, independent of orientation
pub fn area(points: &[Point2<f64>]) -> f64 {
    signed_area(points).abs()
}

/// Area centroid of the polygon. Returns None when the signed area is zero, as happens with
/// collinear or coincident vertices.
pub fn centroid(points: &[Point2<f64>]) -> Option<Point2<f64>> {
    let a = signed_area(points);
    if a == 0.0 || !a.is_finite() {
        return None;
    }

    let (cx, cy) = points
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .fold((0.0, 0.0), |(cx, cy), (p0, p1)| {
            let c = cross(p0, p1);
            (cx + (p0.x + p1.x) * c, cy + (p0.y + p1.y) * c)
        });

    Some(Point2::new(cx / (6.0 * a), cy / (6.0 * a)))
}
