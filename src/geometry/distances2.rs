use itertools::Itertools;
use ncollide2d::na::{center, Point2, RealField, Vector2};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

pub fn mid_point<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> Point2<N> {
    center(a, b)
}

pub fn signed_angle<N: RealField + Copy>(v1: &Vector2<N>, v2: &Vector2<N>) -> N {
    (v1.x * v2.y - v1.y * v2.x).atan2(v1.x * v2.x + v1.y * v2.y)
}

/// Find the index of the point farthest from `from`. Ties resolve to the earliest index. Returns
/// None if the slice is empty or every point coincides with `from`.
pub fn farthest_index(points: &[Point2<f64>], from: &Point2<f64>) -> Option<usize> {
    let mut index = None;
    let mut farthest = 0.0;
    for (i, p) in points.iter().enumerate() {
        let d = dist(p, from);
        if d > farthest {
            farthest = d;
            index = Some(i);
        }
    }

    index
}

/// Total length of an open polyline. There is no closing segment from the last point back to the
/// first.
pub fn arclength(points: &[Point2<f64>]) -> f64 {
    points.iter().tuple_windows::<(_, _)>().map(|(a, b)| dist(a, b)).sum()
}
