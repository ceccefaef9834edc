use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct OwnedPoint2(#[serde(with = "Point2f64")] Point2<f64>);

/// For use with `#[serde(serialize_with = ...)]` on `Option<Point2<f64>>` fields
pub fn serialize_opt_point2<S: Serializer>(
    value: &Option<Point2<f64>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value.map(OwnedPoint2).serialize(serializer)
}
