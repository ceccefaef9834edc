use super::{Airfoil, CamberStation};
use crate::errors::{AirfoilError, Result};
use crate::geometry::distances2::{arclength, dist, signed_angle};
use crate::geometry::polygon;
use crate::serialize::{serialize_opt_point2, Point2f64};
use ncollide2d::na::{Point2, Vector2};
use ncollide2d::query::Ray;
use serde::Serialize;

/// This enum specifies how upper and lower surface points are paired into camber stations when
/// the two surfaces do not have the same number of points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Pairing {
    /// Pair from the trailing edge forward until the shorter surface runs out. The unpaired
    /// points of the longer surface, which are the ones closest to the leading edge, are
    /// dropped.
    #[default]
    Truncate,

    /// Fail with `InconsistentPointCount` unless both surfaces have the same count
    Strict,
}

/// Scalar and point properties of an airfoil, as reported by `Airfoil::summary`
#[derive(Clone, Debug, Serialize)]
pub struct AirfoilSummary {
    pub name: String,
    pub point_count: usize,

    #[serde(with = "Point2f64")]
    pub trailing_edge: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub leading_edge: Point2<f64>,

    pub chord_length: f64,
    pub twist_degrees: f64,
    pub area: f64,

    #[serde(serialize_with = "serialize_opt_point2")]
    pub centroid: Option<Point2<f64>>,

    pub thickness_max: Option<f64>,
    pub thickness_te: Option<f64>,
    pub camber_length: f64,
}

impl Airfoil {
    pub fn signed_area(&self) -> f64 {
        polygon::signed_area(&self.points)
    }

    /// Area enclosed by the closed polyline, always non-negative
    pub fn area(&self) -> f64 {
        polygon::area(&self.points)
    }

    pub fn centroid(&self) -> Result<Point2<f64>> {
        polygon::centroid(&self.points).ok_or(AirfoilError::DegenerateGeometry(
            "centroid of a polygon with zero area",
        ))
    }

    /// The chord as a ray starting at the trailing edge whose direction reaches the leading edge
    pub fn chord(&self) -> Result<Ray<f64>> {
        let te = self.trailing_edge();
        let le = self.leading_edge()?;
        Ok(Ray::new(te, le - te))
    }

    pub fn chord_length(&self) -> Result<f64> {
        Ok(dist(&self.trailing_edge(), &self.leading_edge()?))
    }

    /// Angle in radians of the TE -> LE chord vector measured from the +x axis
    pub fn twist(&self) -> Result<f64> {
        let chord = self.chord()?;
        Ok(signed_angle(&Vector2::x(), &chord.dir))
    }

    pub fn twist_degrees(&self) -> Result<f64> {
        Ok(self.twist()?.to_degrees())
    }

    /// Pairs the upper surface points (excluding the leading edge) with the lower surface points
    /// taken in reverse, so that the first station is the one at the trailing edge.
    pub fn camber_stations(&self, pairing: Pairing) -> Result<Vec<CamberStation>> {
        let (mut upper, lower) = self.upper_lower()?;
        upper.pop();

        if upper.len() != lower.len() {
            match pairing {
                Pairing::Strict => {
                    return Err(AirfoilError::InconsistentPointCount {
                        expected: upper.len(),
                        actual: lower.len(),
                    })
                }
                Pairing::Truncate => log::warn!(
                    "{:?}: {} upper and {} lower points, pairing only {}",
                    self.name,
                    upper.len(),
                    lower.len(),
                    upper.len().min(lower.len())
                ),
            }
        }

        Ok(upper
            .iter()
            .zip(lower.iter().rev())
            .map(|(u, l)| CamberStation::new(*u, *l))
            .collect())
    }

    pub fn camberline(&self) -> Result<Vec<Point2<f64>>> {
        let stations = self.camber_stations(Pairing::Truncate)?;
        Ok(stations.iter().map(|s| s.camber).collect())
    }

    /// Distance between each paired upper and lower point, starting at the trailing edge
    pub fn thickness(&self) -> Result<Vec<f64>> {
        let stations = self.camber_stations(Pairing::Truncate)?;
        Ok(stations.iter().map(|s| dist(&s.upper, &s.lower)).collect())
    }

    pub fn thickness_max(&self) -> Result<f64> {
        self.thickness()?
            .into_iter()
            .reduce(f64::max)
            .ok_or(AirfoilError::DegenerateGeometry("no paired surface points"))
    }

    pub fn thickness_te(&self) -> Result<f64> {
        self.thickness()?
            .first()
            .copied()
            .ok_or(AirfoilError::DegenerateGeometry("no paired surface points"))
    }

    /// Length along the camber line from the trailing edge station to the last paired station
    pub fn camber_length(&self) -> Result<f64> {
        Ok(arclength(&self.camberline()?))
    }

    pub fn summary(&self) -> Result<AirfoilSummary> {
        let stations = self.camber_stations(Pairing::Truncate)?;
        let thickness: Vec<f64> = stations.iter().map(|s| dist(&s.upper, &s.lower)).collect();
        let camber: Vec<Point2<f64>> = stations.iter().map(|s| s.camber).collect();

        Ok(AirfoilSummary {
            name: self.name.clone(),
            point_count: self.len(),
            trailing_edge: self.trailing_edge(),
            leading_edge: self.leading_edge()?,
            chord_length: self.chord_length()?,
            twist_degrees: self.twist_degrees()?,
            area: self.area(),
            centroid: self.centroid().ok(),
            thickness_max: thickness.iter().copied().reduce(f64::max),
            thickness_te: thickness.first().copied(),
            camber_length: arclength(&camber),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::tests::{diamond, lens};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use test_case::test_case;

    #[test]
    fn test_diamond_scalars() {
        let af = diamond();
        assert_relative_eq!(2.0, af.chord_length().unwrap(), epsilon = 1e-12);
        assert_relative_eq!(0.2, af.area(), epsilon = 1e-12);
        let c = af.centroid().unwrap();
        assert_relative_eq!(0.0, c.x, epsilon = 1e-12);
        assert_relative_eq!(0.0, c.y, epsilon = 1e-12);
    }

    #[test]
    fn test_diamond_twist() {
        // The chord runs from TE (1, 0) to LE (-1, 0), which points along -x
        let af = diamond();
        assert_relative_eq!(PI, af.twist().unwrap(), epsilon = 1e-12);
        assert_relative_eq!(180.0, af.twist_degrees().unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn test_twist_sign() {
        let af = Airfoil::from_xy("up", &[0.0, 0.5, 1.0, 0.5], &[0.0, 0.2, 1.0, 0.3]).unwrap();
        assert_relative_eq!(PI / 4.0, af.twist().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_area_orientation_independent() {
        let af = diamond();
        let flipped = Airfoil::from_xy("f", &[1.0, 0.0, -1.0, 0.0], &[0.0, -0.1, 0.0, 0.1]).unwrap();
        assert_relative_eq!(af.area(), flipped.area(), epsilon = 1e-12);
        assert!(flipped.signed_area() < 0.0);
        let c = flipped.centroid().unwrap();
        assert_relative_eq!(0.0, c.x, epsilon = 1e-12);
        assert_relative_eq!(0.0, c.y, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_degenerate() {
        let af = Airfoil::from_xy("line", &[2.0, 1.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_relative_eq!(0.0, af.area());
        assert!(matches!(
            af.centroid(),
            Err(AirfoilError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_diamond_truncated_pairing() {
        let af = diamond();
        let stations = af.camber_stations(Pairing::Truncate).unwrap();
        assert_eq!(1, stations.len());
        assert_eq!(Point2::new(1.0, 0.0), stations[0].upper);
        assert_eq!(Point2::new(0.0, -0.1), stations[0].lower);
        assert_relative_eq!(1.01f64.sqrt(), af.thickness_te().unwrap(), epsilon = 1e-12);

        assert!(matches!(
            af.camber_stations(Pairing::Strict),
            Err(AirfoilError::InconsistentPointCount {
                expected: 2,
                actual: 1
            })
        ));
    }

    /// Upper surface holds TE and one point before the LE, the lower surface three points
    fn long_lower() -> Airfoil {
        Airfoil::from_xy(
            "long lower",
            &[1.0, 0.0, -1.0, -0.5, 0.0, 0.5],
            &[0.0, 0.1, 0.0, -0.1, -0.1, -0.1],
        )
        .unwrap()
    }

    #[test]
    fn test_longer_lower_drops_le_side() {
        let af = long_lower();
        let stations = af.camber_stations(Pairing::Truncate).unwrap();
        let lower: Vec<Point2<f64>> = stations.iter().map(|s| s.lower).collect();
        assert_eq!(vec![Point2::new(0.5, -0.1), Point2::new(0.0, -0.1)], lower);
        assert_eq!(Point2::new(1.0, 0.0), stations[0].upper);
        assert_eq!(Point2::new(0.0, 0.1), stations[1].upper);

        assert!(matches!(
            af.camber_stations(Pairing::Strict),
            Err(AirfoilError::InconsistentPointCount {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_summary_matches_truncated_queries() {
        let af = long_lower();
        let s = af.summary().unwrap();
        assert_relative_eq!(af.thickness_te().unwrap(), s.thickness_te.unwrap());
        assert_relative_eq!(af.thickness_max().unwrap(), s.thickness_max.unwrap());
        assert_relative_eq!(af.camber_length().unwrap(), s.camber_length);
    }

    #[test_case(1)]
    #[test_case(5)]
    #[test_case(20)]
    fn test_symmetric_camberline(k: usize) {
        let af = lens(k);
        let stations = af.camber_stations(Pairing::Strict).unwrap();
        assert_eq!(k + 1, stations.len());

        for s in stations.iter() {
            assert_relative_eq!(s.upper.x, s.lower.x, epsilon = 1e-12);
            assert_relative_eq!(0.0, s.camber.y, epsilon = 1e-12);
        }

        // The trailing edge is closed, so the first station has no thickness
        assert_relative_eq!(0.0, af.thickness_te().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_lens_thickness() {
        let af = lens(3);
        let thk = af.thickness().unwrap();
        let expected = [0.0, 0.4 * 0.75 * 0.25, 0.4 * 0.5 * 0.5, 0.4 * 0.25 * 0.75];
        assert_eq!(expected.len(), thk.len());
        for (e, t) in expected.iter().zip(thk.iter()) {
            assert_relative_eq!(*e, *t, epsilon = 1e-12);
        }
        assert_relative_eq!(0.1, af.thickness_max().unwrap(), epsilon = 1e-12);

        // Camber points lie on the x axis from 1.0 down to 0.25
        assert_relative_eq!(0.75, af.camber_length().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_summary() {
        let s = lens(3).summary().unwrap();
        assert_eq!(9, s.point_count);
        assert_relative_eq!(1.0, s.chord_length, epsilon = 1e-12);
        assert_relative_eq!(180.0, s.twist_degrees, epsilon = 1e-9);
        assert!(s.centroid.is_some());
        assert_relative_eq!(0.1, s.thickness_max.unwrap(), epsilon = 1e-12);

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!("lens", json["name"]);
        assert_relative_eq!(0.0, json["leading_edge"]["x"].as_f64().unwrap());
    }
}
