use super::{check_finite, Airfoil};
use crate::errors::{AirfoilError, Result};
use crate::geometry::distances2::dist;
use ncollide2d::na::{Isometry2, Point2, Vector2};

fn check_parameter(value: f64, name: &'static str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AirfoilError::NonFiniteParameter(name))
    }
}

impl Airfoil {
    /// Commits transformed points, leaving the airfoil untouched if any coordinate overflowed
    fn set_points(&mut self, points: Vec<Point2<f64>>) -> Result<()> {
        check_finite(&points)?;
        self.points = points;
        Ok(())
    }

    /// Scales every point by `factor` about the leading edge, or about the origin when
    /// `origin_at_le` is false
    pub fn scale(&mut self, factor: f64, origin_at_le: bool) -> Result<()> {
        check_parameter(factor, "scale factor")?;
        let origin = if origin_at_le {
            self.leading_edge()?
        } else {
            Point2::origin()
        };

        let points = self
            .points
            .iter()
            .map(|p| origin + (p - origin) * factor)
            .collect();
        self.set_points(points)
    }

    /// Rotates every point by `angle` radians (counter-clockwise positive) about `axis`, which
    /// defaults to the leading edge
    pub fn rotate(&mut self, angle: f64, axis: Option<Point2<f64>>) -> Result<()> {
        check_parameter(angle, "rotation angle")?;
        let axis = match axis {
            Some(a) => {
                check_parameter(a.x, "rotation axis")?;
                check_parameter(a.y, "rotation axis")?;
                a
            }
            None => self.leading_edge()?,
        };

        let rotation = Isometry2::rotation(angle);
        let points = self
            .points
            .iter()
            .map(|p| axis + rotation * (p - axis))
            .collect();
        self.set_points(points)
    }

    pub fn rotate_degrees(&mut self, angle: f64, axis: Option<Point2<f64>>) -> Result<()> {
        check_parameter(angle, "rotation angle")?;
        self.rotate(angle.to_radians(), axis)
    }

    pub fn translate(&mut self, offset: &Vector2<f64>) -> Result<()> {
        check_parameter(offset.x, "offset")?;
        check_parameter(offset.y, "offset")?;
        let points = self.points.iter().map(|p| p + offset).collect();
        self.set_points(points)
    }

    /// Brings the airfoil to unit chord with the chord along the +x axis and the leading edge at
    /// the origin. The leading edge index, twist and chord are all measured on the original
    /// geometry, which is equivalent to rotating about the leading edge, dividing by the chord
    /// and moving the leading edge to the origin in sequence.
    pub fn normalize(&mut self) -> Result<()> {
        let i_le = self.leading_edge_index()?;
        let twist = self.twist()?;
        let le = self.points[i_le];

        let chord = dist(&self.trailing_edge(), &le);
        if !(chord.is_finite() && chord > 0.0) {
            return Err(AirfoilError::DegenerateGeometry(
                "chord length is zero or not finite",
            ));
        }

        let rotation = Isometry2::rotation(-twist);
        let points = self
            .points
            .iter()
            .map(|p| Point2::from(rotation * (p - le) / chord))
            .collect();
        self.set_points(points)
    }

    pub fn scaled(&self, factor: f64, origin_at_le: bool) -> Result<Airfoil> {
        let mut result = self.clone();
        result.scale(factor, origin_at_le)?;
        Ok(result)
    }

    pub fn rotated(&self, angle: f64, axis: Option<Point2<f64>>) -> Result<Airfoil> {
        let mut result = self.clone();
        result.rotate(angle, axis)?;
        Ok(result)
    }

    pub fn rotated_degrees(&self, angle: f64, axis: Option<Point2<f64>>) -> Result<Airfoil> {
        let mut result = self.clone();
        result.rotate_degrees(angle, axis)?;
        Ok(result)
    }

    pub fn translated(&self, offset: &Vector2<f64>) -> Result<Airfoil> {
        let mut result = self.clone();
        result.translate(offset)?;
        Ok(result)
    }

    pub fn normalized(&self) -> Result<Airfoil> {
        let mut result = self.clone();
        result.normalize()?;
        Ok(result)
    }
}
