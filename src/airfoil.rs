use crate::errors::{AirfoilError, Result};
use crate::geometry::distances2::mid_point;
use crate::geometry::polygon::signed_area;
use crate::serialize::Point2f64;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};

pub mod analyze;
pub mod edges;
pub mod transform;

/// A single paired station between the upper and lower surfaces, along with the camber point
/// halfway between them
#[derive(Clone, Debug, Serialize)]
pub struct CamberStation {
    #[serde(with = "Point2f64")]
    pub camber: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub upper: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber: mid_point(&upper, &lower),
            upper,
            lower,
        }
    }
}

/// Traversal direction of the closed airfoil polyline
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// TE -> upper -> LE -> lower for an airfoil whose upper surface is on the +y side of the
    /// chord, the conventional ordering
    CounterClockwise,
    Clockwise,
    Degenerate,
}

/// An airfoil section stored as a closed polyline. By convention the first point is the trailing
/// edge and the points run over the upper surface to the leading edge and back along the lower
/// surface. The closing edge from the last point to the first is implicit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "AirfoilData", try_from = "AirfoilData")]
pub struct Airfoil {
    name: String,
    points: Vec<Point2<f64>>,
}

/// Column representation used for serialization, `{"name": .., "x": [..], "y": [..]}`
#[derive(Serialize, Deserialize)]
pub struct AirfoilData {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl From<Airfoil> for AirfoilData {
    fn from(airfoil: Airfoil) -> Self {
        AirfoilData {
            x: airfoil.x(),
            y: airfoil.y(),
            name: airfoil.name,
        }
    }
}

impl TryFrom<AirfoilData> for Airfoil {
    type Error = AirfoilError;

    fn try_from(data: AirfoilData) -> Result<Self> {
        Airfoil::from_xy(data.name, &data.x, &data.y)
    }
}

pub(crate) fn check_finite(points: &[Point2<f64>]) -> Result<()> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(AirfoilError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

impl Airfoil {
    /// Create a new airfoil from a sequence of points. Fails if there are fewer than three points
    /// or any coordinate is not finite. The points are taken as given; use `canonicalize` to fix
    /// a clockwise ordering.
    pub fn new(name: impl Into<String>, points: Vec<Point2<f64>>) -> Result<Airfoil> {
        if points.len() < 3 {
            return Err(AirfoilError::NotEnoughPoints {
                actual: points.len(),
            });
        }

        check_finite(&points)?;

        Ok(Airfoil {
            name: name.into(),
            points,
        })
    }

    /// Create a new airfoil from separate x and y coordinate sequences of equal length
    pub fn from_xy(name: impl Into<String>, x: &[f64], y: &[f64]) -> Result<Airfoil> {
        if x.len() != y.len() {
            return Err(AirfoilError::InconsistentPointCount {
                expected: x.len(),
                actual: y.len(),
            });
        }

        let points = x.iter().zip(y).map(|(x, y)| Point2::new(*x, *y)).collect();
        Airfoil::new(name, points)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, an airfoil holds at least three points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn orientation(&self) -> Orientation {
        let a = signed_area(&self.points);
        if a > 0.0 {
            Orientation::CounterClockwise
        } else if a < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Degenerate
        }
    }

    /// Check that the points follow the TE -> upper -> LE -> lower traversal
    pub fn check_convention(&self) -> Result<()> {
        match self.orientation() {
            Orientation::CounterClockwise => Ok(()),
            Orientation::Clockwise => Err(AirfoilError::InvalidOrdering),
            Orientation::Degenerate => Err(AirfoilError::DegenerateGeometry(
                "airfoil polygon encloses no area",
            )),
        }
    }

    /// Re-orders a clockwise point sequence in place so that it follows the conventional
    /// traversal. The trailing edge stays at index 0 and every following point is reversed.
    pub fn canonicalize(&mut self) -> Result<()> {
        match self.orientation() {
            Orientation::CounterClockwise => Ok(()),
            Orientation::Clockwise => {
                log::debug!("reversing clockwise point order of {:?}", self.name);
                self.points[1..].reverse();
                Ok(())
            }
            Orientation::Degenerate => Err(AirfoilError::DegenerateGeometry(
                "airfoil polygon encloses no area",
            )),
        }
    }

    pub fn canonicalized(&self) -> Result<Airfoil> {
        let mut result = self.clone();
        result.canonicalize()?;
        Ok(result)
    }

    /// Creates a new airfoil whose points are the index-wise midpoints of the two airfoils. No
    /// resampling is done, so the airfoils must have the same point count.
    pub fn mean(&self, other: &Airfoil) -> Result<Airfoil> {
        if self.len() != other.len() {
            return Err(AirfoilError::InconsistentPointCount {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let points = self
            .points
            .iter()
            .zip(other.points.iter())
            .map(|(a, b)| mid_point(a, b))
            .collect();

        Airfoil::new("Mean Airfoil", points)
    }
}
