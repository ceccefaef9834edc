use crate::airfoil::Airfoil;
use crate::errors::{AirfoilError, Result};
use hermite::Hermite1;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};

pub mod hermite;

/// The one dimensional interpolant used between span stations
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanMethod {
    /// Monotone piecewise cubic Hermite, which never overshoots the station values
    #[default]
    Pchip,

    /// Akima's locally weighted piecewise cubic
    Akima,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolationParams {
    pub method: SpanMethod,
}

impl InterpolationParams {
    pub fn new(method: SpanMethod) -> Self {
        InterpolationParams { method }
    }
}

/// Interpolates a family of airfoils sharing a point count and point correspondence along a
/// spanwise coordinate. Each point index gets its own pair of x and y interpolants, so point `i`
/// of every produced airfoil corresponds to point `i` of every input airfoil.
pub struct SpanInterpolator {
    x: Vec<Hermite1>,
    y: Vec<Hermite1>,
}

impl SpanInterpolator {
    /// Builds the per-point interpolants. `span_coords` holds the station of each airfoil and
    /// must be strictly increasing or strictly decreasing.
    pub fn new(
        airfoils: &[Airfoil],
        span_coords: &[f64],
        params: &InterpolationParams,
    ) -> Result<SpanInterpolator> {
        if airfoils.len() != span_coords.len() {
            return Err(AirfoilError::SpanMismatch {
                airfoils: airfoils.len(),
                stations: span_coords.len(),
            });
        }

        if airfoils.len() < 2 {
            return Err(AirfoilError::NotEnoughStations {
                actual: airfoils.len(),
            });
        }

        let n = airfoils[0].len();
        if let Some(bad) = airfoils.iter().find(|a| a.len() != n) {
            return Err(AirfoilError::InconsistentPointCount {
                expected: n,
                actual: bad.len(),
            });
        }

        // The Hermite interpolants want increasing knots, so decreasing stations are flipped
        let mut order: Vec<usize> = (0..airfoils.len()).collect();
        if span_coords[1] < span_coords[0] {
            order.reverse();
        }
        let knots: Vec<f64> = order.iter().map(|i| span_coords[*i]).collect();

        let build: fn(&[f64], &[f64]) -> Result<Hermite1> = match params.method {
            SpanMethod::Pchip => Hermite1::pchip,
            SpanMethod::Akima => Hermite1::akima,
        };

        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        for k in 0..n {
            let xs: Vec<f64> = order.iter().map(|i| airfoils[*i].points()[k].x).collect();
            let ys: Vec<f64> = order.iter().map(|i| airfoils[*i].points()[k].y).collect();
            x.push(build(&knots, &xs)?);
            y.push(build(&knots, &ys)?);
        }

        log::debug!(
            "built {} {:?} interpolant pairs over {} stations",
            n,
            params.method,
            knots.len()
        );

        Ok(SpanInterpolator { x, y })
    }

    pub fn point_count(&self) -> usize {
        self.x.len()
    }

    /// Evaluates every point interpolant at one span coordinate
    pub fn at(&self, span: f64, name: impl Into<String>) -> Result<Airfoil> {
        let points = self
            .x
            .iter()
            .zip(self.y.iter())
            .map(|(fx, fy)| Point2::new(fx.evaluate(span), fy.evaluate(span)))
            .collect();
        Airfoil::new(name, points)
    }

    /// Produces one airfoil per target station, named `Interpolation {k}` after its position in
    /// `targets`
    pub fn evaluate(&self, targets: &[f64]) -> Result<Vec<Airfoil>> {
        targets
            .iter()
            .enumerate()
            .map(|(k, t)| self.at(*t, format!("Interpolation {}", k)))
            .collect()
    }
}

/// Interpolates with the default `SpanMethod::Pchip`, which never overshoots the station values.
/// Akima interpolation is available through `interpolate_airfoils_with`.
pub fn interpolate_airfoils(
    airfoils: &[Airfoil],
    span_coords: &[f64],
    target_span_coords: &[f64],
) -> Result<Vec<Airfoil>> {
    interpolate_airfoils_with(
        airfoils,
        span_coords,
        target_span_coords,
        &InterpolationParams::default(),
    )
}

pub fn interpolate_airfoils_with(
    airfoils: &[Airfoil],
    span_coords: &[f64],
    target_span_coords: &[f64],
    params: &InterpolationParams,
) -> Result<Vec<Airfoil>> {
    SpanInterpolator::new(airfoils, span_coords, params)?.evaluate(target_span_coords)
}
