//! One dimensional piecewise cubic Hermite interpolation over strictly increasing knots. The
//! interpolants differ only in how the slope at each knot is chosen.

use crate::algorithms::interval_index;
use crate::errors::{AirfoilError, Result};

/// A piecewise cubic Hermite interpolant. Between knots `x[i]` and `x[i + 1]` the curve is the
/// unique cubic matching the values and slopes at both ends. Outside the knot range the cubic of
/// the nearest end interval is extended.
#[derive(Clone, Debug)]
pub struct Hermite1 {
    x: Vec<f64>,
    y: Vec<f64>,
    slopes: Vec<f64>,
}

fn secants(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let m = y
        .windows(2)
        .zip(h.iter())
        .map(|(w, h)| (w[1] - w[0]) / h)
        .collect();
    (h, m)
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// One sided three point estimate of the end slope, limited so the end interval stays shape
/// preserving
fn pchip_end_slope(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if sign(d) != sign(m0) {
        0.0
    } else if sign(m0) != sign(m1) && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}

fn pchip_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let (h, m) = secants(x, y);
    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        if m[k - 1] * m[k] > 0.0 {
            // Weighted harmonic mean of the neighboring secants
            let w1 = 2.0 * h[k] + h[k - 1];
            let w2 = h[k] + 2.0 * h[k - 1];
            d[k] = (w1 + w2) / (w1 / m[k - 1] + w2 / m[k]);
        }
    }

    d[0] = pchip_end_slope(h[0], h[1], m[0], m[1]);
    d[n - 1] = pchip_end_slope(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
    d
}

fn akima_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let (_, m) = secants(x, y);
    if n == 2 {
        return vec![m[0], m[0]];
    }

    // Secants extended by two on each side, so that e[i + 2] is the secant m[i]
    let mut e = Vec::with_capacity(n + 3);
    e.push(3.0 * m[0] - 2.0 * m[1]);
    e.push(2.0 * m[0] - m[1]);
    e.extend_from_slice(&m);
    e.push(2.0 * m[n - 2] - m[n - 3]);
    e.push(3.0 * m[n - 2] - 2.0 * m[n - 3]);

    (0..n)
        .map(|i| {
            let w0 = (e[i + 3] - e[i + 2]).abs();
            let w1 = (e[i + 1] - e[i]).abs();
            if w0 + w1 <= f64::EPSILON * (e[i + 1].abs() + e[i + 2].abs()) {
                0.5 * (e[i + 1] + e[i + 2])
            } else {
                (w0 * e[i + 1] + w1 * e[i + 2]) / (w0 + w1)
            }
        })
        .collect()
}

fn validate(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(AirfoilError::InconsistentPointCount {
            expected: x.len(),
            actual: y.len(),
        });
    }

    if x.len() < 2 {
        return Err(AirfoilError::NotEnoughStations { actual: x.len() });
    }

    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) || x.windows(2).any(|w| w[1] <= w[0]) {
        return Err(AirfoilError::NotMonotonic);
    }

    Ok(())
}

impl Hermite1 {
    /// Shape preserving interpolant using Fritsch-Carlson slopes, the weighted harmonic mean of the
    /// adjacent secants, set to zero at local extrema. Does not overshoot the data.
    pub fn pchip(x: &[f64], y: &[f64]) -> Result<Self> {
        validate(x, y)?;
        Ok(Hermite1 {
            slopes: pchip_slopes(x, y),
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Akima interpolant, with slopes from locally weighted neighboring secants
    pub fn akima(x: &[f64], y: &[f64]) -> Result<Self> {
        validate(x, y)?;
        Ok(Hermite1 {
            slopes: akima_slopes(x, y),
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    pub fn evaluate(&self, xi: f64) -> f64 {
        let i = interval_index(&self.x, xi);
        let h = self.x[i + 1] - self.x[i];
        let t = (xi - self.x[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * self.y[i]
            + h10 * h * self.slopes[i]
            + h01 * self.y[i + 1]
            + h11 * h * self.slopes[i + 1]
    }
}
