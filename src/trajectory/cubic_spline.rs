//! Interpolating cubic spline with not-a-knot end conditions

use nalgebra::{DMatrix, DVector};

/// Minimum number of knots for a not-a-knot cubic
pub const MIN_KNOTS: usize = 4;

/// A one dimensional interpolating cubic spline y(u)
#[derive(Debug, Clone)]
pub struct CubicSpline {
    u: Vec<f64>,
    y: Vec<f64>,
    // second derivative at each knot
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline through `(u[i], y[i])`.
    ///
    /// `u` must be strictly increasing and hold at least [`MIN_KNOTS`]
    /// values. Returns `None` if the inputs are unusable or the system
    /// cannot be solved.
    pub fn new(u: &[f64], y: &[f64]) -> Option<CubicSpline> {
        let n = u.len();
        if n < MIN_KNOTS || y.len() != n {
            return None;
        }
        if u.windows(2).any(|w| !(w[1] > w[0])) {
            return None;
        }

        let h: Vec<f64> = u.windows(2).map(|w| w[1] - w[0]).collect();

        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut b = DVector::<f64>::zeros(n);

        // third derivative continuous across the second knot
        a[(0, 0)] = h[1];
        a[(0, 1)] = -(h[0] + h[1]);
        a[(0, 2)] = h[0];

        for i in 1..n - 1 {
            a[(i, i - 1)] = h[i - 1];
            a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            a[(i, i + 1)] = h[i];
            b[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }

        // and across the second to last knot
        a[(n - 1, n - 3)] = h[n - 2];
        a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
        a[(n - 1, n - 1)] = h[n - 3];

        let m = a.lu().solve(&b)?;
        if m.iter().any(|v| !v.is_finite()) {
            return None;
        }

        Some(CubicSpline {
            u: u.to_vec(),
            y: y.to_vec(),
            m: m.iter().copied().collect(),
        })
    }

    /// Evaluate the spline at `t`, extrapolating with the end pieces
    pub fn eval(&self, t: f64) -> f64 {
        let i = self.segment(t);
        let h = self.u[i + 1] - self.u[i];
        let a = self.u[i + 1] - t;
        let b = t - self.u[i];

        self.m[i] * a.powi(3) / (6.0 * h)
            + self.m[i + 1] * b.powi(3) / (6.0 * h)
            + (self.y[i] / h - self.m[i] * h / 6.0) * a
            + (self.y[i + 1] / h - self.m[i + 1] * h / 6.0) * b
    }

    fn segment(&self, t: f64) -> usize {
        let last = self.u.len() - 2;
        // index of the first knot strictly greater than t
        let upper = self.u.partition_point(|&knot| knot <= t);
        upper.saturating_sub(1).min(last)
    }
}
