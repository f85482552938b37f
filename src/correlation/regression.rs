//! Ordinary least-squares regression with significance statistics

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Guard against division by zero when R² is exactly 1
const R_GUARD: f64 = 1e-20;

/// Result of a univariate least-squares fit
///
/// Fewer than 2 paired points, or points with no x-variance, produce the
/// degenerate sentinel (all-zero fit, p = 1) rather than an error: edge
/// parameter sweeps must stay usable. A trivially perfect fit at n = 2 is
/// reported as the real mathematical fact it is (R² = 1, p = 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    /// Fitted slope
    pub slope: f64,
    /// Fitted intercept
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Two-sided p-value of the slope (Student-t, n − 2 df)
    pub p_value: f64,
    /// Standard error of the slope
    pub std_err: f64,
    /// Number of paired points used
    pub n: usize,
    /// True if the sentinel fallback was returned
    pub degenerate: bool,
}

impl RegressionFit {
    /// The sentinel for an unfittable input
    pub fn sentinel(n: usize) -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
            p_value: 1.0,
            std_err: 0.0,
            n,
            degenerate: true,
        }
    }
}

/// Fit `y = slope·x + intercept` by ordinary least squares
///
/// Pairs up to the shorter of the two arrays. With exactly 2 distinct
/// points the fit is exact and the significance statistics are fixed at
/// p = 1, stderr = 0 (no residual degrees of freedom).
pub fn linear_regression(x: &[f64], y: &[f64]) -> RegressionFit {
    let n = x.len().min(y.len());
    if n < 2 {
        return RegressionFit::sentinel(n);
    }

    let nf = n as f64;
    let mean_x = x[..n].iter().sum::<f64>() / nf;
    let mean_y = y[..n].iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        // Vertical data: slope undefined
        return RegressionFit::sentinel(n);
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    // Horizontal data fits perfectly with slope 0; report r = 0 like the
    // conventional formula's limit
    let r = if syy == 0.0 { 0.0 } else { sxy / (sxx * syy).sqrt() };
    let r_squared = r * r;

    let df = n - 2;
    let (p_value, std_err) = if df == 0 {
        (1.0, 0.0)
    } else {
        let dff = df as f64;
        let t = r * (dff / ((1.0 - r + R_GUARD) * (1.0 + r + R_GUARD))).sqrt();
        let p = match StudentsT::new(0.0, 1.0, dff) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0),
            Err(_) => 1.0,
        };
        let se = ((1.0 - r_squared) * syy / sxx / dff).sqrt();
        (p, se)
    };

    RegressionFit {
        slope,
        intercept,
        r_squared,
        p_value,
        std_err,
        n,
        degenerate: false,
    }
}
