//! Closed-form cumulative release curves
//!
//! All models are pure functions of a time grid and model parameters,
//! returning cumulative % released at each time point. Rate constants are
//! assumed strictly positive by the caller; a zero rate simply produces a
//! flat profile.

use serde::{Deserialize, Serialize};

/// First-order release
///
/// `F(t) = fmax · (1 − e^(−k·t))`
///
/// Monotonically increasing from 0, asymptotic to `fmax`.
pub fn first_order(times: &[f64], k: f64, fmax: f64) -> Vec<f64> {
    times.iter().map(|&t| fmax * (1.0 - (-k * t).exp())).collect()
}

/// Parameters for the Weibull release model
///
/// The burst term defaults to zero, reducing the model to a plain Weibull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeibullParams {
    /// Maximum total release (%)
    pub fmax: f64,
    /// Scale parameter (h)
    pub tau: f64,
    /// Shape parameter (dimensionless); β < 1 gives a concave sigmoid
    pub beta: f64,
    /// Fraction of dose released in the burst phase (%)
    pub burst_frac: f64,
    /// Burst phase time constant (h)
    pub burst_tau: f64,
}

impl Default for WeibullParams {
    fn default() -> Self {
        Self {
            fmax: 100.0,
            tau: 1.0,
            beta: 1.0,
            burst_frac: 0.0,
            burst_tau: 1.0,
        }
    }
}

/// Weibull release with optional burst term
///
/// `F(t) = burst_frac·(1 − e^(−t/burst_tau)) + (fmax − burst_frac)·(1 − e^(−(t/τ)^β))`
///
/// The exponential burst sub-curve models the initial surface release of
/// depot/microsphere formulations; the Weibull sub-curve models the
/// sustained erosion phase.
pub fn weibull(times: &[f64], params: &WeibullParams) -> Vec<f64> {
    times
        .iter()
        .map(|&t| {
            let burst = params.burst_frac * (1.0 - (-t / params.burst_tau).exp());
            let sustained =
                (params.fmax - params.burst_frac) * (1.0 - (-(t / params.tau).powf(params.beta)).exp());
            burst + sustained
        })
        .collect()
}

/// Higuchi square-root-of-time release, capped at `fmax`
///
/// `F(t) = min(kh·√t, fmax)`
pub fn higuchi(times: &[f64], kh: f64, fmax: f64) -> Vec<f64> {
    times.iter().map(|&t| (kh * t.sqrt()).min(fmax)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_order_starts_at_zero_and_saturates() {
        let times = vec![0.0, 1.0, 2.0, 4.0, 8.0, 24.0, 1000.0];
        let release = first_order(&times, 0.3, 100.0);

        assert_eq!(release[0], 0.0);
        for w in release.windows(2) {
            assert!(w[1] >= w[0]);
        }
        for &f in &release {
            assert!((0.0..=100.0).contains(&f));
        }
        assert_relative_eq!(release[6], 100.0, epsilon = 1e-9);
    }

    #[test]
    fn first_order_golden_values() {
        let times = vec![0.0, 1.0, 2.0, 4.0, 8.0, 24.0];
        let release = first_order(&times, 0.3, 100.0);
        let expected = [0.0, 25.9, 45.1, 69.9, 90.9, 99.94];

        for (f, e) in release.iter().zip(expected.iter()) {
            assert!((f - e).abs() < 0.1, "got {f}, expected {e}");
        }
    }

    #[test]
    fn weibull_without_burst_matches_plain_weibull() {
        let times = vec![0.0, 1.0, 5.0, 20.0];
        let params = WeibullParams {
            fmax: 100.0,
            tau: 5.0,
            beta: 0.75,
            ..Default::default()
        };
        let release = weibull(&times, &params);

        assert_eq!(release[0], 0.0);
        // At t = tau the exponent is exactly -1
        assert_relative_eq!(release[2], 100.0 * (1.0 - (-1.0_f64).exp()), epsilon = 1e-10);
    }

    #[test]
    fn weibull_with_beta_one_is_biexponential() {
        let times = vec![0.0, 0.5, 2.0, 24.0];
        let params = WeibullParams {
            fmax: 100.0,
            tau: 20.0,
            beta: 1.0,
            burst_frac: 40.0,
            burst_tau: 0.5,
        };
        let release = weibull(&times, &params);

        for (i, &t) in times.iter().enumerate() {
            let expected =
                40.0 * (1.0 - (-2.0 * t).exp()) + 60.0 * (1.0 - (-0.05 * t).exp());
            assert_relative_eq!(release[i], expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn higuchi_caps_at_fmax() {
        let times = vec![0.0, 1.0, 4.0, 100.0];
        let release = higuchi(&times, 30.0, 100.0);

        assert_eq!(release[0], 0.0);
        assert_relative_eq!(release[1], 30.0, epsilon = 1e-10);
        assert_relative_eq!(release[2], 60.0, epsilon = 1e-10);
        assert_relative_eq!(release[3], 100.0, epsilon = 1e-10);
    }
}
