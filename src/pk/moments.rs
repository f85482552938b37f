//! Moment-based exposure parameters

use crate::profile::{trapezoid, Moment};
use serde::{Deserialize, Serialize};

/// Area under the concentration curve (linear trapezoidal rule)
pub fn auc(times: &[f64], conc: &[f64]) -> f64 {
    trapezoid(times, conc)
}

/// Area under the first moment curve, `∫ t·C(t) dt`
pub fn aumc(times: &[f64], conc: &[f64]) -> f64 {
    assert_eq!(
        times.len(),
        conc.len(),
        "times and concentrations must have the same length"
    );

    let weighted: Vec<f64> = times.iter().zip(conc.iter()).map(|(t, c)| t * c).collect();
    trapezoid(times, &weighted)
}

/// Mean residence time, `MRT = AUMC / AUC`
///
/// Returns the fallback when AUC is 0.
pub fn mean_residence_time(times: &[f64], conc: &[f64]) -> Moment {
    let area = auc(times, conc);
    if area == 0.0 {
        return Moment::fallback();
    }
    Moment::computed(aumc(times, conc) / area)
}

/// Maximum observed concentration (0.0 for an empty profile)
pub fn cmax(conc: &[f64]) -> f64 {
    conc.iter().copied().fold(0.0, f64::max)
}

/// Time of the maximum observed concentration (0.0 for an empty profile)
pub fn tmax(times: &[f64], conc: &[f64]) -> f64 {
    assert_eq!(
        times.len(),
        conc.len(),
        "times and concentrations must have the same length"
    );

    let mut best_t = 0.0;
    let mut best_c = f64::NEG_INFINITY;
    for (&t, &c) in times.iter().zip(conc.iter()) {
        if c > best_c {
            best_c = c;
            best_t = t;
        }
    }
    if conc.is_empty() {
        0.0
    } else {
        best_t
    }
}

/// Exposure parameters derived from one concentration profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureSummary {
    /// Maximum observed concentration
    pub cmax: f64,
    /// Time of maximum concentration
    pub tmax: f64,
    /// Area under the curve over the sampled interval
    pub auc: f64,
    /// Area under the first moment curve
    pub aumc: f64,
    /// Mean residence time (fallback 0 when AUC is 0)
    pub mrt: Moment,
}

impl ExposureSummary {
    /// Compute all exposure parameters from a sampled profile
    pub fn from_profile(times: &[f64], conc: &[f64]) -> Self {
        Self {
            cmax: cmax(conc),
            tmax: tmax(times, conc),
            auc: auc(times, conc),
            aumc: aumc(times, conc),
            mrt: mean_residence_time(times, conc),
        }
    }
}
