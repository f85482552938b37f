//! Wagner-Nelson deconvolution
//!
//! Recovers the fraction absorbed from a plasma concentration curve using
//! only the elimination rate constant:
//!
//! ```text
//! Fa(t) = [C(t) + ke·AUC(0,t)] / [ke·AUC(0,∞)]
//! ```
//!
//! with `AUC(0,∞) = AUC(0,t_last) + C(t_last)/ke`. No IV reference curve is
//! needed, which is what makes Level A correlation possible from oral data
//! alone. Valid for one-compartment elimination kinetics.

use crate::error::IvivcError;
use crate::profile::{trapezoid_cumulative, TimeSeries};
use serde::{Deserialize, Serialize};

/// Fraction-absorbed curve and the intermediates used to normalize it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeconvolutionResult {
    /// Fraction absorbed over time, clipped to [0, 1]
    pub fraction_absorbed: TimeSeries,
    /// Cumulative AUC(0,t) at each time point
    pub auc_cumulative: Vec<f64>,
    /// Extrapolated AUC(0,∞)
    pub auc_total: f64,
    /// Unnormalized amount-absorbed signal, `C(t) + ke·AUC(0,t)`
    pub amount_absorbed: Vec<f64>,
    /// True if the normalizing denominator `ke·AUC(0,∞)` was non-positive
    /// and the fraction-absorbed curve fell back to all zeros
    pub degenerate: bool,
}

/// Wagner-Nelson deconvolution of a concentration curve
///
/// `ke ≤ 0` disables the tail extrapolation and yields the degenerate
/// all-zero fraction-absorbed curve. Numerical overshoot from the discrete
/// AUC is absorbed by clipping to [0, 1].
///
/// # Errors
///
/// Returns [`IvivcError::LengthMismatch`] if `times` and `conc` differ in
/// length, or a grid validation error from [`TimeSeries::new`].
pub fn wagner_nelson(
    times: &[f64],
    conc: &[f64],
    ke: f64,
) -> Result<DeconvolutionResult, IvivcError> {
    if times.len() != conc.len() {
        return Err(IvivcError::LengthMismatch {
            times: times.len(),
            values: conc.len(),
        });
    }

    let auc_cumulative = trapezoid_cumulative(times, conc);
    let auc_last = auc_cumulative.last().copied().unwrap_or(0.0);
    let c_last = conc.last().copied().unwrap_or(0.0);

    let auc_total = if ke > 0.0 {
        auc_last + c_last / ke
    } else {
        auc_last
    };

    let amount_absorbed: Vec<f64> = conc
        .iter()
        .zip(auc_cumulative.iter())
        .map(|(c, a)| c + ke * a)
        .collect();

    let denom = ke * auc_total;
    let (fraction, degenerate) = if denom > 0.0 {
        let fa = amount_absorbed
            .iter()
            .map(|a| (a / denom).clamp(0.0, 1.0))
            .collect();
        (fa, false)
    } else {
        (vec![0.0; times.len()], true)
    };

    Ok(DeconvolutionResult {
        fraction_absorbed: TimeSeries::new(times.to_vec(), fraction)?,
        auc_cumulative,
        auc_total,
        amount_absorbed,
        degenerate,
    })
}
