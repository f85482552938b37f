//! Percentage prediction error (%PE) validation
//!
//! The regulatory acceptance rule for internal IVIVC validation:
//! mean |%PE| ≤ 10% and every individual |%PE| ≤ 15% for Cmax and AUC.

use serde::{Deserialize, Serialize};

/// Acceptance limit on the mean absolute %PE
pub const MEAN_PE_LIMIT: f64 = 10.0;

/// Acceptance limit on each individual absolute %PE
pub const INDIVIDUAL_PE_LIMIT: f64 = 15.0;

/// Per-item and aggregate prediction errors with pass/fail flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Signed %PE per item, 0 where the observed value is 0
    pub pe_values: Vec<f64>,
    /// Absolute %PE per item
    pub abs_pe: Vec<f64>,
    /// Mean absolute %PE (0 for empty input)
    pub mean_abs_pe: f64,
    /// Maximum absolute %PE (0 for empty input)
    pub max_abs_pe: f64,
    /// Mean criterion: mean |%PE| ≤ 10%
    pub passes_mean: bool,
    /// Individual criterion: every |%PE| ≤ 15%
    pub passes_individual: bool,
    /// Both criteria met
    pub passes_overall: bool,
}

/// Compute %PE between predicted and observed parameter values
///
/// ```text
/// %PE = (Predicted − Observed) / Observed × 100
/// ```
///
/// Pairs up to the shorter of the two arrays. Items with an observed value
/// of 0 contribute a %PE of 0 rather than a fault; empty input yields the
/// zero summary with both criteria vacuously passing.
pub fn prediction_error(predicted: &[f64], observed: &[f64]) -> ValidationResult {
    let n = predicted.len().min(observed.len());

    let pe_values: Vec<f64> = (0..n)
        .map(|i| {
            if observed[i] == 0.0 {
                0.0
            } else {
                (predicted[i] - observed[i]) / observed[i] * 100.0
            }
        })
        .collect();
    let abs_pe: Vec<f64> = pe_values.iter().map(|pe| pe.abs()).collect();

    let mean_abs_pe = if abs_pe.is_empty() {
        0.0
    } else {
        abs_pe.iter().sum::<f64>() / abs_pe.len() as f64
    };
    let max_abs_pe = abs_pe.iter().copied().fold(0.0, f64::max);

    let passes_mean = mean_abs_pe <= MEAN_PE_LIMIT;
    let passes_individual = max_abs_pe <= INDIVIDUAL_PE_LIMIT;

    ValidationResult {
        pe_values,
        abs_pe,
        mean_abs_pe,
        max_abs_pe,
        passes_mean,
        passes_individual,
        passes_overall: passes_mean && passes_individual,
    }
}
