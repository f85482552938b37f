//! f1/f2 dissolution profile comparison factors
//!
//! The FDA/EMA framework for declaring two dissolution profiles similar:
//!
//! ```text
//! f1 = Σ|Rt − Tt| / ΣRt × 100
//! f2 = 50 · log10{ [1 + (1/n)·Σ(Rt − Tt)²]^(−0.5) × 100 }
//! ```
//!
//! The accepted thresholds are f1 ≤ 15 and f2 ≥ 50. Both profiles must be
//! sampled at the same timepoints; this module checks lengths only and
//! leaves grid agreement to the caller.

use crate::error::IvivcError;
use serde::{Deserialize, Serialize};

/// Regulatory acceptance limit for the f1 difference factor
pub const F1_SIMILARITY_LIMIT: f64 = 15.0;

/// Regulatory acceptance limit for the f2 similarity factor
pub const F2_SIMILARITY_LIMIT: f64 = 50.0;

/// f1/f2 pair for one reference/test profile comparison
///
/// Thresholds are reported via [`SimilarityResult::f1_similar`] and
/// [`SimilarityResult::f2_similar`] but never enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Difference factor (0 for identical profiles)
    pub f1: f64,
    /// Similarity factor (100 for identical profiles)
    pub f2: f64,
    /// True if f1 fell back to 0 because the reference released nothing
    pub degenerate: bool,
}

impl SimilarityResult {
    /// Whether f1 meets the regulatory similarity limit
    pub fn f1_similar(&self) -> bool {
        self.f1 <= F1_SIMILARITY_LIMIT
    }

    /// Whether f2 meets the regulatory similarity limit
    pub fn f2_similar(&self) -> bool {
        self.f2 >= F2_SIMILARITY_LIMIT
    }
}

/// Compute f1 and f2 between a reference and a test profile
///
/// # Errors
///
/// Returns [`IvivcError::ProfileMismatch`] if the profiles differ in
/// length and [`IvivcError::EmptyProfile`] if they are empty.
pub fn similarity_factors(
    reference: &[f64],
    test: &[f64],
) -> Result<SimilarityResult, IvivcError> {
    if reference.len() != test.len() {
        return Err(IvivcError::ProfileMismatch {
            reference: reference.len(),
            test: test.len(),
        });
    }
    if reference.is_empty() {
        return Err(IvivcError::EmptyProfile);
    }

    let n = reference.len() as f64;
    let mut abs_diff_sum = 0.0;
    let mut sq_diff_sum = 0.0;
    let mut ref_sum = 0.0;
    for (r, t) in reference.iter().zip(test.iter()) {
        abs_diff_sum += (r - t).abs();
        sq_diff_sum += (r - t) * (r - t);
        ref_sum += r;
    }

    let (f1, degenerate) = if ref_sum > 0.0 {
        (abs_diff_sum / ref_sum * 100.0, false)
    } else {
        (0.0, true)
    };

    let mean_sq_diff = sq_diff_sum / n;
    let f2 = 50.0 * (100.0 / (1.0 + mean_sq_diff).sqrt()).log10();

    Ok(SimilarityResult { f1, f2, degenerate })
}
