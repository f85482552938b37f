//! Level A and Level C correlation fits

use super::regression::{linear_regression, RegressionFit};
use serde::{Deserialize, Serialize};

/// A fitted correlation together with the exact input pairs used
///
/// The pooled arrays are kept for traceability and plotting only; they are
/// never reused for further computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// The least-squares fit
    pub fit: RegressionFit,
    /// Pooled in vitro values (x)
    pub in_vitro: Vec<f64>,
    /// Pooled in vivo values (y)
    pub in_vivo: Vec<f64>,
}

/// Level A point-to-point correlation
///
/// Pools % dissolved / % absorbed pairs across all formulations, sampled
/// at matched timepoints, into a single least-squares fit. Mismatched
/// per-formulation lengths are truncated to the shorter array. Fewer than
/// 2 pooled points yield the degenerate sentinel fit.
pub fn level_a_correlation(
    dissolved: &[Vec<f64>],
    absorbed: &[Vec<f64>],
) -> CorrelationResult {
    let mut all_dissolved = Vec::new();
    let mut all_absorbed = Vec::new();

    for (diss, abso) in dissolved.iter().zip(absorbed.iter()) {
        let n = diss.len().min(abso.len());
        all_dissolved.extend_from_slice(&diss[..n]);
        all_absorbed.extend_from_slice(&abso[..n]);
    }

    let fit = linear_regression(&all_dissolved, &all_absorbed);
    CorrelationResult {
        fit,
        in_vitro: all_dissolved,
        in_vivo: all_absorbed,
    }
}

/// Level C single-point correlation
///
/// Fits one scalar in vitro parameter against one scalar in vivo
/// parameter, one value per formulation. With exactly 2 formulations the
/// fit is trivially perfect (R² = 1) — a real mathematical fact surfaced
/// to demonstrate Level C's statistical weakness at low n, not masked.
pub fn level_c_correlation(in_vitro: &[f64], in_vivo: &[f64]) -> CorrelationResult {
    let fit = linear_regression(in_vitro, in_vivo);
    CorrelationResult {
        fit,
        in_vitro: in_vitro.to_vec(),
        in_vivo: in_vivo.to_vec(),
    }
}
