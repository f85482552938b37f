//! Level C scenario: PLGA depot formulations
//!
//! Three polymer-weight formulations with Weibull release and
//! bi-exponential depot PK, a fast solution comparator, single-point
//! parameter sets on both sides, the full cross-parameter correlation
//! matrix, and f1/f2 similarity for every profile pair.

use super::config::LevelCConfig;
use crate::correlation::{correlation_matrix, CorrelationMatrix, ParameterSet};
use crate::dissolution::{
    dissolution_efficiency, first_order, mean_dissolution_time, similarity_factors,
    SimilarityResult,
};
use crate::error::IvivcError;
use crate::pk::{auc, mean_residence_time, tmax};
use crate::profile::TimeSeries;
use serde::{Deserialize, Serialize};

/// Sampling hours at which single-point release values are extracted
const RELEASE_CHECKPOINTS: [(&str, f64); 6] = [
    ("%Rel 1h", 1.0),
    ("%Rel 6h", 6.0),
    ("%Rel 24h", 24.0),
    ("%Rel 72h", 72.0),
    ("%Rel 7d", 168.0),
    ("%Rel 14d", 336.0),
];

/// Curves for one depot formulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepotFormulationResult {
    /// Display name
    pub name: String,
    /// Cumulative % released
    pub release: TimeSeries,
    /// Plasma concentration normalized to the first formulation's Cmax
    pub pk_normalized: TimeSeries,
}

/// Complete Level C dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCScenario {
    /// The configuration that produced this bundle
    pub config: LevelCConfig,
    /// Per-formulation curves in display order
    pub formulations: Vec<DepotFormulationResult>,
    /// Fast solution comparator release
    pub solution_release: TimeSeries,
    /// Single-point in vitro parameters (checkpointed release, MDT, DE)
    pub in_vitro: ParameterSet,
    /// Single-point in vivo parameters (normalized AUC, MRT, Tmax)
    pub in_vivo: ParameterSet,
    /// Full cross-parameter correlation matrix
    pub matrix: CorrelationMatrix,
    /// Labeled f1/f2 results for every formulation pair and each
    /// formulation against the solution comparator
    pub similarity: Vec<(String, SimilarityResult)>,
}

/// Generate the Level C scenario from a configuration
pub fn generate_level_c(config: &LevelCConfig) -> Result<LevelCScenario, IvivcError> {
    let release_times = &config.release_times;
    let pk_times = &config.pk_times;

    let mut releases = Vec::with_capacity(config.formulations.len());
    let mut pk_raw = Vec::with_capacity(config.formulations.len());
    for f in &config.formulations {
        releases.push(crate::dissolution::weibull(release_times, &f.release));
        pk_raw.push(f.pk.concentrations(pk_times));
    }

    // Normalize every PK curve to the first formulation's Cmax so the
    // in vivo parameters are comparable across formulations
    let cmax_first = pk_raw
        .first()
        .map(|c| crate::pk::cmax(c))
        .unwrap_or(0.0);
    let pk_normalized: Vec<Vec<f64>> = pk_raw
        .iter()
        .map(|conc| {
            if cmax_first > 0.0 {
                conc.iter().map(|c| c / cmax_first).collect()
            } else {
                conc.clone()
            }
        })
        .collect();

    let mut formulations = Vec::with_capacity(config.formulations.len());
    for ((f, release), pk_norm) in config
        .formulations
        .iter()
        .zip(releases.iter())
        .zip(pk_normalized.iter())
    {
        formulations.push(DepotFormulationResult {
            name: f.name.clone(),
            release: TimeSeries::new(release_times.clone(), release.clone())?,
            pk_normalized: TimeSeries::new(pk_times.clone(), pk_norm.clone())?,
        });
    }

    let in_vitro = build_in_vitro_params(&formulations);
    let in_vivo = build_in_vivo_params(pk_times, &pk_normalized);
    let matrix = correlation_matrix(&in_vitro, &in_vivo);

    let solution = first_order(release_times, config.solution_k, 100.0);
    let similarity = build_similarity(&formulations, &solution)?;

    Ok(LevelCScenario {
        config: config.clone(),
        formulations,
        solution_release: TimeSeries::new(release_times.clone(), solution)?,
        in_vitro,
        in_vivo,
        matrix,
        similarity,
    })
}

fn build_in_vitro_params(formulations: &[DepotFormulationResult]) -> ParameterSet {
    let mut params = ParameterSet::new();

    for (label, hour) in RELEASE_CHECKPOINTS {
        let values = formulations
            .iter()
            .map(|f| f.release.nearest(hour))
            .collect();
        params.insert(label, values);
    }
    params.insert(
        "MDT (h)",
        formulations
            .iter()
            .map(|f| mean_dissolution_time(f.release.times(), f.release.values()).value)
            .collect(),
    );
    params.insert(
        "DE (%)",
        formulations
            .iter()
            .map(|f| dissolution_efficiency(f.release.times(), f.release.values()).value)
            .collect(),
    );

    params
}

fn build_in_vivo_params(pk_times: &[f64], pk_normalized: &[Vec<f64>]) -> ParameterSet {
    let mut params = ParameterSet::new();

    params.insert(
        "AUC_norm",
        pk_normalized.iter().map(|c| auc(pk_times, c)).collect(),
    );
    params.insert(
        "MRT (h)",
        pk_normalized
            .iter()
            .map(|c| mean_residence_time(pk_times, c).value)
            .collect(),
    );
    params.insert(
        "Tmax (h)",
        pk_normalized.iter().map(|c| tmax(pk_times, c)).collect(),
    );

    params
}

fn build_similarity(
    formulations: &[DepotFormulationResult],
    solution: &[f64],
) -> Result<Vec<(String, SimilarityResult)>, IvivcError> {
    let mut results = Vec::new();

    for i in 0..formulations.len() {
        for j in (i + 1)..formulations.len() {
            let label = format!(
                "{} vs {}",
                short_name(&formulations[i].name),
                short_name(&formulations[j].name)
            );
            let factors = similarity_factors(
                formulations[i].release.values(),
                formulations[j].release.values(),
            )?;
            results.push((label, factors));
        }
    }

    for f in formulations {
        let label = format!("{} vs Solution", short_name(&f.name));
        let factors = similarity_factors(f.release.values(), solution)?;
        results.push((label, factors));
    }

    Ok(results)
}

/// First whitespace-delimited token of a formulation name, for labels
fn short_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
