//! Level B scenario: statistical moment comparison
//!
//! MDT/MRT/VDT for the Level A formulations, a single-point MDT-vs-MRT
//! fit, and the pathological pair demonstrating Level B's key limitation:
//! two release curves with near-equal mean dissolution time but visibly
//! different shapes and different resulting residence times.

use super::config::LevelBConfig;
use super::level_a::{generate_level_a, LevelAScenario};
use crate::correlation::{level_c_correlation, CorrelationResult};
use crate::dissolution::{first_order, mean_dissolution_time, variance_of_dissolution_time, weibull};
use crate::error::IvivcError;
use crate::pk::{mean_residence_time, OneCompartmentOral};
use crate::profile::{Moment, TimeSeries};
use serde::{Deserialize, Serialize};

/// Moment summary for one formulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentComparison {
    /// Display name
    pub name: String,
    /// Mean dissolution time
    pub mdt: Moment,
    /// Mean residence time
    pub mrt: Moment,
    /// Variance of dissolution time
    pub vdt: Moment,
}

/// The pathological pair: equal first moments, different everything else
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathologicalPair {
    /// Biphasic burst-release dissolution
    pub burst_dissolution: TimeSeries,
    /// First-order comparator dissolution
    pub first_order_dissolution: TimeSeries,
    /// PK driven by the burst formulation
    pub burst_pk: TimeSeries,
    /// PK driven by the comparator
    pub first_order_pk: TimeSeries,
    /// MDT of the burst formulation
    pub burst_mdt: Moment,
    /// MDT of the comparator
    pub first_order_mdt: Moment,
    /// MRT of the burst formulation's PK
    pub burst_mrt: Moment,
    /// MRT of the comparator's PK
    pub first_order_mrt: Moment,
}

/// Complete Level B dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelBScenario {
    /// The underlying Level A scenario
    pub level_a: LevelAScenario,
    /// Per-formulation moment comparisons in display order
    pub moments: Vec<MomentComparison>,
    /// Single-point MDT vs MRT fit across the formulations
    pub correlation: CorrelationResult,
    /// The pathological pair
    pub pathological: PathologicalPair,
}

/// Generate the Level B scenario from a configuration
pub fn generate_level_b(config: &LevelBConfig) -> Result<LevelBScenario, IvivcError> {
    let level_a = generate_level_a(&config.level_a)?;

    let mut moments = Vec::with_capacity(level_a.formulations.len());
    for f in &level_a.formulations {
        moments.push(MomentComparison {
            name: f.name.clone(),
            mdt: f.mdt,
            mrt: f.exposure.mrt,
            vdt: variance_of_dissolution_time(f.dissolution.times(), f.dissolution.values()),
        });
    }

    let mdt_values: Vec<f64> = moments.iter().map(|m| m.mdt.value).collect();
    let mrt_values: Vec<f64> = moments.iter().map(|m| m.mrt.value).collect();
    let correlation = level_c_correlation(&mdt_values, &mrt_values);

    let pathological = build_pathological(config)?;

    Ok(LevelBScenario {
        level_a,
        moments,
        correlation,
        pathological,
    })
}

fn build_pathological(config: &LevelBConfig) -> Result<PathologicalPair, IvivcError> {
    let path = &config.pathological;
    let times = &path.times;
    let pk_settings = config.level_a.pk;

    let burst_release = weibull(times, &path.burst_release_params());
    let first_order_release = first_order(times, path.first_order_k, 100.0);

    let burst_model = OneCompartmentOral {
        dose: pk_settings.dose,
        ka: path.burst_ka,
        ke: pk_settings.ke,
        vd: pk_settings.vd,
    };
    let first_order_model = OneCompartmentOral {
        ka: path.first_order_ka,
        ..burst_model
    };
    let burst_conc = burst_model.concentrations(times);
    let first_order_conc = first_order_model.concentrations(times);

    Ok(PathologicalPair {
        burst_mdt: mean_dissolution_time(times, &burst_release),
        first_order_mdt: mean_dissolution_time(times, &first_order_release),
        burst_mrt: mean_residence_time(times, &burst_conc),
        first_order_mrt: mean_residence_time(times, &first_order_conc),
        burst_dissolution: TimeSeries::new(times.clone(), burst_release)?,
        first_order_dissolution: TimeSeries::new(times.clone(), first_order_release)?,
        burst_pk: TimeSeries::new(times.clone(), burst_conc)?,
        first_order_pk: TimeSeries::new(times.clone(), first_order_conc)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moments_follow_the_dissolution_ordering() {
        let scenario = generate_level_b(&LevelBConfig::default()).unwrap();

        assert_eq!(scenario.moments.len(), 3);
        // Slower dissolution raises both moments
        assert!(scenario.moments[0].mdt.value < scenario.moments[2].mdt.value);
        assert!(scenario.moments[0].mrt.value < scenario.moments[2].mrt.value);
        // The MDT-MRT relationship is positive across formulations
        assert!(scenario.correlation.fit.slope > 0.0);
        assert!(scenario.correlation.fit.r_squared > 0.9);
    }

    #[test]
    fn pathological_pair_has_matched_mdt_but_distinct_mrt() {
        let scenario = generate_level_b(&LevelBConfig::default()).unwrap();
        let pair = &scenario.pathological;

        // The two shapes are tuned to near-equal mean dissolution time
        let mdt_gap = (pair.burst_mdt.value - pair.first_order_mdt.value).abs();
        assert!(mdt_gap < 1.0, "MDT gap = {mdt_gap}");

        // Yet their residence times differ: Level B cannot tell them apart
        assert!(pair.burst_mrt.value < pair.first_order_mrt.value);
        let mrt_gap = (pair.burst_mrt.value - pair.first_order_mrt.value).abs();
        assert!(mrt_gap > 0.5, "MRT gap = {mrt_gap}");
    }

    #[test]
    fn pathological_shapes_are_visibly_different() {
        let scenario = generate_level_b(&LevelBConfig::default()).unwrap();
        let pair = &scenario.pathological;

        // The burst formulation is far ahead early on
        let burst_1h = pair.burst_dissolution.interpolate(1.0);
        let first_order_1h = pair.first_order_dissolution.interpolate(1.0);
        assert!(burst_1h > first_order_1h + 15.0);
    }

    #[test]
    fn vdt_separates_spread_profiles() {
        let scenario = generate_level_b(&LevelBConfig::default()).unwrap();
        for m in &scenario.moments {
            assert!(!m.vdt.degenerate);
            assert!(m.vdt.value > 0.0);
        }
    }
}
