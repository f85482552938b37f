//! Level A scenario: extended-release oral tablets
//!
//! Three formulations with distinct first-order dissolution rates, each
//! absorbed at a rate proportional to its dissolution rate, deconvolved
//! with Wagner-Nelson and pooled into a point-to-point correlation, then
//! internally validated against the FDA %PE criteria.

use super::config::LevelAConfig;
use crate::correlation::{
    level_a_correlation, prediction_error, CorrelationResult, ValidationResult,
};
use crate::deconvolution::{wagner_nelson, DeconvolutionResult};
use crate::dissolution::{dissolution_efficiency, first_order, mean_dissolution_time};
use crate::error::IvivcError;
use crate::pk::{ExposureSummary, OneCompartmentOral};
use crate::profile::{Moment, TimeSeries};
use serde::{Deserialize, Serialize};

/// Everything derived for one oral formulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OralFormulationResult {
    /// Display name (opaque key, order preserved by the containing `Vec`)
    pub name: String,
    /// First-order dissolution rate constant (h⁻¹)
    pub dissolution_k: f64,
    /// Absorption rate constant used for the PK curve (h⁻¹)
    pub ka: f64,
    /// Cumulative % released
    pub dissolution: TimeSeries,
    /// Plasma concentration
    pub pk: TimeSeries,
    /// Wagner-Nelson fraction absorbed
    pub absorption: DeconvolutionResult,
    /// Cmax/Tmax/AUC/AUMC/MRT of the PK curve
    pub exposure: ExposureSummary,
    /// Mean dissolution time
    pub mdt: Moment,
    /// Dissolution efficiency
    pub de: Moment,
    /// Time to 50% release, `ln 2 / k` (infinite for a zero rate)
    pub t50: f64,
}

/// Complete Level A dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelAScenario {
    /// The configuration that produced this bundle
    pub config: LevelAConfig,
    /// Per-formulation results in display order
    pub formulations: Vec<OralFormulationResult>,
    /// Immediate-release reference dissolution
    pub reference_dissolution: TimeSeries,
    /// Immediate-release reference PK
    pub reference_pk: TimeSeries,
    /// Pooled % dissolved vs % absorbed correlation
    pub correlation: CorrelationResult,
    /// %PE validation of predicted vs observed Cmax
    pub validation_cmax: ValidationResult,
    /// %PE validation of predicted vs observed AUC
    pub validation_auc: ValidationResult,
}

/// Generate the Level A scenario from a configuration
pub fn generate_level_a(config: &LevelAConfig) -> Result<LevelAScenario, IvivcError> {
    let pk_settings = config.pk;
    let mut formulations = Vec::with_capacity(3);

    for (name, k) in config.formulations() {
        let release = first_order(&config.dissolution_times, k, 100.0);
        let ka = k * config.ka_ratio;
        let model = OneCompartmentOral {
            dose: pk_settings.dose,
            ka,
            ke: pk_settings.ke,
            vd: pk_settings.vd,
        };
        let conc = model.concentrations(&config.pk_times);

        let absorption = wagner_nelson(&config.pk_times, &conc, pk_settings.ke)?;
        let exposure = ExposureSummary::from_profile(&config.pk_times, &conc);
        let mdt = mean_dissolution_time(&config.dissolution_times, &release);
        let de = dissolution_efficiency(&config.dissolution_times, &release);
        let t50 = if k > 0.0 {
            std::f64::consts::LN_2 / k
        } else {
            f64::INFINITY
        };

        formulations.push(OralFormulationResult {
            name: name.to_string(),
            dissolution_k: k,
            ka,
            dissolution: TimeSeries::new(config.dissolution_times.clone(), release)?,
            pk: TimeSeries::new(config.pk_times.clone(), conc)?,
            absorption,
            exposure,
            mdt,
            de,
            t50,
        });
    }

    // Pool % dissolved against % absorbed, with absorption interpolated
    // onto the dissolution grid
    let mut dissolved = Vec::with_capacity(formulations.len());
    let mut absorbed = Vec::with_capacity(formulations.len());
    for f in &formulations {
        let fa_pct: Vec<f64> = f
            .absorption
            .fraction_absorbed
            .sample_at(&config.dissolution_times)
            .into_iter()
            .map(|fa| fa * 100.0)
            .collect();
        dissolved.push(f.dissolution.values().to_vec());
        absorbed.push(fa_pct);
    }
    let correlation = level_a_correlation(&dissolved, &absorbed);

    // Internal validation: predict each formulation's PK through the
    // fitted model (absorption rate scaled by the correlation slope) and
    // compare Cmax/AUC against the observed values
    let mut pred_cmax = Vec::with_capacity(formulations.len());
    let mut obs_cmax = Vec::with_capacity(formulations.len());
    let mut pred_auc = Vec::with_capacity(formulations.len());
    let mut obs_auc = Vec::with_capacity(formulations.len());
    for f in &formulations {
        let ka_pred = f.dissolution_k * config.ka_ratio * correlation.fit.slope;
        let model = OneCompartmentOral {
            dose: pk_settings.dose,
            ka: ka_pred,
            ke: pk_settings.ke,
            vd: pk_settings.vd,
        };
        let predicted = ExposureSummary::from_profile(
            &config.pk_times,
            &model.concentrations(&config.pk_times),
        );
        pred_cmax.push(predicted.cmax);
        obs_cmax.push(f.exposure.cmax);
        pred_auc.push(predicted.auc);
        obs_auc.push(f.exposure.auc);
    }
    let validation_cmax = prediction_error(&pred_cmax, &obs_cmax);
    let validation_auc = prediction_error(&pred_auc, &obs_auc);

    let reference_release = first_order(&config.dissolution_times, config.reference_k, 100.0);
    let reference_model = OneCompartmentOral {
        dose: pk_settings.dose,
        ka: config.reference_k,
        ke: pk_settings.ke,
        vd: pk_settings.vd,
    };
    let reference_conc = reference_model.concentrations(&config.pk_times);

    Ok(LevelAScenario {
        config: config.clone(),
        formulations,
        reference_dissolution: TimeSeries::new(
            config.dissolution_times.clone(),
            reference_release,
        )?,
        reference_pk: TimeSeries::new(config.pk_times.clone(), reference_conc)?,
        correlation,
        validation_cmax,
        validation_auc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_builds_three_ordered_formulations() {
        let scenario = generate_level_a(&LevelAConfig::default()).unwrap();

        let names: Vec<&str> = scenario
            .formulations
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["F1 (Fast)", "F2 (Medium)", "F3 (Slow)"]);

        // Faster dissolution means earlier and higher exposure
        let f1 = &scenario.formulations[0];
        let f3 = &scenario.formulations[2];
        assert!(f1.exposure.cmax > f3.exposure.cmax);
        assert!(f1.exposure.tmax < f3.exposure.tmax);
        assert!(f1.mdt.value < f3.mdt.value);
        assert!(f1.t50 < f3.t50);
    }

    #[test]
    fn pooled_correlation_is_strong_for_the_default_preset() {
        let scenario = generate_level_a(&LevelAConfig::default()).unwrap();

        assert!(!scenario.correlation.fit.degenerate);
        assert!(scenario.correlation.fit.r_squared > 0.9);
        assert!(scenario.correlation.fit.p_value < 1e-6);
        // 3 formulations × 14 dissolution timepoints
        assert_eq!(scenario.correlation.in_vitro.len(), 42);
    }

    #[test]
    fn absorption_curves_are_physical() {
        let scenario = generate_level_a(&LevelAConfig::default()).unwrap();

        for f in &scenario.formulations {
            assert!(!f.absorption.degenerate);
            for &fa in f.absorption.fraction_absorbed.values() {
                assert!((0.0..=1.0).contains(&fa));
            }
        }
    }

    #[test]
    fn validation_reports_both_criteria() {
        let scenario = generate_level_a(&LevelAConfig::default()).unwrap();

        assert_eq!(scenario.validation_cmax.pe_values.len(), 3);
        assert_eq!(scenario.validation_auc.pe_values.len(), 3);
        assert_eq!(
            scenario.validation_auc.passes_overall,
            scenario.validation_auc.passes_mean && scenario.validation_auc.passes_individual
        );
    }

    #[test]
    fn reference_releases_faster_than_every_formulation() {
        let scenario = generate_level_a(&LevelAConfig::default()).unwrap();
        let ref_at_1h = scenario.reference_dissolution.interpolate(1.0);

        for f in &scenario.formulations {
            assert!(ref_at_1h > f.dissolution.interpolate(1.0));
        }
    }
}
