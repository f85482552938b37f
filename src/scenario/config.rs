//! Scenario preset configurations
//!
//! Every recognized scenario preset is an explicit configuration structure
//! with a `Default` carrying the canonical parameter values, passed to the
//! generators rather than baked into their signatures. Each config hashes
//! itself to a 64-bit key for the memoization adapter in
//! [`crate::scenario::ScenarioCache`].

use crate::dissolution::WeibullParams;
use crate::pk::BiexponentialDepot;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Shared one-compartment PK settings for the oral scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OralPkSettings {
    /// Dose (mg)
    pub dose: f64,
    /// Elimination rate constant (h⁻¹)
    pub ke: f64,
    /// Volume of distribution (L)
    pub vd: f64,
}

impl Default for OralPkSettings {
    fn default() -> Self {
        Self {
            dose: 100.0,
            ke: 0.10,
            vd: 50.0,
        }
    }
}

/// Level A preset: three extended-release oral formulations plus an
/// immediate-release reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelAConfig {
    /// First-order dissolution rate, fast formulation (h⁻¹)
    pub k_fast: f64,
    /// First-order dissolution rate, medium formulation (h⁻¹)
    pub k_medium: f64,
    /// First-order dissolution rate, slow formulation (h⁻¹)
    pub k_slow: f64,
    /// Shared PK settings
    pub pk: OralPkSettings,
    /// Absorption rate as a multiple of the dissolution rate
    pub ka_ratio: f64,
    /// Dissolution rate of the immediate-release reference (h⁻¹)
    pub reference_k: f64,
    /// Dissolution sampling grid (h)
    pub dissolution_times: Vec<f64>,
    /// PK sampling grid (h)
    pub pk_times: Vec<f64>,
}

impl Default for LevelAConfig {
    fn default() -> Self {
        Self {
            k_fast: 0.30,
            k_medium: 0.15,
            k_slow: 0.08,
            pk: OralPkSettings::default(),
            ka_ratio: 1.5,
            reference_k: 5.0,
            dissolution_times: vec![
                0.0, 0.25, 0.5, 1.0, 2.0, 3.0, 4.0, 6.0, 8.0, 10.0, 12.0, 16.0, 20.0, 24.0,
            ],
            pk_times: vec![
                0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 6.0, 8.0, 10.0, 12.0, 16.0, 20.0, 24.0,
            ],
        }
    }
}

impl LevelAConfig {
    /// Formulation labels in display order, paired with their rates
    pub fn formulations(&self) -> [(&'static str, f64); 3] {
        [
            ("F1 (Fast)", self.k_fast),
            ("F2 (Medium)", self.k_medium),
            ("F3 (Slow)", self.k_slow),
        ]
    }

    /// Memoization key over the full parameter tuple
    pub fn cache_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_f64(&mut hasher, self.k_fast);
        hash_f64(&mut hasher, self.k_medium);
        hash_f64(&mut hasher, self.k_slow);
        hash_f64(&mut hasher, self.pk.dose);
        hash_f64(&mut hasher, self.pk.ke);
        hash_f64(&mut hasher, self.pk.vd);
        hash_f64(&mut hasher, self.ka_ratio);
        hash_f64(&mut hasher, self.reference_k);
        hash_f64_slice(&mut hasher, &self.dissolution_times);
        hash_f64_slice(&mut hasher, &self.pk_times);
        hasher.finish()
    }
}

/// The deliberately pathological Level B pair: a biphasic-burst release
/// and a first-order release tuned to near-equal mean dissolution time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathologicalConfig {
    /// Burst fraction of the biphasic formulation (%)
    pub burst_frac: f64,
    /// Burst phase rate constant (h⁻¹)
    pub burst_rate: f64,
    /// Sustained phase rate constant of the biphasic formulation (h⁻¹)
    pub slow_rate: f64,
    /// Rate constant of the first-order comparator (h⁻¹)
    pub first_order_k: f64,
    /// Absorption rate driving the biphasic formulation's PK (h⁻¹)
    pub burst_ka: f64,
    /// Absorption rate driving the comparator's PK (h⁻¹)
    pub first_order_ka: f64,
    /// Shared sampling grid (h)
    pub times: Vec<f64>,
}

impl Default for PathologicalConfig {
    fn default() -> Self {
        Self {
            burst_frac: 40.0,
            burst_rate: 2.0,
            slow_rate: 0.05,
            first_order_k: 0.16,
            burst_ka: 0.8,
            first_order_ka: 0.25,
            times: uniform_grid(0.0, 24.0, 100),
        }
    }
}

impl PathologicalConfig {
    /// The biphasic release expressed as a Weibull model with β = 1
    pub fn burst_release_params(&self) -> WeibullParams {
        WeibullParams {
            fmax: 100.0,
            tau: 1.0 / self.slow_rate,
            beta: 1.0,
            burst_frac: self.burst_frac,
            burst_tau: 1.0 / self.burst_rate,
        }
    }
}

/// Level B preset: the Level A scenario's moments plus the pathological pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelBConfig {
    /// Underlying Level A scenario
    pub level_a: LevelAConfig,
    /// Pathological pair parameters
    pub pathological: PathologicalConfig,
}

impl LevelBConfig {
    /// Memoization key over the full parameter tuple
    pub fn cache_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.level_a.cache_key().hash(&mut hasher);
        hash_f64(&mut hasher, self.pathological.burst_frac);
        hash_f64(&mut hasher, self.pathological.burst_rate);
        hash_f64(&mut hasher, self.pathological.slow_rate);
        hash_f64(&mut hasher, self.pathological.first_order_k);
        hash_f64(&mut hasher, self.pathological.burst_ka);
        hash_f64(&mut hasher, self.pathological.first_order_ka);
        hash_f64_slice(&mut hasher, &self.pathological.times);
        hasher.finish()
    }
}

/// One depot formulation: a Weibull release model plus bi-exponential PK
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepotFormulation {
    /// Display name (opaque key for the presentation layer)
    pub name: String,
    /// In vitro release model
    pub release: WeibullParams,
    /// In vivo PK model
    pub pk: BiexponentialDepot,
}

/// Level C preset: three polymer-weight depot formulations plus a fast
/// solution comparator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCConfig {
    /// Depot formulations in display order
    pub formulations: Vec<DepotFormulation>,
    /// First-order rate of the solution comparator (h⁻¹)
    pub solution_k: f64,
    /// Release sampling grid (h)
    pub release_times: Vec<f64>,
    /// PK sampling grid (h)
    pub pk_times: Vec<f64>,
}

impl Default for LevelCConfig {
    fn default() -> Self {
        Self {
            formulations: vec![
                DepotFormulation {
                    name: "A (Low MW)".to_string(),
                    release: WeibullParams {
                        fmax: 88.0,
                        tau: 300.0,
                        beta: 0.75,
                        burst_frac: 15.0,
                        burst_tau: 8.0,
                    },
                    pk: BiexponentialDepot {
                        a1: 0.90,
                        alpha1: 0.004,
                        ka: 1.2,
                        a2: 0.08,
                        alpha2: 0.0006,
                    },
                },
                DepotFormulation {
                    name: "B (Medium MW)".to_string(),
                    release: WeibullParams {
                        fmax: 68.0,
                        tau: 420.0,
                        beta: 0.70,
                        burst_frac: 7.0,
                        burst_tau: 10.0,
                    },
                    pk: BiexponentialDepot {
                        a1: 0.60,
                        alpha1: 0.0025,
                        ka: 0.20,
                        a2: 0.20,
                        alpha2: 0.0005,
                    },
                },
                DepotFormulation {
                    name: "C (High MW)".to_string(),
                    release: WeibullParams {
                        fmax: 58.0,
                        tau: 500.0,
                        beta: 0.68,
                        burst_frac: 4.5,
                        burst_tau: 11.0,
                    },
                    pk: BiexponentialDepot {
                        a1: 0.25,
                        alpha1: 0.0012,
                        ka: 0.06,
                        a2: 0.35,
                        alpha2: 0.0003,
                    },
                },
            ],
            solution_k: 0.5,
            release_times: vec![
                0.0, 1.0, 6.0, 24.0, 72.0, 168.0, 336.0, 504.0, 672.0, 720.0,
            ],
            pk_times: vec![
                0.5, 1.0, 2.0, 4.0, 6.0, 8.0, 12.0, 24.0, 48.0, 72.0, 168.0, 336.0, 504.0,
                672.0, 840.0,
            ],
        }
    }
}

impl LevelCConfig {
    /// Memoization key over the full parameter tuple
    pub fn cache_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for f in &self.formulations {
            f.name.hash(&mut hasher);
            hash_f64(&mut hasher, f.release.fmax);
            hash_f64(&mut hasher, f.release.tau);
            hash_f64(&mut hasher, f.release.beta);
            hash_f64(&mut hasher, f.release.burst_frac);
            hash_f64(&mut hasher, f.release.burst_tau);
            hash_f64(&mut hasher, f.pk.a1);
            hash_f64(&mut hasher, f.pk.alpha1);
            hash_f64(&mut hasher, f.pk.ka);
            hash_f64(&mut hasher, f.pk.a2);
            hash_f64(&mut hasher, f.pk.alpha2);
        }
        hash_f64(&mut hasher, self.solution_k);
        hash_f64_slice(&mut hasher, &self.release_times);
        hash_f64_slice(&mut hasher, &self.pk_times);
        hasher.finish()
    }
}

/// Evenly spaced grid of `n` points from `start` to `end` inclusive
pub fn uniform_grid(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

fn hash_f64<H: Hasher>(hasher: &mut H, value: f64) {
    value.to_bits().hash(hasher);
}

fn hash_f64_slice<H: Hasher>(hasher: &mut H, values: &[f64]) {
    values.len().hash(hasher);
    for &v in values {
        hash_f64(hasher, v);
    }
}
