//! Synthetic multi-formulation scenario generation
//!
//! The integration point over the dissolution, PK, deconvolution, and
//! correlation modules: each generator assembles a complete dataset for
//! one correlation level under a realistic parameter preset.
//!
//! | Level | Scenario |
//! |-------|----------|
//! | A | Three extended-release oral formulations, Wagner-Nelson deconvolution, pooled point-to-point fit, %PE validation |
//! | B | Moment comparison (MDT/MRT/VDT) plus a pathological pair with equal MDT but different MRT |
//! | C | Three PLGA depot formulations, cross-parameter matrix, f1/f2 similarity |
//!
//! All generators are pure functions of their configuration; the
//! [`ScenarioCache`] adapter memoizes them by the full parameter tuple.

mod cache;
mod config;
mod level_a;
mod level_b;
mod level_c;

pub use cache::ScenarioCache;
pub use config::{
    uniform_grid, DepotFormulation, LevelAConfig, LevelBConfig, LevelCConfig, OralPkSettings,
    PathologicalConfig,
};
pub use level_a::{generate_level_a, LevelAScenario, OralFormulationResult};
pub use level_b::{generate_level_b, LevelBScenario, MomentComparison, PathologicalPair};
pub use level_c::{generate_level_c, DepotFormulationResult, LevelCScenario};
