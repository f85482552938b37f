//! In vitro dissolution models and profile summaries
//!
//! Closed-form cumulative release curves, their statistical moments, and
//! the regulatory f1/f2 profile comparison factors.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`first_order`] | First-order release, `Fmax·(1 − e^(−k·t))` |
//! | [`weibull`] | Weibull release with optional burst term |
//! | [`higuchi`] | Square-root-of-time matrix diffusion release |
//! | [`mean_dissolution_time`] | First moment of the release-rate distribution |
//! | [`dissolution_efficiency`] | Area ratio vs the bounding rectangle |
//! | [`variance_of_dissolution_time`] | Second central moment of release time |
//! | [`similarity_factors`] | f1 difference / f2 similarity factors |

mod models;
mod moments;
mod similarity;

pub use models::{first_order, higuchi, weibull, WeibullParams};
pub use moments::{dissolution_efficiency, mean_dissolution_time, variance_of_dissolution_time};
pub use similarity::{
    similarity_factors, SimilarityResult, F1_SIMILARITY_LIMIT, F2_SIMILARITY_LIMIT,
};
