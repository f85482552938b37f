//! In vivo pharmacokinetic models and exposure summaries
//!
//! Closed-form plasma concentration curves, convolution of a release-rate
//! signal with a pharmacokinetic impulse response, and moment-based
//! exposure parameters (AUC, AUMC, MRT, Cmax, Tmax).

mod convolve;
mod models;
mod moments;

pub use convolve::convolve;
pub use models::{impulse_response, BiexponentialDepot, OneCompartmentOral};
pub use moments::{auc, aumc, cmax, mean_residence_time, tmax, ExposureSummary};
