//! Regression-based correlation between in vitro and in vivo parameters
//!
//! Level A pools point-to-point dissolution/absorption pairs across
//! formulations into one ordinary least-squares fit; Level C fits one
//! scalar parameter pair per formulation. The full cross-parameter
//! [`CorrelationMatrix`] ranks which dissolution parameter best predicts
//! which PK parameter, and [`prediction_error`] implements the regulatory
//! %PE acceptance rule for internal validation.

mod levels;
mod matrix;
mod regression;
mod validation;

pub use levels::{level_a_correlation, level_c_correlation, CorrelationResult};
pub use matrix::{correlation_matrix, CorrelationMatrix, ParameterSet};
pub use regression::{linear_regression, RegressionFit};
pub use validation::{
    prediction_error, ValidationResult, INDIVIDUAL_PE_LIMIT, MEAN_PE_LIMIT,
};
