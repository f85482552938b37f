//! Crate error types
//!
//! Only contract violations surface as errors. Numerical degeneracies
//! (zero denominators, insufficient regression points, singular rate
//! constants) are handled by documented fallback values carried with a
//! `degenerate` flag on the result instead.

use thiserror::Error;

/// Errors raised on malformed input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IvivcError {
    /// Time and value arrays differ in length
    #[error("times and values must have the same length (got {times} and {values})")]
    LengthMismatch { times: usize, values: usize },

    /// Time points are not strictly increasing
    #[error("time points must be strictly increasing (violation at index {index})")]
    NonMonotonicTime { index: usize },

    /// A time point is negative
    #[error("time points must be non-negative (got {value} at index {index})")]
    NegativeTime { index: usize, value: f64 },

    /// Reference and test dissolution profiles differ in length
    #[error("profiles must be sampled at the same timepoints (reference has {reference} samples, test has {test})")]
    ProfileMismatch { reference: usize, test: usize },

    /// A profile is empty where at least one sample is required
    #[error("profile must contain at least one sample")]
    EmptyProfile,
}
