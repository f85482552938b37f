//! Sampled curves and scalar summaries
//!
//! [`TimeSeries`] is the value object shared by the dissolution and PK
//! libraries: an ordered sequence of (time, value) pairs with strictly
//! increasing, non-negative times. A dissolution profile stores cumulative
//! % released; a PK profile stores plasma concentration.
//!
//! The module also hosts the trapezoidal integrators used throughout the
//! crate and [`Moment`], a scalar summary that distinguishes a computed
//! zero from the documented divide-by-zero fallback.

use crate::error::IvivcError;
use serde::{Deserialize, Serialize};

/// An immutable sampled curve with strictly increasing, non-negative times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a new time series, validating the time grid
    ///
    /// # Errors
    ///
    /// Returns [`IvivcError::LengthMismatch`] if the arrays differ in length,
    /// [`IvivcError::NegativeTime`] if any time point is negative, and
    /// [`IvivcError::NonMonotonicTime`] if times are not strictly increasing.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, IvivcError> {
        if times.len() != values.len() {
            return Err(IvivcError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        for (i, &t) in times.iter().enumerate() {
            if t < 0.0 {
                return Err(IvivcError::NegativeTime { index: i, value: t });
            }
            if i > 0 && t <= times[i - 1] {
                return Err(IvivcError::NonMonotonicTime { index: i });
            }
        }
        Ok(Self { times, values })
    }

    /// Time points
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sampled values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series contains no samples
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over (time, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Linear interpolation at a given time, clamped to the end values
    ///
    /// Returns 0.0 for an empty series.
    pub fn interpolate(&self, target_time: f64) -> f64 {
        interpolate(&self.times, &self.values, target_time)
    }

    /// Sample the series at each of the given times via [`Self::interpolate`]
    pub fn sample_at(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.interpolate(t)).collect()
    }

    /// Value at the sample nearest in time to `target_time`
    ///
    /// Returns 0.0 for an empty series.
    pub fn nearest(&self, target_time: f64) -> f64 {
        let mut best = 0.0;
        let mut best_dist = f64::INFINITY;
        for (t, v) in self.iter() {
            let dist = (t - target_time).abs();
            if dist < best_dist {
                best_dist = dist;
                best = v;
            }
        }
        best
    }
}

/// A scalar summary with provenance
///
/// `degenerate` marks the documented zero fallback (no released mass, zero
/// area, zero denominator) as opposed to a legitimately computed value, so
/// callers and tests can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    /// The summary value
    pub value: f64,
    /// True if the value is a fallback rather than a computed result
    pub degenerate: bool,
}

impl Moment {
    /// A legitimately computed value
    pub fn computed(value: f64) -> Self {
        Self {
            value,
            degenerate: false,
        }
    }

    /// The zero fallback for a degenerate input
    pub fn fallback() -> Self {
        Self {
            value: 0.0,
            degenerate: true,
        }
    }
}

/// Trapezoidal-rule integral of sampled values
///
/// Segments with non-increasing time contribute 0.0.
pub fn trapezoid(times: &[f64], values: &[f64]) -> f64 {
    assert_eq!(
        times.len(),
        values.len(),
        "times and values must have the same length"
    );

    let mut area = 0.0;
    for i in 1..times.len() {
        let dt = times[i] - times[i - 1];
        if dt > 0.0 {
            area += (values[i - 1] + values[i]) / 2.0 * dt;
        }
    }
    area
}

/// Cumulative trapezoidal integral at each time point
///
/// The first value is always 0.0.
pub fn trapezoid_cumulative(times: &[f64], values: &[f64]) -> Vec<f64> {
    assert_eq!(
        times.len(),
        values.len(),
        "times and values must have the same length"
    );

    let mut cumulative = Vec::with_capacity(times.len());
    let mut area = 0.0;

    if !times.is_empty() {
        cumulative.push(0.0);
    }
    for i in 1..times.len() {
        let dt = times[i] - times[i - 1];
        if dt > 0.0 {
            area += (values[i - 1] + values[i]) / 2.0 * dt;
        }
        cumulative.push(area);
    }

    cumulative
}

/// Linear interpolation over sampled data, clamped to the end values
pub fn interpolate(times: &[f64], values: &[f64], target_time: f64) -> f64 {
    if times.is_empty() {
        return 0.0;
    }
    if target_time <= times[0] {
        return values[0];
    }
    if target_time >= times[times.len() - 1] {
        return values[times.len() - 1];
    }

    let upper_idx = times.iter().position(|&t| t >= target_time).unwrap_or(1);
    let lower_idx = upper_idx.saturating_sub(1);

    let t1 = times[lower_idx];
    let t2 = times[upper_idx];
    let v1 = values[lower_idx];
    let v2 = values[upper_idx];

    if (t2 - t1).abs() < 1e-10 {
        v1
    } else {
        v1 + (v2 - v1) * (target_time - t1) / (t2 - t1)
    }
}
