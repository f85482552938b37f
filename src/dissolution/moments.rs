//! Statistical moments of a dissolution profile

use crate::profile::{trapezoid, Moment};

/// Mean Dissolution Time (MDT)
///
/// Discretized first moment of the release-rate distribution:
///
/// ```text
/// MDT = Σ(t_mid,i · ΔF_i) / Σ ΔF_i
/// ```
///
/// over consecutive sample intervals, where `t_mid` is the interval
/// midpoint. Returns the fallback for a flat or empty profile (total
/// released mass of 0).
pub fn mean_dissolution_time(times: &[f64], release: &[f64]) -> Moment {
    assert_eq!(
        times.len(),
        release.len(),
        "times and release must have the same length"
    );

    let mut weighted = 0.0;
    let mut total = 0.0;
    for i in 1..times.len() {
        let delta_f = release[i] - release[i - 1];
        let t_mid = (times[i - 1] + times[i]) / 2.0;
        weighted += t_mid * delta_f;
        total += delta_f;
    }

    if total == 0.0 {
        return Moment::fallback();
    }
    Moment::computed(weighted / total)
}

/// Dissolution Efficiency (DE)
///
/// Ratio of the area under the release curve to the area of the bounding
/// rectangle (`release_end × (t_end − t_start)`), expressed as a
/// percentage. Returns the fallback when the rectangle area is 0.
pub fn dissolution_efficiency(times: &[f64], release: &[f64]) -> Moment {
    assert_eq!(
        times.len(),
        release.len(),
        "times and release must have the same length"
    );

    if times.is_empty() {
        return Moment::fallback();
    }

    let area = trapezoid(times, release);
    let rectangle = release[release.len() - 1] * (times[times.len() - 1] - times[0]);

    if rectangle == 0.0 {
        return Moment::fallback();
    }
    Moment::computed(area / rectangle * 100.0)
}

/// Variance of Dissolution Time (VDT)
///
/// Second central moment of the release-time distribution around the MDT:
///
/// ```text
/// VDT = Σ((t_mid,i − MDT)² · ΔF_i) / Σ ΔF_i
/// ```
///
/// Returns the fallback when the total released mass is 0.
pub fn variance_of_dissolution_time(times: &[f64], release: &[f64]) -> Moment {
    let mdt = mean_dissolution_time(times, release);
    if mdt.degenerate {
        return Moment::fallback();
    }

    let mut weighted = 0.0;
    let mut total = 0.0;
    for i in 1..times.len() {
        let delta_f = release[i] - release[i - 1];
        let t_mid = (times[i - 1] + times[i]) / 2.0;
        weighted += (t_mid - mdt.value).powi(2) * delta_f;
        total += delta_f;
    }

    Moment::computed(weighted / total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dissolution::first_order;

    #[test]
    fn mdt_of_fine_first_order_profile_approaches_reciprocal_rate() {
        let k = 0.3;
        let times: Vec<f64> = (0..=2400).map(|i| i as f64 * 0.01).collect();
        let release = first_order(&times, k, 100.0);

        let mdt = mean_dissolution_time(&times, &release);
        assert!(!mdt.degenerate);
        // Truncation at 24 h leaves < 0.1% undissolved, pulling the mean
        // slightly below 1/k.
        assert!((mdt.value - 1.0 / k).abs() < 0.05, "MDT = {}", mdt.value);
    }

    #[test]
    fn mdt_of_flat_profile_is_degenerate() {
        let times = vec![0.0, 1.0, 2.0];
        let release = vec![0.0, 0.0, 0.0];

        let mdt = mean_dissolution_time(&times, &release);
        assert!(mdt.degenerate);
        assert_eq!(mdt.value, 0.0);
    }

    #[test]
    fn de_of_instant_release_approaches_100() {
        // Released fully at the first sampled instant after zero
        let times = vec![0.0, 0.001, 24.0];
        let release = vec![0.0, 100.0, 100.0];

        let de = dissolution_efficiency(&times, &release);
        assert!(!de.degenerate);
        assert!(de.value > 99.9);
    }

    #[test]
    fn de_of_zero_profile_is_degenerate() {
        let de = dissolution_efficiency(&[0.0, 1.0], &[0.0, 0.0]);
        assert!(de.degenerate);
    }

    #[test]
    fn vdt_is_zero_for_single_step_release() {
        // All mass releases in one interval: no spread around the midpoint
        let times = vec![0.0, 2.0, 4.0];
        let release = vec![0.0, 100.0, 100.0];

        let vdt = variance_of_dissolution_time(&times, &release);
        assert!(!vdt.degenerate);
        assert!(vdt.value.abs() < 1e-10);
    }
}
