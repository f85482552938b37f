//! Closed-form plasma concentration models

use serde::{Deserialize, Serialize};

/// Threshold below which ka and ke are treated as equal (flip-flop kinetics)
const RATE_EQUALITY_TOLERANCE: f64 = 1e-10;

/// One-compartment model with first-order absorption and elimination
///
/// ```text
/// C(t) = (Dose·ka) / (Vd·(ka − ke)) · [e^(−ke·t) − e^(−ka·t)]
/// ```
///
/// When `|ka − ke|` is numerically negligible the two-exponential
/// difference cancels catastrophically; the limiting closed form
/// `(Dose/Vd)·ka·t·e^(−ke·t)` is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneCompartmentOral {
    /// Dose (mg)
    pub dose: f64,
    /// Absorption rate constant (h⁻¹)
    pub ka: f64,
    /// Elimination rate constant (h⁻¹)
    pub ke: f64,
    /// Volume of distribution (L)
    pub vd: f64,
}

impl OneCompartmentOral {
    /// Plasma concentration at a single time point
    pub fn concentration_at(&self, t: f64) -> f64 {
        if (self.ka - self.ke).abs() < RATE_EQUALITY_TOLERANCE {
            return (self.dose / self.vd) * self.ka * t * (-self.ke * t).exp();
        }

        let coeff = (self.dose * self.ka) / (self.vd * (self.ka - self.ke));
        coeff * ((-self.ke * t).exp() - (-self.ka * t).exp())
    }

    /// Plasma concentration sampled over a time grid
    pub fn concentrations(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.concentration_at(t)).collect()
    }
}

/// Bi-exponential depot model for long-acting injectables
///
/// ```text
/// C(t) = A1·e^(−α1·t)·(1 − e^(−ka·t)) + A2·e^(−α2·t)
/// ```
///
/// The first term captures an absorption-modulated early phase, the
/// second a slow terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiexponentialDepot {
    /// Coefficient of the absorption-elimination phase
    pub a1: f64,
    /// Disposition rate constant (h⁻¹)
    pub alpha1: f64,
    /// Absorption rate constant (h⁻¹)
    pub ka: f64,
    /// Coefficient of the sustained phase
    pub a2: f64,
    /// Terminal elimination rate constant (h⁻¹)
    pub alpha2: f64,
}

impl BiexponentialDepot {
    /// Plasma concentration at a single time point
    pub fn concentration_at(&self, t: f64) -> f64 {
        self.a1 * (-self.alpha1 * t).exp() * (1.0 - (-self.ka * t).exp())
            + self.a2 * (-self.alpha2 * t).exp()
    }

    /// Plasma concentration sampled over a time grid
    pub fn concentrations(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.concentration_at(t)).collect()
    }
}

/// Unit impulse response of a one-compartment IV bolus
///
/// `h(t) = (1/Vd)·e^(−ke·t)`
pub fn impulse_response(times: &[f64], ke: f64, vd: f64) -> Vec<f64> {
    times.iter().map(|&t| (1.0 / vd) * (-ke * t).exp()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_model() -> OneCompartmentOral {
        OneCompartmentOral {
            dose: 100.0,
            ka: 0.45,
            ke: 0.10,
            vd: 50.0,
        }
    }

    #[test]
    fn oral_model_golden_value_at_4h() {
        let c = reference_model().concentration_at(4.0);
        assert!((c - 1.30).abs() < 0.005, "C(4h) = {c}");
    }

    #[test]
    fn oral_model_starts_and_ends_at_zero() {
        let model = reference_model();
        assert_eq!(model.concentration_at(0.0), 0.0);
        assert!(model.concentration_at(500.0) < 1e-10);

        let times = vec![0.0, 1.0, 4.0, 12.0, 24.0];
        for &c in &model.concentrations(&times) {
            assert!(c >= 0.0);
        }
    }

    #[test]
    fn flip_flop_limit_avoids_cancellation() {
        let model = OneCompartmentOral {
            dose: 100.0,
            ka: 0.2,
            ke: 0.2,
            vd: 50.0,
        };
        // Limiting form: (D/Vd)·ka·t·e^(-ke·t)
        let expected = 2.0 * 0.2 * 3.0 * (-0.6_f64).exp();
        assert_relative_eq!(model.concentration_at(3.0), expected, epsilon = 1e-12);

        // A nearby ka should agree closely with the limit
        let near = OneCompartmentOral { ka: 0.2 + 5e-11, ..model };
        assert_relative_eq!(near.concentration_at(3.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn depot_model_matches_closed_form() {
        let model = BiexponentialDepot {
            a1: 0.90,
            alpha1: 0.004,
            ka: 1.2,
            a2: 0.08,
            alpha2: 0.0006,
        };
        let t: f64 = 24.0;
        let expected =
            0.90 * (-0.004 * t).exp() * (1.0 - (-1.2 * t).exp()) + 0.08 * (-0.0006 * t).exp();
        assert_relative_eq!(model.concentration_at(t), expected, epsilon = 1e-12);
        assert_eq!(model.concentration_at(0.0), 0.08);
    }

    #[test]
    fn impulse_response_decays_from_inverse_volume() {
        let h = impulse_response(&[0.0, 1.0, 10.0], 0.1, 50.0);
        assert_relative_eq!(h[0], 0.02, epsilon = 1e-12);
        assert_relative_eq!(h[1], 0.02 * (-0.1_f64).exp(), epsilon = 1e-12);
        assert!(h[2] < h[1]);
    }
}
