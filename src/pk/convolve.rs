//! Discrete convolution of a release-rate signal with an impulse response

/// Predicted concentration curve from a release rate and an impulse response
///
/// Computes the discrete convolution
///
/// ```text
/// C(tᵢ) = Σⱼ r(tⱼ)·h(tᵢ₋ⱼ)·Δt,   j = 0..=i
/// ```
///
/// truncated to the length of `release_rate`. Both signals must be sampled
/// on a common, evenly spaced grid with step `dt`; the result is only
/// meaningful under that assumption.
pub fn convolve(release_rate: &[f64], impulse: &[f64], dt: f64) -> Vec<f64> {
    let n = release_rate.len();
    let mut conc = vec![0.0; n];

    for (i, c) in conc.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (j, &r) in release_rate.iter().take(i + 1).enumerate() {
            if i - j < impulse.len() {
                acc += r * impulse[i - j];
            }
        }
        *c = acc * dt;
    }

    conc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn convolution_with_unit_impulse_scales_by_dt() {
        let rate = vec![1.0, 2.0, 3.0, 4.0];
        let mut impulse = vec![0.0; 4];
        impulse[0] = 1.0;

        let conc = convolve(&rate, &impulse, 0.5);
        for (c, r) in conc.iter().zip(rate.iter()) {
            assert_relative_eq!(*c, r * 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn convolution_accumulates_history() {
        // Constant rate into a constant (non-eliminating) response:
        // C grows linearly with the number of contributing samples.
        let rate = vec![1.0; 5];
        let impulse = vec![1.0; 5];

        let conc = convolve(&rate, &impulse, 1.0);
        let expected = [1.0, 2.0, 3.0, 4.0, 5.0];
        for (c, e) in conc.iter().zip(expected.iter()) {
            assert_relative_eq!(*c, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn convolution_approximates_oral_model() {
        use crate::pk::{impulse_response, OneCompartmentOral};

        // Release rate of a first-order absorption of the full dose:
        // r(t) = Dose·ka·e^(-ka·t); convolved with the IV bolus response it
        // reconstructs the oral model up to discretization error.
        let model = OneCompartmentOral {
            dose: 100.0,
            ka: 0.45,
            ke: 0.10,
            vd: 50.0,
        };
        let dt = 0.01;
        let times: Vec<f64> = (0..4800).map(|i| i as f64 * dt).collect();
        let rate: Vec<f64> = times
            .iter()
            .map(|&t| model.dose * model.ka * (-model.ka * t).exp())
            .collect();
        let impulse = impulse_response(&times, model.ke, model.vd);

        let predicted = convolve(&rate, &impulse, dt);
        let idx = 400; // t = 4 h
        let analytic = model.concentration_at(times[idx]);
        assert!(
            (predicted[idx] - analytic).abs() < 0.02,
            "predicted {} vs analytic {}",
            predicted[idx],
            analytic
        );
    }
}
