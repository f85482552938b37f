//! Cross-parameter correlation matrix

use super::levels::level_c_correlation;
use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping of parameter name to per-formulation values
///
/// Insertion order is the display order expected by the presentation
/// layer, so a hash map is deliberately not used here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    names: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ParameterSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named parameter with one value per formulation
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.names.push(name.into());
        self.values.push(values);
    }

    /// Parameter names in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Values for a parameter by name
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i].as_slice())
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set contains no parameters
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over (name, values) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }
}

/// Level C fits for every (in vitro × in vivo) parameter pair
///
/// Matrices are indexed `[in_vitro][in_vivo]`, with rows and columns in
/// the insertion order of the two parameter sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Row labels (in vitro parameters)
    pub in_vitro_names: Vec<String>,
    /// Column labels (in vivo parameters)
    pub in_vivo_names: Vec<String>,
    /// R² per pair
    pub r_squared: Vec<Vec<f64>>,
    /// Slope per pair
    pub slope: Vec<Vec<f64>>,
    /// Two-sided p-value per pair
    pub p_value: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// The in vitro parameter with the highest R² against the given in
    /// vivo parameter, with that R²
    pub fn best_in_vitro_for(&self, in_vivo_name: &str) -> Option<(&str, f64)> {
        let col = self.in_vivo_names.iter().position(|n| n == in_vivo_name)?;
        self.r_squared
            .iter()
            .enumerate()
            .map(|(row, r2)| (self.in_vitro_names[row].as_str(), r2[col]))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Build the full cross-parameter correlation matrix
///
/// Each cell is an independent [`level_c_correlation`] of one in vitro
/// parameter's per-formulation values against one in vivo parameter's.
pub fn correlation_matrix(
    in_vitro: &ParameterSet,
    in_vivo: &ParameterSet,
) -> CorrelationMatrix {
    let mut r_squared = Vec::with_capacity(in_vitro.len());
    let mut slope = Vec::with_capacity(in_vitro.len());
    let mut p_value = Vec::with_capacity(in_vitro.len());

    for (_, iv_values) in in_vitro.iter() {
        let mut r2_row = Vec::with_capacity(in_vivo.len());
        let mut slope_row = Vec::with_capacity(in_vivo.len());
        let mut p_row = Vec::with_capacity(in_vivo.len());

        for (_, vivo_values) in in_vivo.iter() {
            let corr = level_c_correlation(iv_values, vivo_values);
            r2_row.push(corr.fit.r_squared);
            slope_row.push(corr.fit.slope);
            p_row.push(corr.fit.p_value);
        }

        r_squared.push(r2_row);
        slope.push(slope_row);
        p_value.push(p_row);
    }

    CorrelationMatrix {
        in_vitro_names: in_vitro.names().to_vec(),
        in_vivo_names: in_vivo.names().to_vec(),
        r_squared,
        slope,
        p_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> (ParameterSet, ParameterSet) {
        let mut iv = ParameterSet::new();
        iv.insert("MDT", vec![2.0, 4.0, 8.0]);
        iv.insert("DE", vec![80.0, 60.0, 40.0]);

        let mut vivo = ParameterSet::new();
        vivo.insert("MRT", vec![12.0, 14.0, 18.0]);
        vivo.insert("AUC", vec![20.0, 19.0, 21.0]);
        (iv, vivo)
    }

    #[test]
    fn parameter_set_preserves_insertion_order() {
        let (iv, _) = sets();
        assert_eq!(iv.names(), &["MDT".to_string(), "DE".to_string()]);
        assert_eq!(iv.get("DE"), Some(&[80.0, 60.0, 40.0][..]));
        assert_eq!(iv.get("missing"), None);
    }

    #[test]
    fn matrix_has_one_cell_per_pair() {
        let (iv, vivo) = sets();
        let matrix = correlation_matrix(&iv, &vivo);

        assert_eq!(matrix.r_squared.len(), 2);
        assert_eq!(matrix.r_squared[0].len(), 2);
        for row in &matrix.r_squared {
            for &r2 in row {
                assert!((0.0..=1.0).contains(&r2));
            }
        }
        // MDT vs MRT is monotone increasing: positive slope
        assert!(matrix.slope[0][0] > 0.0);
        // DE vs MRT is monotone decreasing: negative slope
        assert!(matrix.slope[1][0] < 0.0);
    }

    #[test]
    fn best_predictor_ranks_by_r_squared() {
        let (iv, vivo) = sets();
        let matrix = correlation_matrix(&iv, &vivo);

        let (name, r2) = matrix.best_in_vitro_for("MRT").unwrap();
        let other = matrix.r_squared[if name == "MDT" { 1 } else { 0 }][0];
        assert!(r2 >= other);
        assert!(matrix.best_in_vitro_for("missing").is_none());
    }
}
