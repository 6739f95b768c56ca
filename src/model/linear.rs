// src/model/linear.rs
use crate::model::{ModelError, PriceModel};
use serde::Deserialize;
use std::fs;

/// Linear regression exported as JSON:
///
/// ```json
/// { "intercept": 50000.0, "coefficients": [..5 values..], "feature_names": [..] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
    #[serde(default)]
    feature_names: Vec<String>,
}

impl LinearModel {
    pub fn load(path: &str) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|e| ModelError::Io(format!("{path}: {e}")))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let model: LinearModel =
            serde_json::from_str(raw).map_err(|e| ModelError::Artifact(e.to_string()))?;

        if model.coefficients.is_empty() {
            return Err(ModelError::Artifact("no coefficients".into()));
        }
        if !model.feature_names.is_empty() && model.feature_names.len() != model.coefficients.len()
        {
            return Err(ModelError::Artifact(format!(
                "{} feature names for {} coefficients",
                model.feature_names.len(),
                model.coefficients.len()
            )));
        }

        Ok(model)
    }

    pub fn feature_count(&self) -> usize {
        self.coefficients.len()
    }
}

impl PriceModel for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        let price = self.intercept
            + features
                .iter()
                .zip(&self.coefficients)
                .map(|(x, w)| x * w)
                .sum::<f64>();

        if !price.is_finite() {
            return Err(ModelError::NonFinite);
        }

        Ok(vec![price])
    }
}
