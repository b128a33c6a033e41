use std::path::Path;

use serde::{Deserialize, Serialize};

use super::math::{dot, sigmoid};
use super::ProbabilityModel;
use crate::error::{parse_artifact, ScoringError};

/// Binary logistic regression exported by the training job.
///
/// `P(churn) = σ(coefficients · x + intercept)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Human-readable model identifier.
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub model_version: String,
    /// Class labels in probability-column order; must be `[0, 1]`.
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
    /// Training column names (optional; must match `coefficients` in length).
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

impl LogisticModel {
    /// Validate that the model is structurally sound.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.coefficients.is_empty() {
            return Err(ScoringError::SchemaMismatch(
                "model has no coefficients".to_string(),
            ));
        }
        if self.classes != [0i64, 1] {
            return Err(ScoringError::SchemaMismatch(format!(
                "model classes {:?} are not the binary labels [0, 1]",
                self.classes
            )));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.coefficients.len() {
            return Err(ScoringError::SchemaMismatch(format!(
                "model lists {} feature names for {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        if let Some(i) = self.coefficients.iter().position(|w| !w.is_finite()) {
            return Err(ScoringError::SchemaMismatch(format!(
                "non-finite coefficient at index {i}: {}",
                self.coefficients[i]
            )));
        }
        if !self.intercept.is_finite() {
            return Err(ScoringError::SchemaMismatch(format!(
                "non-finite intercept: {}",
                self.intercept
            )));
        }
        Ok(())
    }

    /// Load model from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Load model from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, ScoringError> {
        let model: Self = parse_artifact(path)?;
        model.validate()?;
        Ok(model)
    }

    fn positive_probability(&self, row: &[f64]) -> f64 {
        sigmoid(dot(&self.coefficients, row) + self.intercept)
    }
}

impl ProbabilityModel for LogisticModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn model_version(&self) -> &str {
        &self.model_version
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn validate(&self) -> Result<(), ScoringError> {
        LogisticModel::validate(self)
    }

    fn feature_names(&self) -> Option<&[String]> {
        if self.feature_names.is_empty() {
            None
        } else {
            Some(self.feature_names.as_slice())
        }
    }

    fn predict_proba(&self, rows: &[&[f64]]) -> Result<Vec<[f64; 2]>, ScoringError> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != self.coefficients.len() {
                    return Err(ScoringError::ModelInvocation(format!(
                        "row {i} has {} features, model expects {}",
                        row.len(),
                        self.coefficients.len()
                    )));
                }
                let p1 = self.positive_probability(row);
                Ok([1.0 - p1, p1])
            })
            .collect()
    }
}
