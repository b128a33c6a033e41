//! Fitted affine scaling of the numeric features.
//!
//! Both persisted scaler kinds reduce to `(x - offset) / scale` per column:
//!
//! ```text
//! standard: offset = mean,                          scale = std
//! min_max:  offset = min - lo * (max - min)/(hi - lo), scale = (max - min)/(hi - lo)
//! ```
//!
//! A zero `std` or zero `max - min` is replaced by 1.0, the same convention
//! the fitting library applies to constant features.

use std::path::Path;

use serde::Deserialize;

use crate::error::{parse_artifact, ScoringError};

/// Scaler artifact as written by the training job.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerParams {
    Standard {
        #[serde(default)]
        feature_names: Vec<String>,
        mean: Vec<f64>,
        scale: Vec<f64>,
    },
    MinMax {
        #[serde(default)]
        feature_names: Vec<String>,
        data_min: Vec<f64>,
        data_max: Vec<f64>,
        #[serde(default = "default_feature_range")]
        feature_range: (f64, f64),
    },
}

fn default_feature_range() -> (f64, f64) {
    (0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericScaler {
    feature_names: Vec<String>,
    offset: Vec<f64>,
    scale: Vec<f64>,
}

impl NumericScaler {
    pub fn standard(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ScoringError> {
        check_lengths("mean", mean.len(), "scale", scale.len())?;
        check_finite("mean", &mean)?;
        check_finite("scale", &scale)?;
        if let Some(i) = scale.iter().position(|s| *s < 0.0) {
            return Err(ScoringError::SchemaMismatch(format!(
                "scaler scale[{i}] is negative: {}",
                scale[i]
            )));
        }
        let scale = scale.into_iter().map(non_zero).collect();
        Ok(Self {
            feature_names: Vec::new(),
            offset: mean,
            scale,
        })
    }

    pub fn min_max(
        data_min: Vec<f64>,
        data_max: Vec<f64>,
        feature_range: (f64, f64),
    ) -> Result<Self, ScoringError> {
        check_lengths("data_min", data_min.len(), "data_max", data_max.len())?;
        check_finite("data_min", &data_min)?;
        check_finite("data_max", &data_max)?;
        let (lo, hi) = feature_range;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(ScoringError::SchemaMismatch(format!(
                "scaler feature_range ({lo}, {hi}) must be finite with min < max"
            )));
        }

        let span = hi - lo;
        let mut offset = Vec::with_capacity(data_min.len());
        let mut scale = Vec::with_capacity(data_min.len());
        for (i, (&min, &max)) in data_min.iter().zip(&data_max).enumerate() {
            if max < min {
                return Err(ScoringError::SchemaMismatch(format!(
                    "scaler data_max[{i}] = {max} is below data_min[{i}] = {min}"
                )));
            }
            let s = non_zero(max - min) / span;
            offset.push(min - lo * s);
            scale.push(s);
        }

        Ok(Self {
            feature_names: Vec::new(),
            offset,
            scale,
        })
    }

    pub fn from_params(params: ScalerParams) -> Result<Self, ScoringError> {
        let (feature_names, scaler) = match params {
            ScalerParams::Standard {
                feature_names,
                mean,
                scale,
            } => (feature_names, Self::standard(mean, scale)?),
            ScalerParams::MinMax {
                feature_names,
                data_min,
                data_max,
                feature_range,
            } => (
                feature_names,
                Self::min_max(data_min, data_max, feature_range)?,
            ),
        };
        scaler.with_feature_names(feature_names)
    }

    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let params: ScalerParams = serde_json::from_str(json)?;
        Self::from_params(params)
    }

    pub fn from_file(path: &Path) -> Result<Self, ScoringError> {
        Self::from_params(parse_artifact(path)?)
    }

    /// Attach the column names the scaler was fitted on. An empty list means
    /// the artifact did not record them.
    pub fn with_feature_names(mut self, names: Vec<String>) -> Result<Self, ScoringError> {
        if !names.is_empty() && names.len() != self.offset.len() {
            return Err(ScoringError::SchemaMismatch(format!(
                "scaler lists {} feature names for {} fitted columns",
                names.len(),
                self.offset.len()
            )));
        }
        self.feature_names = names;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_empty()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn offset(&self) -> &[f64] {
        &self.offset
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Scale one value of fitted column `column`.
    pub fn transform_value(&self, column: usize, x: f64) -> f64 {
        (x - self.offset[column]) / self.scale[column]
    }

    /// Scale a full row of fitted columns in place.
    pub fn transform(&self, values: &mut [f64]) -> Result<(), ScoringError> {
        if values.len() != self.len() {
            return Err(ScoringError::SchemaMismatch(format!(
                "scaler fitted on {} columns, asked to transform {}",
                self.len(),
                values.len()
            )));
        }
        for (column, value) in values.iter_mut().enumerate() {
            *value = self.transform_value(column, *value);
        }
        Ok(())
    }
}

fn non_zero(s: f64) -> f64 {
    if s == 0.0 {
        1.0
    } else {
        s
    }
}

fn check_lengths(
    a_name: &str,
    a_len: usize,
    b_name: &str,
    b_len: usize,
) -> Result<(), ScoringError> {
    if a_len != b_len {
        return Err(ScoringError::SchemaMismatch(format!(
            "scaler {a_name} has {a_len} entries but {b_name} has {b_len}"
        )));
    }
    Ok(())
}

fn check_finite(name: &str, values: &[f64]) -> Result<(), ScoringError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(ScoringError::SchemaMismatch(format!(
            "scaler {name}[{i}] is not finite: {}",
            values[i]
        ))),
        None => Ok(()),
    }
}
