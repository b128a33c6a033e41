use std::path::PathBuf;

use tracing::info;

use crate::encoder::{encode, EncodedVector};
use crate::error::ScoringError;
use crate::inference::{predict, ChurnProbability};
use crate::model::{LogisticModel, ProbabilityModel};
use crate::record::CustomerRecord;
use crate::schema::EncodingSchema;

/// Locations of the three artifacts produced by training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub columns: PathBuf,
    pub scaler: PathBuf,
    pub model: PathBuf,
}

/// Encoder and model bound together after cross-checking that they agree.
///
/// Construction is the startup gate: any disagreement between the column
/// list, the scaler and the model is reported here as
/// [`ScoringError::SchemaMismatch`], so a built predictor can only fail per
/// request on bad input or a scoring fault.
pub struct ChurnPredictor {
    schema: EncodingSchema,
    model: Box<dyn ProbabilityModel>,
}

impl std::fmt::Debug for ChurnPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChurnPredictor")
            .field("columns", &self.schema.len())
            .field("model_id", &self.model.model_id())
            .field("model_version", &self.model.model_version())
            .finish()
    }
}

impl ChurnPredictor {
    pub fn new<M>(schema: EncodingSchema, model: M) -> Result<Self, ScoringError>
    where
        M: ProbabilityModel + 'static,
    {
        model.validate()?;
        if model.n_features() != schema.len() {
            return Err(ScoringError::SchemaMismatch(format!(
                "model `{}` expects {} features, column list has {}",
                model.model_id(),
                model.n_features(),
                schema.len()
            )));
        }
        if let Some(names) = model.feature_names() {
            if let Some(i) = names
                .iter()
                .zip(schema.columns())
                .position(|(model_name, column)| model_name != column)
            {
                return Err(ScoringError::SchemaMismatch(format!(
                    "model feature {i} is `{}` but column list has `{}`",
                    names[i],
                    schema.columns()[i]
                )));
            }
        }

        Ok(Self {
            schema,
            model: Box::new(model),
        })
    }

    /// Load columns, scaler and logistic model from disk and cross-check them.
    pub fn from_artifacts(paths: &ArtifactPaths, label_column: &str) -> Result<Self, ScoringError> {
        let schema = EncodingSchema::load(&paths.columns, &paths.scaler, label_column)?;
        let model = LogisticModel::from_file(&paths.model)?;
        let predictor = Self::new(schema, model)?;
        info!(
            columns = %paths.columns.display(),
            scaler = %paths.scaler.display(),
            model = %paths.model.display(),
            model_id = predictor.model.model_id(),
            model_version = predictor.model.model_version(),
            feature_count = predictor.schema.len(),
            "churn model artifacts loaded"
        );
        Ok(predictor)
    }

    pub fn schema(&self) -> &EncodingSchema {
        &self.schema
    }

    pub fn model(&self) -> &dyn ProbabilityModel {
        self.model.as_ref()
    }

    pub fn encode(&self, record: &CustomerRecord) -> Result<EncodedVector, ScoringError> {
        encode(record, &self.schema)
    }

    pub fn predict_encoded(&self, vector: &EncodedVector) -> Result<ChurnProbability, ScoringError> {
        predict(vector, self.model.as_ref())
    }

    /// Encode and score one record.
    pub fn predict(&self, record: &CustomerRecord) -> Result<ChurnProbability, ScoringError> {
        let vector = self.encode(record)?;
        self.predict_encoded(&vector)
    }
}
