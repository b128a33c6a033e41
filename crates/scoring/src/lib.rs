//! Customer churn scoring pipeline.
//!
//! A raw [`CustomerRecord`] is projected onto the training-time column layout
//! ([`EncodingSchema`]): categorical fields are one-hot expanded, the row is
//! reindexed against the persisted column list and the four numeric columns
//! are scaled with the fitted [`NumericScaler`]. The resulting row is scored
//! by a [`ProbabilityModel`] and the positive-class probability returned.
//!
//! ```text
//! CustomerRecord ─→ encode(record, schema) ─→ EncodedVector ─→ predict(vector, model) ─→ ChurnProbability
//! ```
//!
//! Schema, scaler and model are loaded once and never mutated; every
//! per-request value is owned by the request.

mod encoder;
mod error;
mod fields;
mod inference;
pub mod model;
mod predictor;
mod record;
mod scaler;
mod schema;

pub use encoder::{encode, AbsorbedValue, EncodedVector};
pub use error::ScoringError;
pub use fields::{
    CategoricalField, NumericField, CATEGORICAL_FIELDS, LABEL_COLUMN, NUMERIC_COLUMN_NAMES,
    NUMERIC_FIELDS, NUMERIC_FIELD_COUNT,
};
pub use inference::{predict, ChurnProbability, POSITIVE_CLASS_INDEX};
pub use model::{LogisticModel, ProbabilityModel};
pub use predictor::{ArtifactPaths, ChurnPredictor};
pub use record::CustomerRecord;
pub use scaler::{NumericScaler, ScalerParams};
pub use schema::EncodingSchema;

#[cfg(test)]
mod test_support;
