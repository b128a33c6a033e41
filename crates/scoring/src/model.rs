//! Scoring model abstraction.
//!
//! The pipeline only needs a class-probability function over fixed-width
//! rows. [`ProbabilityModel`] is that seam; [`LogisticModel`] is the
//! implementation for the binary logistic regression the training job
//! exports. The model is trained offline and shipped as JSON; this crate
//! performs inference only.

mod logistic;
mod math;

pub use logistic::LogisticModel;

use crate::error::ScoringError;

/// Black-box binary classifier.
///
/// Implementations must be immutable after construction: one instance is
/// shared by every request without locking.
pub trait ProbabilityModel: Send + Sync {
    fn model_id(&self) -> &str;

    fn model_version(&self) -> &str;

    /// Row width the model was fitted on.
    fn n_features(&self) -> usize;

    /// Training column names in row order, if the artifact recorded them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Structural check run once before the model is put into service.
    fn validate(&self) -> Result<(), ScoringError> {
        Ok(())
    }

    /// `[P(class 0), P(class 1)]` for each row of the batch.
    fn predict_proba(&self, rows: &[&[f64]]) -> Result<Vec<[f64; 2]>, ScoringError>;
}
