use serde::Serialize;

use crate::encoder::EncodedVector;
use crate::error::ScoringError;
use crate::model::ProbabilityModel;

/// Column of the class-probability output holding the "did cancel" class.
pub const POSITIVE_CLASS_INDEX: usize = 1;

/// Probability of churn, guaranteed to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ChurnProbability(f64);

impl ChurnProbability {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Score one encoded row and return the positive-class probability.
///
/// Every failure here is [`ScoringError::ModelInvocation`]: the row was
/// built from the validated schema, so a width mismatch or a malformed model
/// output means the deployment is broken, not the request.
pub fn predict<M>(vector: &EncodedVector, model: &M) -> Result<ChurnProbability, ScoringError>
where
    M: ProbabilityModel + ?Sized,
{
    if vector.len() != model.n_features() {
        return Err(ScoringError::ModelInvocation(format!(
            "encoded row has {} features, model `{}` expects {}",
            vector.len(),
            model.model_id(),
            model.n_features()
        )));
    }

    let batch = [vector.values()];
    let output = model.predict_proba(&batch)?;
    let [row] = output.as_slice() else {
        return Err(ScoringError::ModelInvocation(format!(
            "model returned {} rows for a single-row batch",
            output.len()
        )));
    };

    let p = row[POSITIVE_CLASS_INDEX];
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(ScoringError::ModelInvocation(format!(
            "positive-class probability {p} outside [0, 1]"
        )));
    }
    Ok(ChurnProbability(p))
}
