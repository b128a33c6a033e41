use anyhow::{Context, Result};
use scoring::ChurnPredictor;

use crate::config::ServiceConfig;

/// Load and cross-check the training artifacts named by `config`.
///
/// Any failure here is fatal: the service never starts with a column list,
/// scaler and model that disagree.
pub fn load_predictor(config: &ServiceConfig) -> Result<ChurnPredictor> {
    let paths = config.artifact_paths();
    ChurnPredictor::from_artifacts(&paths, &config.label_column).with_context(|| {
        format!(
            "failed loading churn model artifacts from {}",
            config.artifacts_dir.display()
        )
    })
}
