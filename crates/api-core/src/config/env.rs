use std::path::PathBuf;

use super::types::ServiceConfig;
use super::util::{env_non_empty, split_csv};

impl ServiceConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        self.apply_env_server();
        self.apply_env_artifacts();
        self.apply_env_logging();
    }

    fn apply_env_server(&mut self) {
        if let Some(v) = env_non_empty("CHURN_API_BIND") {
            self.bind_addr = v.trim().to_string();
        }
        // Set-but-empty clears the list, which allows any origin.
        if let Ok(v) = std::env::var("CHURN_API_CORS_ORIGINS") {
            self.cors_allowed_origins = split_csv(&v);
        }
    }

    fn apply_env_artifacts(&mut self) {
        if let Some(v) = env_non_empty("CHURN_ARTIFACTS_DIR") {
            self.artifacts_dir = PathBuf::from(v.trim());
        }
        if let Some(v) = env_non_empty("CHURN_COLUMNS_PATH") {
            self.columns_file = PathBuf::from(v.trim());
        }
        if let Some(v) = env_non_empty("CHURN_SCALER_PATH") {
            self.scaler_file = PathBuf::from(v.trim());
        }
        if let Some(v) = env_non_empty("CHURN_MODEL_PATH") {
            self.model_file = PathBuf::from(v.trim());
        }
        if let Ok(v) = std::env::var("CHURN_LABEL_COLUMN") {
            self.label_column = v.trim().to_string();
        }
    }

    fn apply_env_logging(&mut self) {
        if let Some(v) = env_non_empty("CHURN_API_LOG_FILTER") {
            self.log_filter = v;
        }
    }
}
