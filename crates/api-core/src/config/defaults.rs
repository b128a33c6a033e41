use std::path::PathBuf;

use scoring::LABEL_COLUMN;

use super::constants::{
    DEFAULT_ARTIFACTS_DIR, DEFAULT_BIND_ADDR, DEFAULT_COLUMNS_FILE, DEFAULT_LOG_FILTER,
    DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE,
};
use super::types::ServiceConfig;

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cors_allowed_origins: Vec::new(),
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            columns_file: PathBuf::from(DEFAULT_COLUMNS_FILE),
            scaler_file: PathBuf::from(DEFAULT_SCALER_FILE),
            model_file: PathBuf::from(DEFAULT_MODEL_FILE),
            label_column: LABEL_COLUMN.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            config_file: None,
        }
    }
}
