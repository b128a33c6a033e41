pub(super) const CONFIG_ENV_VAR: &str = "CHURN_API_CONFIG";

pub(super) const CONFIG_CANDIDATES: [&str; 3] = [
    "./conf/churn-api.toml",
    "./churn-api.toml",
    "/etc/churn-api/churn-api.toml",
];

pub(super) const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub(super) const DEFAULT_ARTIFACTS_DIR: &str = "models";
pub(super) const DEFAULT_COLUMNS_FILE: &str = "columns.json";
pub(super) const DEFAULT_SCALER_FILE: &str = "scaler.json";
pub(super) const DEFAULT_MODEL_FILE: &str = "model.json";
pub(super) const DEFAULT_LOG_FILTER: &str = "info";
