use anyhow::Result;

use super::types::ServiceConfig;

impl ServiceConfig {
    /// Defaults, then the TOML file if one is found, then `CHURN_*` env vars.
    ///
    /// Runs before the tracing subscriber is installed, since the log filter
    /// is itself configurable; failures surface through the returned error.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.config_file = cfg.apply_file_config()?;
        cfg.apply_env_overrides();
        cfg.validate()?;
        Ok(cfg)
    }
}
