use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::paths::resolve_config_path;
use super::types::ServiceConfig;
use super::util::{clean_origins, non_empty};

impl ServiceConfig {
    /// Returns the path of the file that was applied, if any.
    pub(super) fn apply_file_config(&mut self) -> Result<Option<PathBuf>> {
        let Some(path) = resolve_config_path()? else {
            return Ok(None);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;

        self.apply_file_server(file_cfg.server);
        self.apply_file_artifacts(file_cfg.artifacts);
        self.apply_file_logging(file_cfg.logging);

        Ok(Some(path))
    }

    fn apply_file_server(&mut self, server: Option<FileServerConfig>) {
        let Some(server) = server else {
            return;
        };

        if let Some(v) = non_empty(server.bind_addr) {
            self.bind_addr = v.trim().to_string();
        }
        if let Some(v) = server.cors_allowed_origins {
            self.cors_allowed_origins = clean_origins(v);
        }
    }

    fn apply_file_artifacts(&mut self, artifacts: Option<FileArtifactsConfig>) {
        let Some(artifacts) = artifacts else {
            return;
        };

        if let Some(v) = non_empty(artifacts.dir) {
            self.artifacts_dir = PathBuf::from(v);
        }
        if let Some(v) = non_empty(artifacts.columns) {
            self.columns_file = PathBuf::from(v);
        }
        if let Some(v) = non_empty(artifacts.scaler) {
            self.scaler_file = PathBuf::from(v);
        }
        if let Some(v) = non_empty(artifacts.model) {
            self.model_file = PathBuf::from(v);
        }
        // Empty is meaningful here: the column list carries no label.
        if let Some(v) = artifacts.label_column {
            self.label_column = v.trim().to_string();
        }
    }

    fn apply_file_logging(&mut self, logging: Option<FileLoggingConfig>) {
        let Some(logging) = logging else {
            return;
        };

        if let Some(v) = non_empty(logging.filter) {
            self.log_filter = v;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    server: Option<FileServerConfig>,
    #[serde(default)]
    artifacts: Option<FileArtifactsConfig>,
    #[serde(default)]
    logging: Option<FileLoggingConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct FileServerConfig {
    #[serde(default)]
    bind_addr: Option<String>,
    #[serde(default)]
    cors_allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct FileArtifactsConfig {
    #[serde(default)]
    dir: Option<String>,
    #[serde(default)]
    columns: Option<String>,
    #[serde(default)]
    scaler: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    label_column: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FileLoggingConfig {
    #[serde(default)]
    filter: Option<String>,
}
