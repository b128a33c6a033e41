use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use scoring::ArtifactPaths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: String,
    /// Origins allowed to call the API from a browser. Empty allows any.
    pub cors_allowed_origins: Vec<String>,
    pub artifacts_dir: PathBuf,
    pub columns_file: PathBuf,
    pub scaler_file: PathBuf,
    pub model_file: PathBuf,
    /// Target column stripped from the persisted column list; empty keeps all.
    pub label_column: String,
    pub log_filter: String,
    /// File the settings were read from, if any.
    pub config_file: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .trim()
            .parse()
            .with_context(|| format!("invalid bind address `{}`", self.bind_addr))
    }

    /// Reject settings the server could only apply by silently dropping
    /// them: an unparseable bind address or CORS origin.
    pub(super) fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        for origin in &self.cors_allowed_origins {
            if origin.trim() != "*" {
                HeaderValue::from_str(origin.trim())
                    .with_context(|| format!("invalid CORS origin `{}`", origin.escape_debug()))?;
            }
        }
        Ok(())
    }

    /// Artifact locations with relative file names resolved against
    /// `artifacts_dir`.
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            columns: self.resolve_artifact(&self.columns_file),
            scaler: self.resolve_artifact(&self.scaler_file),
            model: self.resolve_artifact(&self.model_file),
        }
    }

    fn resolve_artifact(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.artifacts_dir.join(file)
        }
    }
}
