use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the encode → score pipeline and of artifact loading.
///
/// `InvalidInput` is the only per-request client error. `SchemaMismatch` and
/// the artifact variants mean the deployed artifacts are unusable and should
/// stop startup. `ModelInvocation` is a server-side scoring failure.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("failed reading artifact {}: {source}", .path.display())]
    ArtifactIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed parsing artifact {}: {source}", .path.display())]
    ArtifactParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("artifact JSON parse error: {0}")]
    ParseJson(#[from] serde_json::Error),
}

impl ScoringError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable name, used in HTTP error bodies and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::SchemaMismatch(_) => "schema_mismatch",
            Self::ModelInvocation(_) => "model_invocation",
            Self::ArtifactIo { .. } | Self::ArtifactParse { .. } | Self::ParseJson(_) => {
                "artifact"
            }
        }
    }

    /// True when the caller sent a bad record; everything else is a
    /// deployment or scoring fault on our side.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub(crate) fn read_artifact(path: &std::path::Path) -> Result<String, ScoringError> {
    std::fs::read_to_string(path).map_err(|source| ScoringError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_artifact<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<T, ScoringError> {
    let raw = read_artifact(path)?;
    serde_json::from_str(&raw).map_err(|source| ScoringError::ArtifactParse {
        path: path.to_path_buf(),
        source,
    })
}
