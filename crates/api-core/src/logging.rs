//! Tracing subscriber setup for the `churn-api` binary.
//!
//! Filter priority, highest first: `CHURN_API_LOG`, `RUST_LOG`, then the
//! configured `log_filter`. An unparseable directive string falls through to
//! the next source instead of aborting startup.

use anyhow::{Context, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CHURN_API_LOG";

const FALLBACK_FILTER: &str = "info";

pub fn init_tracing(configured: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_env_filter(configured))
        .with(fmt::layer().with_target(true))
        .try_init()
        .context("failed installing tracing subscriber")
}

fn build_env_filter(configured: &str) -> EnvFilter {
    if let Some(filter) = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}
