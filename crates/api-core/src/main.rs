mod artifacts;
mod config;
mod http;
mod logging;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use config::ServiceConfig;
use http::ApiState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;
    logging::init_tracing(&config.log_filter)?;

    info!(
        config_file = ?config.config_file,
        artifacts_dir = %config.artifacts_dir.display(),
        label_column = %config.label_column,
        cors_origins = config.cors_allowed_origins.len(),
        "churn-api starting"
    );

    let predictor = Arc::new(artifacts::load_predictor(&config)?);
    let app = http::router(ApiState { predictor }, &config.cors_allowed_origins);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed binding {addr}"))?;
    info!(addr = %addr, "churn-api listening");

    http::serve(listener, app, shutdown_signal()).await?;

    info!("churn-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "failed installing shutdown signal handler");
            std::future::pending::<()>().await;
        }
    }
}
