use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use scoring::{ChurnPredictor, ChurnProbability, CustomerRecord, ScoringError};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct ApiState {
    pub predictor: Arc<ChurnPredictor>,
}

#[derive(Debug, Serialize)]
struct PredictResponse {
    churn_probability: ChurnProbability,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    model_id: String,
    model_version: String,
    feature_count: usize,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

/// Failed request. Never carries a probability.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    fn from_rejection(rejection: JsonRejection) -> Self {
        debug!(error = %rejection.body_text(), "rejected predict body");
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            kind: "invalid_input",
            message: rejection.body_text(),
        }
    }
}

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        let status = if err.is_client_error() {
            debug!(error = %err, "rejected customer record");
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            error!(error = %err, kind = err.kind(), "churn scoring failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.kind,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn router(state: ApiState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain
/// in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("http server terminated with an error")
}

async fn predict(
    State(state): State<ApiState>,
    payload: Result<Json<CustomerRecord>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(record) = payload.map_err(ApiError::from_rejection)?;

    let vector = state.predictor.encode(&record)?;
    for absorbed in vector.absorbed() {
        warn!(
            field = absorbed.field.as_str(),
            value = %absorbed.value,
            "unseen categorical value scored as absent"
        );
    }

    let churn_probability = state.predictor.predict_encoded(&vector)?;
    debug!(
        churn_probability = churn_probability.value(),
        absorbed = vector.absorbed().len(),
        "prediction served"
    );
    Ok(Json(PredictResponse { churn_probability }))
}

async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    let model = state.predictor.model();
    Json(HealthResponse {
        status: "ok",
        model_id: model.model_id().to_string(),
        model_version: model.model_version().to_string(),
        feature_count: state.predictor.schema().len(),
    })
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o.trim() == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = allowed_origins
            .iter()
            .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect::<Vec<_>>();
        if origins.is_empty() {
            warn!(
                configured = allowed_origins.len(),
                "no CORS origin survived parsing; browser callers will be refused"
            );
        }
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };

    cors.allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

#[cfg(test)]
mod tests;
