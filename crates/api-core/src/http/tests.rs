use super::*;
use crate::test_support::models_dir;
use scoring::{EncodingSchema, ProbabilityModel, LABEL_COLUMN};
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const BASELINE_PROBABILITY: f64 = 0.5475291013617768;

struct TestServer {
    base: String,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<Result<()>>,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn stop(self) {
        let _ = self.shutdown_tx.send(());
        self.handle
            .await
            .expect("server task")
            .expect("clean shutdown");
    }
}

async fn spawn_api(predictor: ChurnPredictor, allowed_origins: &[String]) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral");
    let addr = listener.local_addr().expect("local addr");
    let app = router(
        ApiState {
            predictor: Arc::new(predictor),
        },
        allowed_origins,
    );
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(serve(listener, app, async move {
        let _ = shutdown_rx.await;
    }));
    TestServer {
        base: format!("http://{addr}"),
        shutdown_tx,
        handle,
    }
}

fn bundled_predictor() -> ChurnPredictor {
    let dir = models_dir();
    let paths = scoring::ArtifactPaths {
        columns: dir.join("columns.json"),
        scaler: dir.join("scaler.json"),
        model: dir.join("model.json"),
    };
    ChurnPredictor::from_artifacts(&paths, LABEL_COLUMN).expect("bundled artifacts")
}

fn baseline_json() -> Value {
    let raw = std::fs::read_to_string(models_dir().join("baseline_record.json"))
        .expect("read baseline record");
    serde_json::from_str(&raw).expect("parse baseline record")
}

fn with_field(mut record: Value, field: &str, value: Value) -> Value {
    record
        .as_object_mut()
        .expect("record object")
        .insert(field.to_string(), value);
    record
}

fn without_field(mut record: Value, field: &str) -> Value {
    record.as_object_mut().expect("record object").remove(field);
    record
}

async fn post_predict(server: &TestServer, body: &Value) -> (StatusCode, Value) {
    let resp = reqwest::Client::new()
        .post(server.url("/predict"))
        .json(body)
        .send()
        .await
        .expect("send predict");
    let status = StatusCode::from_u16(resp.status().as_u16()).expect("status code");
    let body = resp.json::<Value>().await.expect("json body");
    (status, body)
}

/// Model that accepts the schema but fails every scoring call.
struct BrokenModel {
    width: usize,
}

impl ProbabilityModel for BrokenModel {
    fn model_id(&self) -> &str {
        "broken"
    }

    fn model_version(&self) -> &str {
        "0"
    }

    fn n_features(&self) -> usize {
        self.width
    }

    fn predict_proba(&self, _rows: &[&[f64]]) -> std::result::Result<Vec<[f64; 2]>, ScoringError> {
        Err(ScoringError::ModelInvocation(
            "estimator raised during predict_proba".to_string(),
        ))
    }
}

fn broken_predictor() -> ChurnPredictor {
    let dir = models_dir();
    let schema = EncodingSchema::load(
        &dir.join("columns.json"),
        &dir.join("scaler.json"),
        LABEL_COLUMN,
    )
    .expect("schema");
    let width = schema.len();
    ChurnPredictor::new(schema, BrokenModel { width }).expect("predictor")
}

#[tokio::test]
async fn health_reports_loaded_model() {
    let server = spawn_api(bundled_predictor(), &[]).await;

    let resp = reqwest::get(server.url("/health")).await.expect("get health");
    assert_eq!(resp.status().as_u16(), 200);
    let body = resp.json::<Value>().await.expect("json body");
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "model_id": "telco-churn-logreg",
            "model_version": "2024.11.0",
            "feature_count": 45,
        })
    );

    server.stop().await;
}

#[tokio::test]
async fn baseline_record_scores_reference_probability() {
    let server = spawn_api(bundled_predictor(), &[]).await;

    let (status, body) = post_predict(&server, &baseline_json()).await;
    assert_eq!(status, StatusCode::OK);
    let p = body["churn_probability"].as_f64().expect("probability");
    assert!((p - BASELINE_PROBABILITY).abs() < 1e-9, "p = {p}");
    assert_eq!(body.as_object().map(|o| o.len()), Some(1));

    server.stop().await;
}

#[tokio::test]
async fn unseen_category_scores_like_missing_field() {
    let server = spawn_api(bundled_predictor(), &[]).await;

    let unseen = with_field(baseline_json(), "contract", json!("Quarterly"));
    let missing = without_field(baseline_json(), "contract");
    let (unseen_status, unseen_body) = post_predict(&server, &unseen).await;
    let (missing_status, missing_body) = post_predict(&server, &missing).await;

    assert_eq!(unseen_status, StatusCode::OK);
    assert_eq!(missing_status, StatusCode::OK);
    assert_eq!(
        unseen_body["churn_probability"],
        missing_body["churn_probability"]
    );

    server.stop().await;
}

#[tokio::test]
async fn missing_tenure_is_unprocessable() {
    let server = spawn_api(bundled_predictor(), &[]).await;

    let (status, body) = post_predict(&server, &without_field(baseline_json(), "tenure")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_input");
    assert!(body["message"].as_str().unwrap_or_default().contains("tenure"));
    assert!(body.get("churn_probability").is_none());

    server.stop().await;
}

#[tokio::test]
async fn invalid_numeric_values_are_unprocessable() {
    let server = spawn_api(bundled_predictor(), &[]).await;

    for (field, value) in [
        ("tenure", json!("twelve")),
        ("seniorcitizen", json!(2)),
        ("monthlycharges", json!(-1.0)),
    ] {
        let (status, body) = post_predict(&server, &with_field(baseline_json(), field, value)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "field {field}");
        assert_eq!(body["error"], "invalid_input", "field {field}");
    }

    server.stop().await;
}

#[tokio::test]
async fn malformed_body_is_unprocessable() {
    let server = spawn_api(bundled_predictor(), &[]).await;

    let resp = reqwest::Client::new()
        .post(server.url("/predict"))
        .header(header::CONTENT_TYPE.as_str(), "application/json")
        .body("{\"tenure\": 12,")
        .send()
        .await
        .expect("send predict");
    assert_eq!(resp.status().as_u16(), 422);
    let body = resp.json::<Value>().await.expect("json body");
    assert_eq!(body["error"], "invalid_input");

    server.stop().await;
}

#[tokio::test]
async fn scoring_failure_is_internal_error_without_probability() {
    let server = spawn_api(broken_predictor(), &[]).await;

    let (status, body) = post_predict(&server, &baseline_json()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "model_invocation");
    assert!(body.get("churn_probability").is_none());

    server.stop().await;
}

#[tokio::test]
async fn cors_allows_only_configured_origins() {
    let origins = vec!["http://localhost:5173".to_string()];
    let server = spawn_api(bundled_predictor(), &origins).await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(server.url("/health"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .expect("get health");
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );

    let denied = client
        .get(server.url("/health"))
        .header("origin", "http://evil.example")
        .send()
        .await
        .expect("get health");
    assert!(denied.headers().get("access-control-allow-origin").is_none());

    server.stop().await;
}

#[tokio::test]
async fn empty_origin_list_allows_any_origin() {
    let server = spawn_api(bundled_predictor(), &[]).await;

    let resp = reqwest::Client::new()
        .get(server.url("/health"))
        .header("origin", "http://dashboard.example")
        .send()
        .await
        .expect("get health");
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    server.stop().await;
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = spawn_api(bundled_predictor(), &[]).await;

    let resp = reqwest::get(server.url("/predictions"))
        .await
        .expect("get unknown route");
    assert_eq!(resp.status().as_u16(), 404);

    server.stop().await;
}
