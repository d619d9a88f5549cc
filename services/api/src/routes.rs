use crate::infra::{enforce_text_limit, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use essay_rubric::checker::{issues_from_matches, matches_from_value};
use essay_rubric::error::AppError;
use essay_rubric::evaluation::views::{rubric_rows, RubricRow};
use essay_rubric::evaluation::{issues_from_value, TeacherOverride};
use essay_rubric::EvaluationResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

/// Evaluation payload. Every field is read permissively so that a mistyped field
/// degrades to its empty value instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct EvaluationRequest {
    pub(crate) text: Value,
    pub(crate) issues: Value,
    #[serde(alias = "overrideScores")]
    pub(crate) teacher_override_scores: Value,
    pub(crate) checker_matches: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluationResponse {
    #[serde(flatten)]
    pub(crate) result: EvaluationResult,
    pub(crate) rubric_rows: Vec<RubricRow>,
    pub(crate) evaluated_at: DateTime<Utc>,
}

pub(crate) fn evaluation_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/evaluations",
            axum::routing::post(evaluation_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluation_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let text = payload.text.as_str().unwrap_or_default();
    if let Err(err) = enforce_text_limit(text, &state.limits) {
        warn!(%err, "rejected evaluation request");
        return Err(err.into());
    }

    let mut issues = issues_from_value(&payload.issues);
    let checker_matches = matches_from_value(&payload.checker_matches);
    issues.extend(issues_from_matches(text, &checker_matches));
    let overrides = TeacherOverride::from_value(&payload.teacher_override_scores);

    let result = state.engine.evaluate(text, &issues, overrides.as_ref());
    let rubric_rows = rubric_rows(&result);

    Ok(Json(EvaluationResponse {
        result,
        rubric_rows,
        evaluated_at: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use essay_rubric::config::InputLimits;
    use essay_rubric::AcademicEvaluationEngine;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    const ANSWER: &str = "Plants need sunlight to grow. They also need water and soil.";

    fn app_state(ready: bool, max_text_bytes: usize) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            engine: AcademicEvaluationEngine::new(),
            limits: InputLimits { max_text_bytes },
        }
    }

    fn app(state: AppState) -> axum::Router {
        evaluation_routes().layer(Extension(state))
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post_evaluation(body: Value) -> axum::http::Request<axum::body::Body> {
        axum::http::Request::post("/api/v1/evaluations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(
                serde_json::to_vec(&body).expect("serializes"),
            ))
            .expect("request builds")
    }

    #[tokio::test]
    async fn evaluation_route_scores_text_and_applies_overrides() {
        let response = app(app_state(true, 4096))
            .oneshot(post_evaluation(json!({
                "text": ANSWER,
                "issues": [{ "group": "grammar", "message": "Check agreement." }],
                "teacherOverrideScores": { "overallScore": 95 }
            })))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["hasTeacherOverrides"], json!(true));
        assert_eq!(payload["effectiveRubric"]["overallScore"], json!(95.0));
        assert_eq!(payload["effectiveRubric"]["gradeLetter"], "A");
        assert_eq!(payload["rubric"]["issueStats"]["grammar"], 1);
        assert_eq!(
            payload["rubricRows"].as_array().map(Vec::len),
            Some(6)
        );
        assert!(payload["evaluatedAt"].is_string());
    }

    #[tokio::test]
    async fn evaluation_route_absorbs_mistyped_fields() {
        let response = app(app_state(true, 4096))
            .oneshot(post_evaluation(json!({
                "text": 42,
                "issues": "grammar",
                "teacherOverrideScores": [95]
            })))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["rubric"]["textStats"]["wordCount"], 0);
        assert_eq!(payload["rubric"]["issueStats"]["total"], 0);
        assert_eq!(payload["hasTeacherOverrides"], json!(false));
        assert_eq!(
            payload["structuredFeedback"]["grammarFeedback"]["summary"],
            "Grammar & Mechanics: No text extracted."
        );
    }

    #[tokio::test]
    async fn evaluation_route_converts_checker_matches() {
        let response = app(app_state(true, 4096))
            .oneshot(post_evaluation(json!({
                "text": "Their is a problem here.",
                "checkerMatches": [{
                    "offset": 0,
                    "length": 5,
                    "message": "Did you mean 'There'?",
                    "replacements": [{ "value": "There" }],
                    "rule": { "category": { "id": "GRAMMAR" } }
                }]
            })))
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        let items = &payload["structuredFeedback"]["grammarFeedback"]["topIssues"];
        assert_eq!(items[0]["symbol"], "Their");
        assert_eq!(items[0]["suggestion"], "There");
        assert_eq!(items[0]["key"], "grammar");
    }

    #[tokio::test]
    async fn evaluation_route_rejects_oversized_text() {
        let response = app(app_state(true, 8))
            .oneshot(post_evaluation(json!({ "text": ANSWER })))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let payload = read_json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .unwrap_or_default()
            .contains("byte limit"));
    }

    #[tokio::test]
    async fn readiness_reflects_startup_flag() {
        let response = readiness_endpoint(Extension(app_state(false, 16)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(app_state(true, 16)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
