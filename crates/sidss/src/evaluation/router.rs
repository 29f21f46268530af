use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::intake::ProjectRequestPayload;
use super::EvaluationEngine;

pub const PING_MESSAGE: &str = "SIDSS Backend Online";

/// Router builder exposing the project evaluation endpoints.
pub fn evaluation_router(engine: Arc<EvaluationEngine>) -> Router {
    Router::new()
        .route("/api/projects/evaluate", post(evaluate_handler))
        .route("/api/projects/ping", get(ping_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<EvaluationEngine>>,
    axum::Json(payload): axum::Json<ProjectRequestPayload>,
) -> Response {
    let request = match payload.into_request() {
        Ok(request) => request,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match engine.evaluate_project(&request) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn ping_handler() -> &'static str {
    PING_MESSAGE
}
