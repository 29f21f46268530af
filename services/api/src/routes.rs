use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use sidss::evaluation::{evaluation_router, EvaluationEngine};
use std::sync::Arc;

pub(crate) fn with_evaluation_routes(engine: Arc<EvaluationEngine>) -> axum::Router {
    evaluation_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::default_evaluation_config;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn router() -> axum::Router {
        with_evaluation_routes(Arc::new(EvaluationEngine::new(default_evaluation_config())))
    }

    #[tokio::test]
    async fn health_route_is_served_alongside_evaluation_api() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn evaluate_route_is_mounted() {
        let body = serde_json::json!({
            "name": "Depot Extension",
            "projectType": "BUILDING",
            "designLifeYears": "30",
            "boq": [{ "name": "Steel", "quantity": 40, "unitCost": 950, "carbonFactor": 1850 }],
            "maintenance": { "annualMaintenanceCost": 2000, "degradationRate": 0.01 },
            "economics": { "discountRate": 0.04, "annualEconomicBenefit": 9000 },
            "social": { "jobsCreated": 35, "populationServed": 1200, "safetyScore": 7 },
            "policy": { "subsidyRate": "", "carbonTaxRate": 20, "approvalThreshold": 55 }
        });

        let response = router()
            .oneshot(
                Request::post("/api/projects/evaluate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).expect("serialize")))
                    .expect("request"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
