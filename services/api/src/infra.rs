use metrics_exporter_prometheus::PrometheusHandle;
use sidss::config::CorsConfig;
use sidss::evaluation::EvaluationConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_evaluation_config() -> EvaluationConfig {
    EvaluationConfig::standard()
}

/// CORS for the dashboard. An unparsable origin falls back to allowing any.
pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any() {
        return layer.allow_origin(Any);
    }

    match config.allowed_origin.trim().parse::<axum::http::HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            warn!(origin = %config.allowed_origin, "invalid CORS origin, allowing any");
            layer.allow_origin(Any)
        }
    }
}
