use crate::boq::BoqImportError;
use crate::config::ConfigError;
use crate::evaluation::EvaluationError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Evaluation(EvaluationError),
    Import(BoqImportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid project request: {}", err),
            AppError::Evaluation(err) => write!(f, "evaluation error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Evaluation(err) => Some(err),
            AppError::Import(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Evaluation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Import(_) | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<EvaluationError> for AppError {
    fn from(value: EvaluationError) -> Self {
        Self::Evaluation(value)
    }
}

impl From<BoqImportError> for AppError {
    fn from(value: BoqImportError) -> Self {
        Self::Import(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::InvalidParameter;

    #[test]
    fn evaluation_errors_map_to_unprocessable_entity() {
        let error = AppError::from(EvaluationError::InvalidDesignParameters(
            InvalidParameter::ZeroDesignLife,
        ));
        assert!(error.to_string().contains("invalid design parameters"));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn io_errors_map_to_internal_server_error() {
        let error = AppError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert!(matches!(error, AppError::Io(_)));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn import_errors_map_to_bad_request() {
        let response = AppError::from(BoqImportError::MissingColumn("quantity")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
