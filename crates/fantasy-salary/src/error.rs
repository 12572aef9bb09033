use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::salary::{FetchError, SalaryGenerationError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Summary shown to API callers when the salary pipeline fails as a whole.
pub const SALARY_FAILURE_MESSAGE: &str = "Failed to generate player salaries";

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    HttpClient(FetchError),
    InvalidRequest(String),
    Salary(SalaryGenerationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::HttpClient(err) => write!(f, "http client setup failed: {}", err),
            AppError::InvalidRequest(reason) => f.write_str(reason),
            AppError::Salary(err) => write!(f, "salary generation failed: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::HttpClient(err) => Some(err),
            AppError::InvalidRequest(_) => None,
            AppError::Salary(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidRequest(reason) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response()
            }
            AppError::Salary(err) => {
                let body = Json(json!({
                    "error": SALARY_FAILURE_MESSAGE,
                    "details": err.to_string(),
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            other @ (AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::HttpClient(_)) => {
                let body = Json(json!({ "error": other.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
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

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<SalaryGenerationError> for AppError {
    fn from(value: SalaryGenerationError) -> Self {
        Self::Salary(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::salary::ScorecardParseError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn invalid_request_maps_to_bad_request() {
        let response = AppError::InvalidRequest("matchUrl is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = body_json(response).await;
        assert_eq!(payload["error"], "matchUrl is required");
        assert!(payload.get("details").is_none());
    }

    #[tokio::test]
    async fn salary_failure_carries_details() {
        let err = SalaryGenerationError::Scorecard(ScorecardParseError::NoRows {
            strategy: "cricinfo-batting",
        });
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload = body_json(response).await;
        assert_eq!(payload["error"], SALARY_FAILURE_MESSAGE);
        assert!(payload["details"]
            .as_str()
            .unwrap_or_default()
            .contains("cricinfo-batting"));
    }

    #[tokio::test]
    async fn config_failure_is_internal_error() {
        let response = AppError::from(ConfigError::InvalidPort).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload = body_json(response).await;
        assert!(payload["error"]
            .as_str()
            .unwrap_or_default()
            .contains("APP_PORT"));
    }

    #[tokio::test]
    async fn client_setup_failure_is_not_reported_as_salary_failure() {
        let err = crate::workflows::salary::HttpDocumentFetcher::new(
            "bad\nagent",
            std::time::Duration::from_secs(1),
        )
        .expect_err("invalid user agent");
        let response = AppError::HttpClient(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload = body_json(response).await;
        assert_ne!(payload["error"], SALARY_FAILURE_MESSAGE);
        assert!(payload.get("details").is_none());
    }
}
