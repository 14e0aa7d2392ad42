use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ApiFailure;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response: `{ "success": false, "error": { "code", "message" } }`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { status, code: code.into(), message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match &e {
            ServiceError::Validation(msg) => Self::validation(msg.clone()),
            ServiceError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, e.code(), e.to_string()),
            // store-side failures: log the detail, answer generically
            ServiceError::Store(_) | ServiceError::PartialIndexFailure { .. } | ServiceError::Corrupt(_) => {
                error!(code = e.code(), error = %e, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.code(), "internal server error")
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiFailure::new(self.code, self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("store unavailable: {0}")]
    Store(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::storage::StoreError;

    #[test]
    fn service_errors_map_to_statuses() {
        let e: JsonApiError = ServiceError::Validation("name must not be empty".into()).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "name must not be empty");

        let e: JsonApiError = ServiceError::not_found("review", "v1").into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.code, "REVIEW_NOT_FOUND");
    }

    #[test]
    fn store_errors_do_not_leak_details() {
        let e: JsonApiError = ServiceError::Store(StoreError::Connection("10.0.0.7:6379 refused".into())).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.code, "STORE_ERROR");
        assert!(!e.message.contains("6379"));

        let e: JsonApiError = ServiceError::PartialIndexFailure {
            restaurant_id: "r1".into(),
            failed: 1,
            attempted: 3,
        }
        .into();
        assert_eq!(e.code, "PARTIAL_INDEX_FAILURE");
        assert_eq!(e.message, "internal server error");
    }
}
