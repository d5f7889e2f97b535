use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use validator::ValidationErrors;

use crate::store::StoreError;

/// Errors returned by HTTP handlers.
///
/// Every variant renders as `{"error": "<message>"}` with its status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid request body. HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Referenced record does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// Bad admin credentials. HTTP 401.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Known route, wrong method. HTTP 405.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Anything else. HTTP 500; the detail is logged, not returned.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Unauthorized => serde_json::json!({
                "success": false,
                "error": self.to_string(),
            }),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "Request failed");
                serde_json::json!({ "error": "Internal server error" })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound("RFQ not found".to_string()),
            StoreError::Invalid(msg) => ApiError::Validation(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}
