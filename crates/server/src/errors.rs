use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::debug;

/// HTTP-facing error: a status code plus a JSON `{"error": ...}` body.
/// Every failure is terminal for the request; nothing is retried.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let status = match &e {
            ServiceError::InvalidId(_)
            | ServiceError::Validation(_)
            | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        Self::new(status, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, error = %self.message, "request failed");
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}
