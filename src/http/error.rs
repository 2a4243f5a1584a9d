use crate::order_actor::OrderError;
use crate::verification_actor::VerificationError;
use axum::{http::StatusCode, response::Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Credential rejected: {0}")]
    Credential(String),
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        let message = e.message().to_string();
        match e {
            OrderError::Validation(_) => ApiError::Validation(message),
            OrderError::NotFound(_) => ApiError::NotFound(message),
            OrderError::Persistence(_) => ApiError::InternalError(message),
        }
    }
}

impl From<VerificationError> for ApiError {
    fn from(e: VerificationError) -> Self {
        match e {
            VerificationError::Invalid(msg) => ApiError::Validation(msg),
            VerificationError::NotFound
            | VerificationError::Expired
            | VerificationError::Mismatch => ApiError::Credential(e.to_string()),
            VerificationError::Unavailable(_) => {
                ApiError::InternalError("Verification service unavailable".into())
            }
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Credential(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
