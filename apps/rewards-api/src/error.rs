//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Receipt Rewards                        │
//! │                                                                         │
//! │  Handler: Result<Json<T>, ApiError>                                     │
//! │       │                                                                 │
//! │       ├── body over MAX_BODY_BYTES ────────► 413 too large              │
//! │       ├── JSON decode failed ──────────────► 400 decoding failed        │
//! │       ├── ValidationError::MissingFields ──► 400 missing fields         │
//! │       ├── ValidationError::InvalidFields ──► 400 invalid field(s)       │
//! │       ├── StoreError::Duplicate ───────────► 409 already exists         │
//! │       ├── StoreError::NotFound ────────────► 404 doesn't exist          │
//! │       └── CoreError::Parse ────────────────► 500 (logged)               │
//! │                                                                         │
//! │  Body: {"Error": "<message>"}                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rewards_core::{CoreError, ValidationError};
use rewards_store::StoreError;
use serde::Serialize;

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// { "Error": "Receipt is missing required data fields" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status sent with the envelope
    pub status: StatusCode,

    /// Human-readable error message
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    #[serde(rename = "Error")]
    error: &'a str,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 error.
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 405 error.
    pub fn method_not_allowed() -> Self {
        ApiError::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "This method is not allowed on this endpoint",
        )
    }

    /// Creates a 500 error. The message never carries internal details.
    pub fn internal() -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

/// Converts validation verdicts to 400s.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Parse { field, value } => {
                // Stored receipts are validated, so this is a server bug
                tracing::error!(%field, %value, "Points calculation failed");
                ApiError::internal()
            }
        }
    }
}

/// Converts request body failures to API errors.
///
/// Oversized bodies keep their 413; anything else reading the body fails
/// is reported like undecodable JSON.
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Receipt data exceeds the size limit",
            )
        } else {
            ApiError::bad_request("Receipt data decoding failed")
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => {
                ApiError::not_found("The requested receipt doesn't exist")
            }
            StoreError::Duplicate { .. } => ApiError::conflict("Receipt already exists"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let err = ApiError::from(ValidationError::MissingFields);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Receipt is missing required data fields");

        let err = ApiError::from(ValidationError::InvalidFields);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Receipt data has invalid field(s)");
    }

    #[test]
    fn test_parse_error_hides_details() {
        let err = ApiError::from(CoreError::parse("total", "abc"));
        assert_eq!(err, ApiError::internal());
        assert!(!err.message.contains("abc"));
    }

    #[test]
    fn test_store_errors() {
        let err = ApiError::from(StoreError::not_found("123"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "The requested receipt doesn't exist");

        let err = ApiError::from(StoreError::duplicate("123"));
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.message, "Receipt already exists");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::method_not_allowed().to_string(),
            "[405] This method is not allowed on this endpoint"
        );
    }
}
