//! Error responses for the Planilla Engine API.
//!
//! Request-body problems are reported as 400. Rate problems are reported as
//! 422 and configuration failures on the server as 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn build(code: &str, message: impl Into<String>, details: Option<&str>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: details.map(str::to_string),
        }
    }

    /// A request body that is missing required fields.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::build("VALIDATION_ERROR", message, None)
    }

    /// A request body that is not valid JSON or has the wrong shape.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::build("MALFORMED_JSON", message, None)
    }

    /// A request sent without `Content-Type: application/json`.
    pub fn missing_content_type() -> Self {
        Self::build(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
            None,
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code, details) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                None,
            ),
            EngineError::RateConfigurationMissing => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "RATE_CONFIGURATION_MISSING",
                Some("Supply `rates` in the request or configure session rates on the server"),
            ),
            EngineError::InvalidRateConfiguration { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_RATE_CONFIGURATION",
                Some("Every contribution rate must be a percentage between 0 and 100"),
            ),
        };

        ApiErrorResponse {
            status,
            error: ApiError::build(code, error.to_string(), details),
        }
    }
}
