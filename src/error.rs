//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Upstream failure detail is logged server-side and never leaked to
//! clients — the response body carries a generic "status unavailable"
//! message instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::scrape::ParseError;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 3002,
///     "message": "road status is currently unavailable",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// Classification never appears here: the classifier always yields a
/// value, so "ambiguous advisory text" is not an error condition.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Outbound advisory fetch failed (transport, timeout, non-2xx).
    #[error("advisory fetch failed: {0}")]
    Fetch(String),

    /// Advisory page could not be parsed.
    #[error("advisory parse failed: {0}")]
    Parse(#[from] ParseError),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Internal(_) => 3000,
            Self::Persistence(_) => 3001,
            Self::Fetch(_) => 3002,
            Self::Parse(_) => 3003,
        }
    }

    /// Returns the HTTP status code for this variant.
    ///
    /// Upstream trouble (fetch/parse) maps to 502 since the fault lies
    /// with the advisory source, everything else to 500.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Fetch(_) | Self::Parse(_) => StatusCode::BAD_GATEWAY,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal detail stays in the logs.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        "road status is currently unavailable"
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(error = %self, "request failed");
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message().to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
