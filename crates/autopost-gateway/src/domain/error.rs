//! Gateway error taxonomy.
//!
//! Request-level failures all leave the process as an
//! `{ok: false, error: <string>}` JSON envelope; the variant decides the
//! HTTP status. Per-target send faults never reach this layer; the
//! dispatcher records them inside the result list.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use autopost_store::StoreError;

/// Request-level error, rendered as the JSON error envelope.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// No bot token configured; broadcast and verification cannot run.
    #[error("telegram_token_missing")]
    MissingBotToken,

    /// Admin credential absent, wrong, or administration not configured.
    #[error("invalid_admin_key")]
    InvalidAdminKey,

    /// A required request field is absent.
    #[error("missing {0}")]
    MissingField(&'static str),

    /// No route matches the request.
    #[error("not_found")]
    NotFound,

    /// Anything else; the description rides in the envelope.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for the envelope.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingBotToken | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidAdminKey => StatusCode::FORBIDDEN,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "ok": false, "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Service-level errors (startup and serving, not per-request).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Serve loop error
    #[error("server error: {0}")]
    Server(String),
}
