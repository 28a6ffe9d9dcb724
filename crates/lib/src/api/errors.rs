//! Error types for the HTTP layer

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::protocol::ErrorResponse;

/// Failures managing the lifecycle of an [`ApiServer`](super::ApiServer).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Server already running at {address}")]
    AlreadyRunning { address: String },

    #[error("Server not running")]
    NotRunning,

    #[error("Failed to bind {address}: {reason}")]
    Bind { address: String, reason: String },

    #[error("Server task failed: {reason}")]
    Task { reason: String },
}

/// An error answered to an HTTP client as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        let status = if err.is_validation_error() {
            StatusCode::BAD_REQUEST
        } else if err.is_conflict() {
            StatusCode::CONFLICT
        } else if err.is_authentication_error() {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{} {}", self.status, self.message);
        } else {
            tracing::warn!("{} {}", self.status, self.message);
        }
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
