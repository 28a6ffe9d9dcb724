//! JSON bodies exchanged over the HTTP API.
//!
//! Field names follow the camelCase wire format. Request fields default to
//! empty strings when absent so a missing field is reported as a validation
//! error rather than a parse failure.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/register`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub clash_id: String,
    pub password: String,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Body of `POST /api/logout`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoutRequest {
    pub name: String,
}

/// Success body of the mutating endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Body of every 4xx/5xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub users: usize,
    pub online: usize,
}
