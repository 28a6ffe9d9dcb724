//! HTTP API over a [`UserStore`].
//!
//! | Method & Path        | Body                        | Success                     |
//! |----------------------|-----------------------------|-----------------------------|
//! | `POST /api/register` | `{name, clashId, password}` | `{success, message}`        |
//! | `POST /api/login`    | `{name, password}`          | `{success, message}`        |
//! | `POST /api/logout`   | `{name}`                    | `{success, message}`        |
//! | `GET /api/online`    |                             | `[{name, clashId, loginTime}]` |
//! | `GET /health`        |                             | `{status, users, online}`   |
//! | `GET /`              |                             | plaintext banner            |
//!
//! Rejections are answered as `{"error": "..."}` with 400 for missing fields
//! or malformed bodies, 409 for duplicate registrations and 401 for bad
//! credentials. Logout always succeeds.

pub mod errors;
pub mod protocol;
mod server;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};

pub use errors::{ApiError, ServerError};
pub use protocol::*;
pub use server::ApiServer;

use crate::constants::{
    BANNER, MSG_LOGGED_IN, MSG_LOGGED_OUT, MSG_REGISTERED, ROUTE_HEALTH, ROUTE_LOGIN,
    ROUTE_LOGOUT, ROUTE_ONLINE, ROUTE_REGISTER, ROUTE_ROOT,
};
use crate::user::{Session, UserStore};

/// Build the router serving every endpoint against `store`.
pub fn router(store: UserStore) -> Router {
    Router::new()
        .route(ROUTE_ROOT, get(handle_root_request))
        .route(ROUTE_HEALTH, get(handle_health_endpoint))
        .route(ROUTE_REGISTER, post(handle_register))
        .route(ROUTE_LOGIN, post(handle_login))
        .route(ROUTE_LOGOUT, post(handle_logout))
        .route(ROUTE_ONLINE, get(handle_online))
        .with_state(store)
}

/// Handler for GET / - plaintext banner
async fn handle_root_request() -> &'static str {
    BANNER
}

/// Handler for GET /health
async fn handle_health_endpoint(State(store): State<UserStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        users: store.user_count().await,
        online: store.online_count().await,
    })
}

/// Handler for POST /api/register
async fn handle_register(
    State(store): State<UserStore>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;
    store
        .register(&request.name, &request.clash_id, &request.password)
        .await?;
    Ok(Json(MessageResponse::ok(MSG_REGISTERED)))
}

/// Handler for POST /api/login
async fn handle_login(
    State(store): State<UserStore>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;
    store.login(&request.name, &request.password).await?;
    Ok(Json(MessageResponse::ok(MSG_LOGGED_IN)))
}

/// Handler for POST /api/logout
///
/// An unreadable body is treated as an empty name, which is a no-op.
async fn handle_logout(
    State(store): State<UserStore>,
    payload: Result<Json<LogoutRequest>, JsonRejection>,
) -> Json<MessageResponse> {
    let request = payload.map(|Json(r)| r).unwrap_or_default();
    store.logout(&request.name).await;
    Json(MessageResponse::ok(MSG_LOGGED_OUT))
}

/// Handler for GET /api/online
async fn handle_online(State(store): State<UserStore>) -> Json<Vec<Session>> {
    Json(store.list_online().await)
}
