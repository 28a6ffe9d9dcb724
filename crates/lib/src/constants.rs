//! Constants used throughout the Lobby library.
//!
//! Central definitions for the HTTP surface, the messages returned to callers
//! and server defaults.

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address for the server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default base URL used by the command-line client.
pub const DEFAULT_URL: &str = "http://127.0.0.1:3000";

/// Plaintext body served on `GET /`.
pub const BANNER: &str = "Casino Royale backend is running!";

/// Milliseconds per minute, the granularity of presence labels.
pub const MILLIS_PER_MINUTE: u64 = 60_000;

// Route paths
pub const ROUTE_ROOT: &str = "/";
pub const ROUTE_HEALTH: &str = "/health";
pub const ROUTE_REGISTER: &str = "/api/register";
pub const ROUTE_LOGIN: &str = "/api/login";
pub const ROUTE_LOGOUT: &str = "/api/logout";
pub const ROUTE_ONLINE: &str = "/api/online";

// Success messages
pub const MSG_REGISTERED: &str = "Registered! You can now log in.";
pub const MSG_LOGGED_IN: &str = "Logged in!";
pub const MSG_LOGGED_OUT: &str = "Logged out.";
