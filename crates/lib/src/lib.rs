//!
//! Lobby: player registration, login and presence for a game night.
//! This library provides the in-memory user store and the HTTP API that serves it.
//!
//! ## Core Concepts
//!
//! * **Users (`user::User`)**: Registered accounts with a name, a clash ID and a password. Names and clash IDs are unique ignoring case.
//! * **Sessions (`user::Session`)**: Markers that a user is currently online, stamped with their login time. At most one per user.
//! * **UserStore (`user::UserStore`)**: The shared, lock-protected directory of users and sessions with `register`, `login`, `logout` and `list_online`.
//! * **API (`api`)**: An axum router exposing the store as JSON endpoints, plus [`api::ApiServer`] to run it in the background.
//! * **Clock (`clock::Clock`)**: The time source used for login timestamps and "5m ago" presence labels.
//!
//! ## Example
//!
//! ```
//! use lobby::UserStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> lobby::Result<()> {
//! let store = UserStore::new();
//! store.register("Alice", "A1", "pw1").await?;
//! store.login("alice", "pw1").await?;
//! assert_eq!(store.list_online().await[0].name, "Alice");
//! store.logout("ALICE").await;
//! assert!(store.list_online().await.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod clock;
pub mod constants;
pub mod user;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use user::{Session, User, UserError, UserStore};

/// Result type used throughout the Lobby library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Lobby library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured user errors from the user module
    #[error(transparent)]
    User(user::UserError),

    /// Structured server lifecycle errors from the api module
    #[error(transparent)]
    Server(api::ServerError),
}

impl From<user::UserError> for Error {
    fn from(err: user::UserError) -> Self {
        Error::User(err)
    }
}

impl From<api::ServerError> for Error {
    fn from(err: api::ServerError) -> Self {
        Error::Server(err)
    }
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::User(_) => "user",
            Error::Server(_) => "api",
            Error::Io(_) => "io",
        }
    }

    /// Check if this error is a missing-field rejection.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
