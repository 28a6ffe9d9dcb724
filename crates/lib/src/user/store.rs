//! In-memory user directory and presence tracking.
//!
//! [`UserStore`] owns the registered users and the list of logged-in
//! sessions. Both collections sit behind a single lock so that every
//! read-then-write sequence (duplicate checks on register, the "already
//! online?" check on login) is atomic with respect to other requests.
//!
//! Nothing is persisted; the store lives as long as the process.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::errors::UserError;
use super::types::{Session, User};
use crate::{Clock, Result, SystemClock};

/// Registered users and online sessions, in insertion order.
#[derive(Debug, Default)]
struct Directory {
    users: Vec<User>,
    sessions: Vec<Session>,
}

impl Directory {
    fn find_user(&self, name: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.has_name(name) && u.password_matches(password))
    }

    fn is_online(&self, name: &str) -> bool {
        self.sessions.iter().any(|s| s.has_name(name))
    }
}

/// Shared handle to the user directory.
///
/// Cloning is cheap and every clone sees the same data, so one store built at
/// startup can be handed to each request handler.
#[derive(Clone, Debug)]
pub struct UserStore {
    directory: Arc<RwLock<Directory>>,
    clock: Arc<dyn Clock>,
}

impl UserStore {
    /// Create an empty store using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store that stamps sessions using `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            directory: Arc::new(RwLock::new(Directory::default())),
            clock,
        }
    }

    /// The time source used for login timestamps.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Register a new user.
    ///
    /// `name` and `clash_id` are trimmed before validation and storage; the
    /// password is kept exactly as given. Fails with a validation error if any
    /// field is blank, and with a conflict if another user already has the
    /// same name or clash ID (ignoring case). Does not log the user in.
    pub async fn register(&self, name: &str, clash_id: &str, password: &str) -> Result<()> {
        let name = name.trim();
        let clash_id = clash_id.trim();
        if name.is_empty() || clash_id.is_empty() || password.is_empty() {
            return Err(UserError::fields_required().into());
        }

        let mut directory = self.directory.write().await;
        if directory
            .users
            .iter()
            .any(|u| u.collides_with(name, clash_id))
        {
            return Err(UserError::Conflict {
                name: name.to_string(),
                clash_id: clash_id.to_string(),
            }
            .into());
        }

        directory.users.push(User::new(
            name.to_string(),
            clash_id.to_string(),
            password.to_string(),
        ));
        tracing::info!("Registered user {name} ({clash_id})");
        Ok(())
    }

    /// Log a user in and return their account.
    ///
    /// The name is matched ignoring case, the password exactly. A session is
    /// opened only if the user is not already online; logging in again keeps
    /// the first login time.
    pub async fn login(&self, name: &str, password: &str) -> Result<User> {
        self.login_at(name, password, self.clock.now_millis()).await
    }

    pub(crate) async fn login_at(&self, name: &str, password: &str, now: u64) -> Result<User> {
        let name = name.trim();
        if name.is_empty() || password.is_empty() {
            return Err(UserError::fields_required().into());
        }

        let mut directory = self.directory.write().await;
        let user = directory
            .find_user(name, password)
            .cloned()
            .ok_or(UserError::Auth)?;

        if directory.is_online(user.name()) {
            tracing::debug!("User {} already online", user.name());
        } else {
            directory.sessions.push(Session::start(&user, now));
            tracing::info!("User {} logged in", user.name());
        }
        Ok(user)
    }

    /// End the session for `name`, ignoring case.
    ///
    /// Never fails. Returns whether a session was actually removed.
    pub async fn logout(&self, name: &str) -> bool {
        let name = name.trim();
        let mut directory = self.directory.write().await;
        let before = directory.sessions.len();
        directory.sessions.retain(|s| !s.has_name(name));
        let removed = directory.sessions.len() != before;
        if removed {
            tracing::info!("User {name} logged out");
        } else {
            tracing::debug!("Logout for {name:?} with no active session");
        }
        removed
    }

    /// All current sessions, oldest login first.
    pub async fn list_online(&self) -> Vec<Session> {
        self.directory.read().await.sessions.clone()
    }

    /// Check whether `name` currently has a session.
    pub async fn is_online(&self, name: &str) -> bool {
        self.directory.read().await.is_online(name.trim())
    }

    /// Number of registered users.
    pub async fn user_count(&self) -> usize {
        self.directory.read().await.users.len()
    }

    /// Number of open sessions.
    pub async fn online_count(&self) -> usize {
        self.directory.read().await.sessions.len()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
