//! Core data types for the user system

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// Names and clash IDs are unique across all users, compared without regard
/// to case. Users are never mutated or removed once registered.
///
/// The password is kept verbatim and never serialized.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    name: String,
    clash_id: String,
    #[serde(skip)]
    password: String,
}

impl User {
    pub(crate) fn new(name: String, clash_id: String, password: String) -> Self {
        Self {
            name,
            clash_id,
            password,
        }
    }

    /// Login name, as given at registration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clash ID, as given at registration.
    pub fn clash_id(&self) -> &str {
        &self.clash_id
    }

    /// True if `name` refers to this user, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// True if this user would clash with a registration for `name` / `clash_id`.
    pub(crate) fn collides_with(&self, name: &str, clash_id: &str) -> bool {
        self.has_name(name) || eq_ignore_case(&self.clash_id, clash_id)
    }

    pub(crate) fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("clash_id", &self.clash_id)
            .finish_non_exhaustive()
    }
}

/// A currently logged-in user.
///
/// At most one session exists per user name. `login_time` is the instant the
/// session was created, in milliseconds since the Unix epoch, and is not
/// refreshed by repeated logins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub name: String,
    pub clash_id: String,
    pub login_time: u64,
}

impl Session {
    pub(crate) fn start(user: &User, login_time: u64) -> Self {
        Self {
            name: user.name.clone(),
            clash_id: user.clash_id.clone(),
            login_time,
        }
    }

    /// True if this session belongs to `name`, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Whole minutes elapsed between login and `now_millis`.
    pub fn minutes_online(&self, now_millis: u64) -> u64 {
        super::presence::minutes_since(self.login_time, now_millis)
    }

    /// Human-readable time since login, e.g. "Just now" or "5m ago".
    pub fn elapsed_label(&self, now_millis: u64) -> String {
        super::presence::elapsed_label(self.minutes_online(now_millis))
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
