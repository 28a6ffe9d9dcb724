//! User system for Lobby
//!
//! Provides registration, login and presence tracking for players, backed by
//! an in-memory [`UserStore`].

mod demo;
pub mod errors;
pub mod presence;
pub mod store;
pub mod types;

pub use demo::DEMO_USERS;
pub use errors::UserError;
pub use store::UserStore;
pub use types::*;
