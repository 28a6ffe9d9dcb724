//! Subcommand implementations.

pub mod account;
pub mod health;
pub mod online;
pub mod serve;
