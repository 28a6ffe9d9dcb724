//! CLI argument definitions for the Lobby binary.

use clap::{Parser, Subcommand};
use lobby::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_URL};

/// Lobby player registration and presence server
#[derive(Parser, Debug)]
#[command(name = "lobby")]
#[command(about = "Lobby: register players, log them in, see who is online")]
#[command(version)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Lobby server
    Serve(ServeArgs),
    /// Check health of a running Lobby server
    Health(HealthArgs),
    /// Register a new player
    Register(RegisterArgs),
    /// Log a player in
    Login(LoginArgs),
    /// Log a player out
    Logout(LogoutArgs),
    /// List players currently online
    Online(OnlineArgs),
}

/// Arguments for the serve command
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "LOBBY_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = DEFAULT_HOST, env = "LOBBY_HOST")]
    pub host: String,

    /// Start with the demo roster (Alice, Bob, Charlie) already registered
    #[arg(long, env = "LOBBY_SEED_DEMO")]
    pub seed_demo: bool,
}

/// Connection settings shared by every client command
#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    /// Base URL of the Lobby server
    #[arg(short, long, default_value = DEFAULT_URL, env = "LOBBY_URL")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    #[command(flatten)]
    pub server: ServerArgs,
}

/// Arguments for the register command
#[derive(clap::Args, Debug)]
pub struct RegisterArgs {
    /// Player name
    pub name: String,
    /// Clash ID
    pub clash_id: String,
    /// Password
    pub password: String,

    #[command(flatten)]
    pub server: ServerArgs,
}

/// Arguments for the login command
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Player name
    pub name: String,
    /// Password
    pub password: String,

    #[command(flatten)]
    pub server: ServerArgs,
}

/// Arguments for the logout command
#[derive(clap::Args, Debug)]
pub struct LogoutArgs {
    /// Player name
    pub name: String,

    #[command(flatten)]
    pub server: ServerArgs,
}

/// Arguments for the online command
#[derive(clap::Args, Debug)]
pub struct OnlineArgs {
    #[command(flatten)]
    pub server: ServerArgs,
}
