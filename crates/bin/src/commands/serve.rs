//! Serve command - runs the Lobby HTTP server.

use tokio::signal::unix::{SignalKind, signal};
use tracing_subscriber::EnvFilter;

use lobby::{UserStore, api::ApiServer};

use crate::cli::ServeArgs;

/// Run the Lobby server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("lobby=info".parse()?))
        .init();

    let store = UserStore::new();
    if args.seed_demo {
        store.seed_demo().await?;
    }

    let mut server = ApiServer::new(store);
    let addr = format!("{}:{}", args.host, args.port);
    let local_addr = server.start(&addr).await?;

    // Print startup message
    println!("Lobby server started on http://localhost:{}", local_addr.port());
    println!();
    println!("Available endpoints:");
    println!("  GET  /              - Banner");
    println!("  GET  /health        - Health check");
    println!("  POST /api/register  - Register {{name, clashId, password}}");
    println!("  POST /api/login     - Log in {{name, password}}");
    println!("  POST /api/logout    - Log out {{name}}");
    println!("  GET  /api/online    - Players currently online");
    println!();
    println!("Press Ctrl+C to shutdown");

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    tokio::select! {
        _ = sigterm.recv() => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
        _ = sigint.recv() => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
    }

    server.stop().await?;
    println!("Server shut down");
    Ok(())
}
