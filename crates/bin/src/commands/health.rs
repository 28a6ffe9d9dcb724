//! Health check command - checks a running Lobby server.

use crate::cli::HealthArgs;
use crate::client::LobbyClient;
use crate::output::OutputFormat;

/// Run the health check command
pub async fn run(
    args: &HealthArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = LobbyClient::new(&args.server)?;

    let health = match client.health().await {
        Ok(health) => health,
        Err(e) => {
            eprintln!("unhealthy: failed to reach {}: {}", args.server.url, e);
            std::process::exit(1);
        }
    };

    if health.status != "healthy" {
        eprintln!("unhealthy: server returned status {}", health.status);
        std::process::exit(1);
    }

    match format {
        OutputFormat::Human => println!(
            "healthy: {} users registered, {} online",
            health.users, health.online
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string(&health)?),
    }
    Ok(())
}
