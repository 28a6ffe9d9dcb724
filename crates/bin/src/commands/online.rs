//! Online command - lists players currently logged in.

use lobby::{Clock, SystemClock};

use crate::cli::OnlineArgs;
use crate::client::LobbyClient;
use crate::output::{OutputFormat, format_table, online_json, online_rows};

/// Run the `online` command
pub async fn run(
    args: &OnlineArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = LobbyClient::new(&args.server)?;
    let sessions = client.online().await?;
    let now = SystemClock.now_millis();

    match format {
        OutputFormat::Human => {
            if sessions.is_empty() {
                println!("No other players online right now");
                return Ok(());
            }
            let rows = online_rows(&sessions, now);
            println!("{}", format_table(&["NAME", "CLASH ID", "STATUS"], &rows));
        }
        OutputFormat::Json => {
            let entries: Vec<_> = sessions.iter().map(|s| online_json(s, now)).collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
