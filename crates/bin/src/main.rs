use clap::Parser;

mod cli;
mod client;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    let result = match &cli.command {
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Health(args) => commands::health::run(args, format).await,
        Commands::Register(args) => commands::account::register(args, format).await,
        Commands::Login(args) => commands::account::login(args, format).await,
        Commands::Logout(args) => commands::account::logout(args, format).await,
        Commands::Online(args) => commands::online::run(args, format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
