//! Account commands: register, login and logout against a running server.

use lobby::api::{LoginRequest, LogoutRequest, MessageResponse, RegisterRequest};

use crate::cli::{LoginArgs, LogoutArgs, RegisterArgs};
use crate::client::LobbyClient;
use crate::output::OutputFormat;

/// Run the `register` command
pub async fn register(
    args: &RegisterArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = LobbyClient::new(&args.server)?;
    let request = RegisterRequest {
        name: args.name.clone(),
        clash_id: args.clash_id.clone(),
        password: args.password.clone(),
    };
    let response = client.register(&request).await?;
    print_message(&response, format)
}

/// Run the `login` command
pub async fn login(
    args: &LoginArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = LobbyClient::new(&args.server)?;
    let request = LoginRequest {
        name: args.name.clone(),
        password: args.password.clone(),
    };
    let response = client.login(&request).await?;
    print_message(&response, format)
}

/// Run the `logout` command
pub async fn logout(
    args: &LogoutArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = LobbyClient::new(&args.server)?;
    let request = LogoutRequest {
        name: args.name.clone(),
    };
    let response = client.logout(&request).await?;
    print_message(&response, format)
}

fn print_message(
    response: &MessageResponse,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => println!("{}", response.message),
        OutputFormat::Json => println!("{}", serde_json::to_string(response)?),
    }
    Ok(())
}
