//! HTTP client for a running Lobby server.

use std::time::Duration;

use lobby::{
    Session,
    api::{
        ErrorResponse, HealthResponse, LoginRequest, LogoutRequest, MessageResponse,
        RegisterRequest,
    },
    constants::{ROUTE_HEALTH, ROUTE_LOGIN, ROUTE_LOGOUT, ROUTE_ONLINE, ROUTE_REGISTER},
};
use reqwest::Response;

use crate::cli::ServerArgs;

pub struct LobbyClient {
    base: String,
    http: reqwest::Client,
}

impl LobbyClient {
    pub fn new(args: &ServerArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(args.timeout))
            .build()?;
        Ok(Self {
            base: args.url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base)
    }

    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<MessageResponse, Box<dyn std::error::Error>> {
        let response = self.http.post(self.url(ROUTE_REGISTER)).json(request).send().await?;
        parse(response).await
    }

    pub async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<MessageResponse, Box<dyn std::error::Error>> {
        let response = self.http.post(self.url(ROUTE_LOGIN)).json(request).send().await?;
        parse(response).await
    }

    pub async fn logout(
        &self,
        request: &LogoutRequest,
    ) -> Result<MessageResponse, Box<dyn std::error::Error>> {
        let response = self.http.post(self.url(ROUTE_LOGOUT)).json(request).send().await?;
        parse(response).await
    }

    pub async fn online(&self) -> Result<Vec<Session>, Box<dyn std::error::Error>> {
        let response = self.http.get(self.url(ROUTE_ONLINE)).send().await?;
        parse(response).await
    }

    pub async fn health(&self) -> Result<HealthResponse, Box<dyn std::error::Error>> {
        let response = self.http.get(self.url(ROUTE_HEALTH)).send().await?;
        parse(response).await
    }
}

/// Decode a success body, or turn the server's `{"error": ...}` into an error.
async fn parse<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, Box<dyn std::error::Error>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("server returned HTTP status {status}"),
    };
    Err(message.into())
}
