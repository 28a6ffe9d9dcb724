//! Helpers for driving a live API server with reqwest.

#![allow(dead_code)]

use lobby::{UserStore, api::ApiServer};
use reqwest::{Client, Response};
use serde_json::Value;

/// A running server plus a client pointed at it.
pub struct TestServer {
    pub server: ApiServer,
    pub base: String,
    pub client: Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn post(&self, path: &str, body: Value) -> Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn stop(mut self) {
        self.server.stop().await.expect("Failed to stop server");
    }
}

/// Start a server for `store` on a free local port.
pub async fn start_server(store: UserStore) -> TestServer {
    let mut server = ApiServer::new(store);
    let addr = server
        .start("127.0.0.1:0")
        .await
        .expect("Failed to start server");
    TestServer {
        server,
        base: format!("http://{addr}"),
        client: Client::new(),
    }
}

/// Start a server over an empty store.
pub async fn start_empty_server() -> TestServer {
    start_server(UserStore::new()).await
}

/// Status code and JSON body of a response.
pub async fn status_and_json(response: Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = response.json().await.expect("Response was not JSON");
    (status, body)
}
