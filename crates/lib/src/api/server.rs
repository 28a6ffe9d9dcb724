//! Background HTTP server lifecycle.

use std::net::SocketAddr;

use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use super::{ServerError, router};
use crate::Result;
use crate::user::UserStore;

/// A started server: where it listens and how to stop it.
struct RunningServer {
    address: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

/// Runs the API for one [`UserStore`] on a background task.
///
/// Binding to port 0 picks a free port; [`ApiServer::address`] reports the
/// one actually bound.
pub struct ApiServer {
    store: UserStore,
    running: Option<RunningServer>,
}

impl ApiServer {
    pub fn new(store: UserStore) -> Self {
        Self {
            store,
            running: None,
        }
    }

    /// The store served by this server.
    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Bind `addr` and start serving. Returns the bound address.
    pub async fn start(&mut self, addr: &str) -> Result<SocketAddr> {
        if let Some(running) = &self.running {
            return Err(ServerError::AlreadyRunning {
                address: running.address.to_string(),
            }
            .into());
        }

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind {
                address: addr.to_string(),
                reason: e.to_string(),
            })?;
        // Resolves port 0 to the real port
        let address = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let app = router(self.store.clone());
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tracing::info!("Lobby API listening on {address}");
        self.running = Some(RunningServer {
            address,
            shutdown: shutdown_tx,
            task,
        });
        Ok(address)
    }

    /// Signal shutdown and wait for in-flight requests to finish.
    pub async fn stop(&mut self) -> Result<()> {
        let running = self.running.take().ok_or(ServerError::NotRunning)?;
        let _ = running.shutdown.send(());

        match running.task.await {
            Ok(served) => served?,
            Err(e) => {
                return Err(ServerError::Task {
                    reason: e.to_string(),
                }
                .into());
            }
        }

        tracing::info!("Lobby API on {} stopped", running.address);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Bound address, if running.
    pub fn address(&self) -> Option<SocketAddr> {
        self.running.as_ref().map(|r| r.address)
    }
}
