//! Server start and bounded graceful shutdown.
//!
//! # Responsibilities
//! - Bind the listener and start the serve task
//! - Track lifecycle state transitions
//! - Wait for either the listener's terminal result or a stop request
//! - Drain in-flight connections, bounded by the grace window
//!
//! # Design Decisions
//! - The serve task reports through a oneshot channel: written at most
//!   once, read at most once, so the wait point never blocks on a branch
//!   that can no longer produce a value
//! - A serve task finishing while the server is Running is always a
//!   failure; the listener has no legitimate way to stop on its own
//! - Grace-window expiry abandons in-flight connections and still exits
//!   clean

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;

/// Time allowed for in-flight connections after a stop request.
pub const GRACE_WINDOW: Duration = Duration::from_secs(5);

/// Errors that end the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener failed to acquire its address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The listener stopped while it was expected to keep running.
    #[error("listener terminated unexpectedly: {0}")]
    AbnormalTermination(String),
}

/// Lifecycle states, mutated only by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Starting,
    Running,
    ShuttingDown,
    Stopped,
    Failed,
}

impl std::fmt::Display for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ServerState::Starting => "starting",
            ServerState::Running => "running",
            ServerState::ShuttingDown => "shutting-down",
            ServerState::Stopped => "stopped",
            ServerState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Handle to a running server.
///
/// Owns the drain trigger and the single-slot result channel of the serve
/// task; both are consumed by [`await_stop`]. Dropping the handle also
/// releases the drain trigger, so an abandoned server drains instead of
/// running forever.
pub struct ServerHandle {
    local_addr: SocketAddr,
    state: ServerState,
    result_rx: oneshot::Receiver<Result<(), std::io::Error>>,
    drain_tx: Option<oneshot::Sender<()>>,
}

impl ServerHandle {
    /// Address the listener actually bound (resolves a `0` port).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ServerState {
        self.state
    }

    fn transition(&mut self, next: ServerState) {
        info!(from = %self.state, to = %next, "Lifecycle transition");
        self.state = next;
    }
}

/// Bind the listener and start serving.
///
/// Returns as soon as the listener is accepting; the serve task runs in
/// the background and reports its terminal result through the handle. A
/// bind failure is returned immediately, and nothing is retried.
pub async fn start(config: &ServerConfig, server: HttpServer) -> Result<ServerHandle, ServerError> {
    let addr = config.bind_address();
    info!(state = %ServerState::Starting, address = %addr, "Starting server");

    let listener = TcpListener::bind(&addr).await.map_err(|source| {
        error!(state = %ServerState::Failed, address = %addr, error = %source, "Bind failed");
        ServerError::Bind {
            addr: addr.clone(),
            source,
        }
    })?;
    let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
        addr: addr.clone(),
        source,
    })?;

    let (result_tx, result_rx) = oneshot::channel();
    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let result = axum::serve(listener, server.into_router())
            .with_graceful_shutdown(async move {
                // resolves on the drain trigger or on a dropped handle
                let _ = drain_rx.await;
            })
            .await;
        // the receiver may already be gone when the handle was dropped
        let _ = result_tx.send(result);
    });

    let mut handle = ServerHandle {
        local_addr,
        state: ServerState::Starting,
        result_rx,
        drain_tx: Some(drain_tx),
    };
    handle.transition(ServerState::Running);
    info!(address = %local_addr, "Listening for connections");
    Ok(handle)
}

/// Wait for the server to end, honoring the external stop signal.
///
/// The serve task finishing on its own while Running is a failure. A stop
/// request starts a drain bounded by [`GRACE_WINDOW`]; the pending serve
/// result is still consulted, so a shutdown-triggered close is not
/// mistaken for one.
pub async fn await_stop(mut handle: ServerHandle, shutdown: &Shutdown) -> Result<(), ServerError> {
    let mut signal = shutdown.subscribe();

    tokio::select! {
        result = &mut handle.result_rx => {
            handle.transition(ServerState::Failed);
            Err(abnormal(result))
        }
        _ = signal.cancelled() => {
            handle.transition(ServerState::ShuttingDown);
            info!(grace = ?GRACE_WINDOW, "Stop requested, draining connections");
            if let Some(drain_tx) = handle.drain_tx.take() {
                let _ = drain_tx.send(());
            }

            let result = match timeout(GRACE_WINDOW, &mut handle.result_rx).await {
                Ok(Ok(Ok(()))) => {
                    info!("Drain complete");
                    Ok(())
                }
                Ok(result) => Err(abnormal(result)),
                Err(_elapsed) => {
                    warn!(grace = ?GRACE_WINDOW, "Grace window elapsed, abandoning in-flight connections");
                    Ok(())
                }
            };
            handle.transition(ServerState::Stopped);
            result
        }
    }
}

fn abnormal(result: Result<Result<(), std::io::Error>, oneshot::error::RecvError>) -> ServerError {
    match result {
        Ok(Ok(())) => {
            ServerError::AbnormalTermination("listener closed without a stop request".to_string())
        }
        Ok(Err(err)) => ServerError::AbnormalTermination(err.to_string()),
        Err(_) => {
            ServerError::AbnormalTermination("serve task ended without reporting".to_string())
        }
    }
}
