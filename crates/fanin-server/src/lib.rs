//! Fan-in listener.
//!
//! Accepts any number of concurrent TCP connections and runs one
//! [`run_connection`] worker per connection. Workers push tagged messages into
//! the dispatcher handed to [`Server::run`]; the server itself holds no
//! per-connection state.
//!
//! # Components
//!
//! - [`Server`]: bound listener and accept loop
//! - [`run_connection`]: per-connection worker
//! - [`ServerConfig`]: bind address and dispatcher sizing

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod worker;

use std::net::SocketAddr;

pub use error::ServerError;
use fanin_app::EventSender;
use fanin_proto::DEFAULT_ADDR;
use tokio::net::TcpListener;
pub use worker::{ConnectionId, WorkerExit, WorkerReport, run_connection};

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "localhost:21212")
    pub bind_address: String,
    /// Events the dispatcher buffers before producers wait.
    pub event_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: DEFAULT_ADDR.to_string(), event_capacity: 1024 }
    }
}

/// Bound fan-in listener.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the listening socket.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(&config.bind_address).await.map_err(|source| {
            ServerError::Bind { address: config.bind_address.clone(), source }
        })?;

        tracing::info!("Listening on {}", listener.local_addr()?);
        Ok(Self { listener })
    }

    /// Local address the server is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the render loop stops.
    ///
    /// Every accepted connection gets its own task. Accept errors are logged
    /// and the loop keeps going.
    pub async fn run(self, events: EventSender) {
        let mut next_id = 0u64;

        loop {
            let accepted = tokio::select! {
                accepted = self.listener.accept() => accepted,
                () = events.closed() => {
                    tracing::debug!("render loop closed, listener stopping");
                    return;
                }
            };

            match accepted {
                Ok((stream, peer)) => {
                    next_id += 1;
                    let id = ConnectionId(next_id);
                    tracing::debug!(%id, %peer, "connection accepted");

                    let events = events.clone();
                    tokio::spawn(async move {
                        run_connection(id, stream, events).await;
                    });
                },
                Err(e) => {
                    tracing::warn!("Accept error: {}", e);
                },
            }
        }
    }
}
