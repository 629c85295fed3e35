//! Connection worker.
//!
//! One worker per accepted connection. It owns the read half of the stream
//! and the connection's identity state, frames lines, runs the identity
//! extractor and submits one [`AppEvent::Message`] per displayable line, in
//! read order. Nothing is shared with other workers except the dispatcher.
//!
//! The worker ends when the stream closes or fails, or when the render loop
//! is gone. There is no retry and no idle timeout.

use std::fmt;

use fanin_app::{AppEvent, EventSender};
use fanin_proto::{ConnectionIdentity, LineFramer};
use tokio::io::AsyncRead;

/// Process-unique connection handle, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Why a worker stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// Peer closed the stream or a read failed.
    StreamEnded,
    /// The render loop stopped accepting events.
    DispatcherClosed,
}

/// Summary of a finished worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    /// Connection the worker served.
    pub id: ConnectionId,
    /// Messages submitted to the dispatcher.
    pub messages: u64,
    /// Why the worker stopped.
    pub exit: WorkerExit,
}

/// Drive one connection to completion.
///
/// Generic over the stream so workers can be exercised without sockets.
/// Dropping the stream at the end closes the connection.
pub async fn run_connection<R>(id: ConnectionId, stream: R, events: EventSender) -> WorkerReport
where
    R: AsyncRead + Unpin,
{
    let mut framer = LineFramer::new(stream);
    let mut identity = ConnectionIdentity::new();
    let mut messages = 0u64;

    let exit = loop {
        let Some(line) = framer.next_line().await else {
            break WorkerExit::StreamEnded;
        };

        let Some(message) = identity.apply(line) else {
            tracing::debug!(%id, label = identity.label(), "identity announced");
            continue;
        };

        tracing::trace!(%id, text = message.text(), "line received");
        if events.submit(AppEvent::Message(message)).await.is_err() {
            break WorkerExit::DispatcherClosed;
        }
        messages += 1;
    };

    tracing::debug!(%id, messages, ?exit, "connection worker finished");
    WorkerReport { id, messages, exit }
}
