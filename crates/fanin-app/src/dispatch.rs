//! Event dispatcher.
//!
//! Many producers, one consumer. Connection workers and the terminal input
//! pump each hold a cloned [`EventSender`]; the render loop owns the single
//! [`EventInbox`]. Events from one sender arrive in the order they were
//! submitted. Nothing is promised about interleaving between senders.
//!
//! The channel is bounded. A full channel makes `submit` wait for the render
//! loop to drain, which slows producers but cannot stall the consumer.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::AppEvent;

/// The render loop has stopped and its inbox is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render loop is no longer receiving events")]
pub struct DispatcherClosed;

/// Create a dispatcher buffering up to `capacity` events.
///
/// A capacity of zero is raised to one.
pub fn channel(capacity: usize) -> (EventSender, EventInbox) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (EventSender { tx }, EventInbox { rx })
}

/// Producer handle. Cheap to clone; one per producer task.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSender {
    /// Submit an event, waiting for buffer space if necessary.
    pub async fn submit(&self, event: AppEvent) -> Result<(), DispatcherClosed> {
        self.tx.send(event).await.map_err(|_| DispatcherClosed)
    }

    /// Whether the render loop has stopped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Resolves once the render loop has stopped.
    pub async fn closed(&self) {
        self.tx.closed().await;
    }
}

/// Consumer end, owned by the render loop.
#[derive(Debug)]
pub struct EventInbox {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventInbox {
    /// Wait for the next event. `None` once every sender has been dropped.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Next event if one is already buffered.
    pub fn try_next(&mut self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }

    /// Stop accepting events. Buffered events can still be drained.
    pub fn close(&mut self) {
        self.rx.close();
    }
}
