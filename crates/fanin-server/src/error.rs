//! Listener error types.

use std::io;

use thiserror::Error;

/// Errors that can occur in the listener.
///
/// Only startup failures are surfaced. Failures on an individual connection
/// end that connection's worker and are logged, never returned.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not bind the listening socket.
    ///
    /// Fatal at startup: the process reports it and exits non-zero.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address that was requested.
        address: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Listening socket failed outside of a single connection.
    #[error("listener error: {0}")]
    Listener(#[from] io::Error),
}
