//! Fan-in sender.
//!
//! Opens one connection to a listener, optionally announces an identity, then
//! forwards every line read from its input followed by a single `\n`. There
//! is no reconnection: once a write fails the sender stops.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::io;

use fanin_proto::announce;
use thiserror::Error;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    net::TcpStream,
};

/// Shown before each line of input is read.
pub const PROMPT: &str = "Text to send: ";

/// Sender errors.
#[derive(Debug, Error)]
pub enum SendError {
    /// Could not reach the listener.
    #[error("failed to connect to {address}: {source}")]
    Connect {
        /// Address that was dialled.
        address: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to the listener failed; treat as connection loss.
    #[error("connection lost: {0}")]
    Write(#[source] io::Error),

    /// Reading input or writing the prompt failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Outbound connection to a listener.
#[derive(Debug)]
pub struct Sender<W> {
    writer: W,
}

impl Sender<TcpStream> {
    /// Connect to a listener over TCP.
    pub async fn connect(address: &str) -> Result<Self, SendError> {
        let stream = TcpStream::connect(address)
            .await
            .map_err(|source| SendError::Connect { address: address.to_string(), source })?;
        tracing::debug!(peer = ?stream.peer_addr().ok(), "connected");
        Ok(Self::new(stream))
    }
}

impl<W: AsyncWrite + Unpin> Sender<W> {
    /// Wrap an already-open writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Announce `name` as this connection's identity.
    pub async fn announce(&mut self, name: &str) -> Result<(), SendError> {
        tracing::debug!(name, "announcing identity");
        self.write(announce(name).as_bytes()).await
    }

    /// Send one line. The terminator is appended here.
    pub async fn send_line(&mut self, line: &str) -> Result<(), SendError> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(fanin_proto::LINE_TERMINATOR);
        self.write(&buf).await
    }

    /// Prompt for and forward lines until `input` is exhausted.
    ///
    /// Returns the number of lines sent.
    pub async fn forward<R, P>(&mut self, mut input: R, prompt: &mut P) -> Result<u64, SendError>
    where
        R: AsyncBufRead + Unpin,
        P: AsyncWrite + Unpin,
    {
        let mut sent = 0u64;
        let mut line = String::new();

        loop {
            prompt.write_all(PROMPT.as_bytes()).await?;
            prompt.flush().await?;

            line.clear();
            if input.read_line(&mut line).await? == 0 {
                break;
            }

            let text = line.strip_suffix('\n').unwrap_or(&line);
            let text = text.strip_suffix('\r').unwrap_or(text);
            self.send_line(text).await?;
            sent += 1;
        }

        tracing::debug!(sent, "input closed");
        Ok(sent)
    }

    /// Release the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<(), SendError> {
        self.writer.write_all(bytes).await.map_err(SendError::Write)?;
        self.writer.flush().await.map_err(SendError::Write)
    }
}
