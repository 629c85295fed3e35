//! Newline framing over an async byte stream.
//!
//! [`LineFramer`] yields one decoded line per `\n`. The sequence ends on read
//! error or end of stream; once ended it stays ended. Bytes after the last
//! terminator are dropped, so a peer that disconnects mid-line contributes
//! nothing for that partial line.
//!
//! There is no line-length cap. A peer that never sends a terminator grows
//! the buffer until it disconnects.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::LINE_TERMINATOR;

/// Lazy line sequence tied to one stream.
#[derive(Debug)]
pub struct LineFramer<R> {
    reader: BufReader<R>,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: AsyncRead + Unpin> LineFramer<R> {
    /// Wrap a readable stream.
    pub fn new(stream: R) -> Self {
        Self { reader: BufReader::new(stream), buf: Vec::new(), finished: false }
    }

    /// Next complete line, without its terminator.
    ///
    /// A single trailing `\r` is stripped. Invalid UTF-8 is replaced rather
    /// than treated as a failure. Returns `None` once the stream has closed or
    /// failed.
    pub async fn next_line(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(LINE_TERMINATOR, &mut self.buf).await {
            Ok(_) if self.buf.last() == Some(&LINE_TERMINATOR) => {
                self.buf.pop();
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            },
            Ok(_) => {
                if !self.buf.is_empty() {
                    tracing::trace!(bytes = self.buf.len(), "discarding unterminated tail");
                }
                self.finish()
            },
            Err(e) => {
                tracing::debug!("stream read failed: {e}");
                self.finish()
            },
        }
    }

    /// Whether the sequence has ended.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self) -> Option<String> {
        self.finished = true;
        self.buf = Vec::new();
        None
    }
}
