//! Fan-in wire protocol
//!
//! The protocol is plain UTF-8 text framed by `\n`. One payload-level
//! convention rides on top of the framing: a line that begins with
//! [`IDENTITY_MARKER`] announces the sender's display name for the rest of
//! the connection and is never shown.
//!
//! # Components
//!
//! - [`LineFramer`]: turns a byte stream into a lazy sequence of lines
//! - [`ConnectionIdentity`]: per-connection identity state and extractor
//! - [`TaggedMessage`]: identity label paired with one line of text
//!
//! Framing always runs before identity extraction. The marker is part of the
//! payload, not the transport.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod framer;
mod identity;
mod message;

pub use framer::LineFramer;
pub use identity::{ConnectionIdentity, announce};
pub use message::TaggedMessage;

/// Prefix of an identity-announcement line.
pub const IDENTITY_MARKER: &str = "::name::";

/// Appended to a non-empty identity so the label can be concatenated directly
/// with message text.
pub const LABEL_TERMINATOR: &str = ": ";

/// Line terminator byte.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Address shared by the listener and the sender when none is configured.
pub const DEFAULT_ADDR: &str = "localhost:21212";
