//! Identity handshake carried inside the line stream.
//!
//! A line that begins with [`IDENTITY_MARKER`] replaces the connection's
//! identity and produces no message. Every other line is tagged with whatever
//! identity was current when it was read. Announcements may repeat at any
//! point; the last one wins and only affects later lines on the same
//! connection.

use crate::{IDENTITY_MARKER, LABEL_TERMINATOR, TaggedMessage};

/// Identity state for one connection.
///
/// Owned and mutated only by the worker reading that connection, so it needs
/// no synchronisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionIdentity {
    /// Current label including [`LABEL_TERMINATOR`], or empty.
    label: String,
}

impl ConnectionIdentity {
    /// Fresh state with no identity announced.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current label, empty if none has been announced.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run one decoded line through the extractor.
    ///
    /// Announcement lines update the label and return `None`. A marker
    /// followed only by whitespace resets the label to empty. Any other line
    /// is returned unchanged, tagged with the current label.
    pub fn apply(&mut self, line: String) -> Option<TaggedMessage> {
        match line.strip_prefix(IDENTITY_MARKER) {
            Some(rest) => {
                let name = rest.trim();
                self.label = if name.is_empty() {
                    String::new()
                } else {
                    format!("{name}{LABEL_TERMINATOR}")
                };
                None
            },
            None => Some(TaggedMessage::new(self.label.clone(), line)),
        }
    }
}

/// Announcement line for `name`, including the line terminator.
pub fn announce(name: &str) -> String {
    format!("{IDENTITY_MARKER}{name}\n")
}
