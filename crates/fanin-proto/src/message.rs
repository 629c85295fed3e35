//! Tagged messages.

/// One displayable line together with the identity its connection had
/// announced when the line was read.
///
/// Immutable once built. Ownership moves from the connection worker through
/// the dispatcher to the render loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedMessage {
    identity: String,
    text: String,
}

impl TaggedMessage {
    /// Pair an identity label with message text.
    ///
    /// The label is expected to already carry its terminator (see
    /// [`crate::LABEL_TERMINATOR`]), or be empty.
    pub fn new(identity: impl Into<String>, text: impl Into<String>) -> Self {
        Self { identity: identity.into(), text: text.into() }
    }

    /// Identity label, empty if the connection never announced one.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Raw message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Split into `(identity, text)`.
    pub fn into_parts(self) -> (String, String) {
        (self.identity, self.text)
    }
}
