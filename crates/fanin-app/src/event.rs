//! Render loop input events.
//!
//! Every input to [`crate::App`] arrives through the dispatcher as an
//! [`AppEvent`]. Events come from two kinds of producers:
//! - Connection workers, one [`AppEvent::Message`] per displayable line.
//! - The terminal input pump (keys, mouse wheel, size changes).

use fanin_proto::TaggedMessage;

use crate::KeyInput;

/// Viewport scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    /// One line towards the start.
    LineUp,
    /// One line towards the end.
    LineDown,
    /// Half a viewport towards the start.
    HalfPageUp,
    /// Half a viewport towards the end.
    HalfPageDown,
    /// One viewport towards the start.
    PageUp,
    /// One viewport towards the end.
    PageDown,
    /// Mouse wheel towards the start.
    WheelUp,
    /// Mouse wheel towards the end.
    WheelDown,
    /// First line.
    Top,
    /// Last line; re-attaches to the tail.
    Bottom,
}

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Line received from a connection.
    Message(TaggedMessage),

    /// Keyboard input.
    Key(KeyInput),

    /// Scroll input that did not come from a key (mouse wheel).
    Scroll(Scroll),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Empty the transcript.
    Clear,

    /// Stop the render loop.
    Quit,
}
