//! Render loop side-effects.
//!
//! [`AppAction`] is what the [`crate::App`] state machine asks the runtime to
//! do after handling an event.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the terminal from current state.
    Render,

    /// Stop the render loop.
    Quit,
}
