//! Driver trait for abstracting terminal output.
//!
//! The [`Driver`] trait decouples the render loop from the terminal. The
//! production driver draws with ratatui; tests substitute a recorder. Input
//! does not flow through the driver: it reaches the loop through the
//! dispatcher like every other event.

use crate::App;

/// Output side of the render loop.
///
/// # Implementations
///
/// - **TUI**: ratatui over crossterm, alternate screen
/// - **Tests**: records what would have been drawn
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Draw the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release output resources. Called once when the loop ends.
    fn stop(&mut self);
}
