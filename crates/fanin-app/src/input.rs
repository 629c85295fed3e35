//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the render loop from the terminal library so key handling can
/// be driven directly in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Character pressed with Control held.
    Ctrl(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Home key.
    Home,
    /// End key.
    End,
}
