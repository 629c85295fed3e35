//! Terminal driver and input pump.
//!
//! [`TerminalDriver`] implements [`Driver`] with ratatui over crossterm.
//! Input runs separately: [`pump_events`] reads the crossterm event stream
//! and submits key, mouse wheel and resize events into the dispatcher, where
//! they queue up with the network messages.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseEventKind,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fanin_app::{App, AppEvent, Driver, EventSender, KeyInput, Scroll};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the terminal for its lifetime: raw mode, alternate screen and mouse
/// capture are switched on in [`TerminalDriver::new`] and restored on
/// [`Driver::stop`] or drop, whichever comes first.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalDriver {
    /// Take over the terminal.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, active: true })
    }

    fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = stdout().execute(DisableMouseCapture);
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Convert crossterm `KeyEvent` to `KeyInput`.
fn convert_key(key: KeyEvent) -> Option<KeyInput> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyInput::Ctrl(c))
        },
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::PageUp => Some(KeyInput::PageUp),
        KeyCode::PageDown => Some(KeyInput::PageDown),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

/// Map a terminal event onto a render loop event.
///
/// Key releases and repeats, focus changes, pastes and mouse events other
/// than the wheel are dropped.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => convert_key(key).map(AppEvent::Key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(AppEvent::Scroll(Scroll::WheelUp)),
            MouseEventKind::ScrollDown => Some(AppEvent::Scroll(Scroll::WheelDown)),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}

/// Feed terminal input into the dispatcher.
///
/// Submits the current terminal size first so the render loop can leave its
/// uninitialized state without waiting for the user to resize. Returns when
/// the render loop stops or the event stream ends.
///
/// # Errors
///
/// Returns an error if the terminal size or an input event cannot be read.
pub async fn pump_events(events: EventSender) -> Result<(), TerminalError> {
    let (cols, rows) = terminal::size()?;
    if events.submit(AppEvent::Resize(cols, rows)).await.is_err() {
        return Ok(());
    }

    let mut stream = EventStream::new();
    while let Some(event) = stream.next().await {
        let Some(event) = translate(event?) else {
            continue;
        };
        if events.submit(event).await.is_err() {
            break;
        }
    }
    Ok(())
}
