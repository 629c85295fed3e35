//! Render loop state machine.
//!
//! [`App`] owns the transcript and viewport geometry. It consumes
//! [`AppEvent`]s one at a time and returns [`AppAction`]s for the runtime;
//! it performs no I/O itself.
//!
//! # States
//!
//! - `Uninitialized`: no terminal size yet. Messages are held raw because
//!   there is no width to wrap them to.
//! - `Ready`: geometry known. Messages are formatted at the current width
//!   and appended.
//!
//! The first resize moves to `Ready` and formats everything held so far.
//! Later resizes change geometry only; blocks already in the transcript keep
//! the width they were wrapped at.

use fanin_proto::TaggedMessage;

use crate::{AppAction, AppEvent, KeyInput, Scroll, StyledLine, Transcript, Viewport, format};

/// Rows taken by the header above the viewport.
pub const HEADER_HEIGHT: u16 = 3;

/// Rows taken by the footer below the viewport.
pub const FOOTER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ViewState {
    Uninitialized { pending: Vec<TaggedMessage> },
    Ready(Viewport),
}

/// Application state machine.
#[derive(Debug, Clone)]
pub struct App {
    view: ViewState,
    transcript: Transcript,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an App waiting for its first size notification.
    pub fn new() -> Self {
        Self { view: ViewState::Uninitialized { pending: Vec::new() }, transcript: Transcript::new() }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Message(message) => self.receive(message),
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Scroll(scroll) => self.scroll(scroll),
            AppEvent::Resize(cols, rows) => {
                self.resize(cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Clear => self.clear(),
            AppEvent::Quit => vec![AppAction::Quit],
        }
    }

    fn receive(&mut self, message: TaggedMessage) -> Vec<AppAction> {
        match &mut self.view {
            ViewState::Uninitialized { pending } => {
                pending.push(message);
                vec![]
            },
            ViewState::Ready(viewport) => {
                let block = format(message.identity(), message.text(), usize::from(viewport.width()));
                self.transcript.push(block);
                viewport.content_changed(self.transcript.line_count());
                vec![AppAction::Render]
            },
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        let height = rows.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);

        match &mut self.view {
            ViewState::Uninitialized { pending } => {
                let width = usize::from(cols);
                for message in std::mem::take(pending) {
                    self.transcript.push(format(message.identity(), message.text(), width));
                }
                let mut viewport = Viewport::new(cols, height);
                viewport.content_changed(self.transcript.line_count());
                tracing::debug!(cols, rows, lines = self.transcript.line_count(), "viewport ready");
                self.view = ViewState::Ready(viewport);
            },
            ViewState::Ready(viewport) => {
                viewport.resize(cols, height, self.transcript.line_count());
            },
        }
    }

    fn clear(&mut self) -> Vec<AppAction> {
        self.transcript.clear();
        match &mut self.view {
            ViewState::Uninitialized { pending } => pending.clear(),
            ViewState::Ready(viewport) => viewport.reset(),
        }
        vec![AppAction::Render]
    }

    fn scroll(&mut self, scroll: Scroll) -> Vec<AppAction> {
        match &mut self.view {
            ViewState::Uninitialized { .. } => vec![],
            ViewState::Ready(viewport) => {
                viewport.scroll(scroll, self.transcript.line_count());
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        let scroll = match key {
            KeyInput::Char('q') | KeyInput::Ctrl('c') => return vec![AppAction::Quit],
            KeyInput::Char('c') => return self.clear(),
            KeyInput::Up | KeyInput::Char('k') => Scroll::LineUp,
            KeyInput::Down | KeyInput::Char('j') => Scroll::LineDown,
            KeyInput::PageUp | KeyInput::Char('b') => Scroll::PageUp,
            KeyInput::PageDown | KeyInput::Char('f' | ' ') => Scroll::PageDown,
            KeyInput::Char('u') | KeyInput::Ctrl('u') => Scroll::HalfPageUp,
            KeyInput::Char('d') | KeyInput::Ctrl('d') => Scroll::HalfPageDown,
            KeyInput::Home | KeyInput::Char('g') => Scroll::Top,
            KeyInput::End | KeyInput::Char('G') => Scroll::Bottom,
            KeyInput::Char(_) | KeyInput::Ctrl(_) | KeyInput::Enter | KeyInput::Esc => {
                return vec![];
            },
        };
        self.scroll(scroll)
    }

    /// Whether a terminal size has been received.
    pub fn is_ready(&self) -> bool {
        matches!(self.view, ViewState::Ready(_))
    }

    /// Viewport geometry. `None` until the first size notification.
    pub fn viewport(&self) -> Option<&Viewport> {
        match &self.view {
            ViewState::Ready(viewport) => Some(viewport),
            ViewState::Uninitialized { .. } => None,
        }
    }

    /// Everything formatted so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Messages held until the first size notification.
    pub fn pending(&self) -> &[TaggedMessage] {
        match &self.view {
            ViewState::Uninitialized { pending } => pending,
            ViewState::Ready(_) => &[],
        }
    }

    /// Lines currently inside the viewport. Empty until ready.
    pub fn visible_lines(&self) -> Vec<&StyledLine> {
        let Some(viewport) = self.viewport() else {
            return Vec::new();
        };
        let range = viewport.visible_range(self.transcript.line_count());
        self.transcript.lines().skip(range.start).take(range.len()).collect()
    }

    /// Scroll position in percent, `0.0..=100.0`.
    pub fn scroll_percent(&self) -> f64 {
        self.viewport()
            .map_or(100.0, |viewport| viewport.scroll_percent(self.transcript.line_count()) * 100.0)
    }
}
