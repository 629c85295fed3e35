//! Application layer for the fan-in viewer
//!
//! Pure state machine plus the concurrency plumbing that feeds it, so the
//! render loop can be driven deterministically in tests with the same code
//! that runs behind the terminal.
//!
//! # Components
//!
//! - [`App`]: render loop state machine (transcript, viewport, key bindings)
//! - [`format()`]: wraps one tagged message into a display block
//! - [`channel`]: many-producer, single-consumer event dispatcher
//! - [`Driver`]: trait for the terminal output side
//! - [`Runtime`]: the single consumer loop tying the above together

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod dispatch;
mod driver;
mod event;
mod format;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use dispatch::{DispatcherClosed, EventInbox, EventSender, channel};
pub use driver::Driver;
pub use event::{AppEvent, Scroll};
pub use format::{FormattedBlock, INDENT, Segment, StyledLine, format};
pub use input::KeyInput;
pub use runtime::Runtime;
pub use state::{Transcript, Viewport};
