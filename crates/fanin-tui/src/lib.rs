//! Terminal listener for the fan-in viewer
//!
//! A thin shell over [`fanin_app::Driver`] that provides terminal-specific
//! I/O. The render loop lives in the generic [`fanin_app::Runtime`]; this
//! crate draws it and feeds terminal input into the dispatcher.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use fanin_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError, pump_events, translate};
