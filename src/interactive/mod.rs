//! Interactive play mode
//!
//! Terminal UI for filling in a generated crossword.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
