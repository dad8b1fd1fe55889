//! Interactive TUI interface
//!
//! Board, on-screen keyboard and suggestions panel, driven by keyboard and
//! mouse.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::{KEYBOARD_ROWS, ScreenLayout, layout, ui};
