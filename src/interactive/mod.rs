//! Interactive TUI interface
//!
//! Full-screen Numberle game built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
