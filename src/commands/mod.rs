//! Command implementations

pub mod check;
pub mod simple;
pub mod verify;

pub use check::{CheckResult, check_equation};
pub use simple::{ConsoleStats, play_console, run_simple};
pub use verify::{InvalidEntry, VerifyReport, corpus_lines, verify_corpus};
