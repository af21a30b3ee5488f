//! Numberle
//!
//! A Wordle-style puzzle where the hidden word is a 7-character arithmetic
//! equation such as `12+3=15`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use numberle::core::{Equation, score};
//! use numberle::game::GameSession;
//!
//! let secret = Equation::new("12+3=15").unwrap();
//! let mut session = GameSession::new(secret);
//!
//! let submission = session.submit_guess("1+2+3=6").unwrap();
//! println!("{}", submission.result.to_emoji());
//!
//! // Scoring on its own
//! let result = score("3+12=15", "12+3=15");
//! assert_eq!(result.to_string(), "PPPPCCC");
//! ```

// Core domain types
pub mod core;

// Game session state machine and guess events
pub mod game;

// Equation corpus
pub mod equations;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
