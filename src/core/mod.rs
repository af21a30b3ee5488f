//! Core game logic for Numberle
//!
//! Expression evaluation, equation validation, guess scoring and the derived
//! keyboard view. Everything here is pure and independent of any front end.

mod equation;
mod expression;
mod keyboard;
mod verdict;

pub use equation::{Equation, EvaluationError, FormatError, is_correct, is_well_formed};
pub use expression::{EvalError, Operator, evaluate};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use verdict::{GuessResult, Verdict, score};
