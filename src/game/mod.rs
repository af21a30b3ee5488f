//! Game session and notifications
//!
//! Composes validation and scoring into the Numberle state machine.

mod events;
mod session;

pub use events::{GuessEvent, ListenerId};
pub use session::{GameSession, GameState, Guess, GuessError, MAX_ATTEMPTS, Submission};
