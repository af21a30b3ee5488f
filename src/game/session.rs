//! Game session state machine
//!
//! A session owns the secret equation, the remaining-attempts budget, the
//! game state and the append-only guess history. It is mutated only through
//! [`GameSession::submit_guess`].

use super::events::{GuessEvent, ListenerId, Listeners};
use crate::core::{Equation, EvaluationError, FormatError, GuessResult, KeyboardState};
use crate::equations::{CorpusError, EquationSource, choose_secret};
use rand::Rng;
use thiserror::Error;

/// Number of non-winning guesses a player may make
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a guess was rejected
///
/// A rejected guess never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid input format: {0}")]
    Format(#[from] FormatError),

    #[error("invalid equation: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("the game is over; start a new game to keep playing")]
    GameOver,
}

/// An accepted guess recorded in the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub equation: Equation,
    pub result: GuessResult,
}

/// Outcome of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// 1-based index of the guess in the history
    pub attempt: usize,
    pub result: GuessResult,
    pub won: bool,
}

/// One game of Numberle
#[derive(Debug)]
pub struct GameSession {
    secret: Equation,
    remaining: usize,
    state: GameState,
    history: Vec<Guess>,
    listeners: Listeners,
}

impl GameSession {
    /// Start a game with a known secret
    #[must_use]
    pub fn new(secret: Equation) -> Self {
        tracing::trace!(secret = %secret, "Secret equation chosen");

        Self {
            secret,
            remaining: MAX_ATTEMPTS,
            state: GameState::InProgress,
            history: Vec::new(),
            listeners: Listeners::default(),
        }
    }

    /// Start a game with a secret picked uniformly from `source`
    ///
    /// # Errors
    /// Returns `CorpusError` if the source cannot be loaded or is empty; no
    /// game can start without a secret.
    pub fn new_game<S, R>(source: &S, rng: &mut R) -> Result<Self, CorpusError>
    where
        S: EquationSource + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = source.load()?;
        let secret = choose_secret(&candidates, rng)?;
        tracing::debug!(candidates = candidates.len(), "New game started");
        Ok(Self::new(secret))
    }

    /// Submit a guess
    ///
    /// Malformed or incorrect equations are rejected without consuming an
    /// attempt. An accepted guess is scored, appended to the history and
    /// published to every listener. The win check runs before the
    /// attempts-exhausted check, so a winning last guess still wins.
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the game is won or lost
    /// - `GuessError::Format` if `raw` is not well-formed
    /// - `GuessError::Evaluation` if `raw` is well-formed but not true
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Equation;
    /// use numberle::game::{GameSession, GuessError, MAX_ATTEMPTS};
    ///
    /// let mut session = GameSession::new(Equation::new("12+3=15").unwrap());
    ///
    /// assert!(matches!(session.submit_guess("1+1=2"), Err(GuessError::Format(_))));
    /// assert!(matches!(session.submit_guess("1+2+3=7"), Err(GuessError::Evaluation(_))));
    /// assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
    ///
    /// let submission = session.submit_guess("12+3=15").unwrap();
    /// assert!(submission.won);
    /// assert!(session.is_over());
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<Submission, GuessError> {
        if self.state.is_over() {
            tracing::debug!(guess = raw, "Guess rejected: game over");
            return Err(GuessError::GameOver);
        }

        let guess = Equation::new(raw).inspect_err(|e| {
            tracing::debug!(guess = raw, error = %e, "Guess rejected: malformed");
        })?;
        guess.check().inspect_err(|e| {
            tracing::debug!(guess = raw, error = %e, "Guess rejected: incorrect");
        })?;

        let result = GuessResult::score(guess.text(), self.secret.text());
        self.history.push(Guess {
            equation: guess.clone(),
            result: result.clone(),
        });
        let attempt = self.history.len();

        let won = guess == self.secret;
        if won {
            self.state = GameState::Won;
        } else {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.state = GameState::Lost;
            }
        }

        tracing::debug!(
            attempt,
            guess = %guess,
            result = %result,
            remaining = self.remaining,
            "Guess accepted"
        );
        if self.state.is_over() {
            tracing::info!(attempts = attempt, won, "Game finished");
        }

        self.listeners.publish(&GuessEvent {
            attempt,
            guess,
            result: result.clone(),
        });

        Ok(Submission {
            attempt,
            result,
            won,
        })
    }

    /// Register a callback for accepted guesses
    pub fn subscribe(&mut self, listener: impl FnMut(&GuessEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a callback; returns `false` if it was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.remaining
    }

    /// The secret, for disclosure once the game is over
    #[inline]
    #[must_use]
    pub const fn target_equation(&self) -> &Equation {
        &self.secret
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Best verdict per character across the history
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_history(
            self.history
                .iter()
                .map(|guess| (guess.equation.text(), &guess.result)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    const SECRET: &str = "12+3=15";

    // Valid, non-winning guesses against SECRET
    const MISSES: [&str; MAX_ATTEMPTS] = [
        "1+2+3=6", "9-3*2=3", "8/4*3=6", "3+12=15", "1+1+1=3", "4*4-7=9",
    ];

    fn session() -> GameSession {
        GameSession::new(Equation::new(SECRET).unwrap())
    }

    #[test]
    fn new_session_is_in_progress() {
        let s = session();
        assert_eq!(s.state(), GameState::InProgress);
        assert_eq!(s.remaining_attempts(), MAX_ATTEMPTS);
        assert!(!s.is_over());
        assert!(!s.is_won());
        assert!(s.history().is_empty());
        assert_eq!(s.target_equation().text(), SECRET);
    }

    #[test]
    fn malformed_guess_is_free() {
        let mut s = session();
        assert!(matches!(
            s.submit_guess("1+1=2"),
            Err(GuessError::Format(FormatError::WrongLength(5)))
        ));
        assert!(matches!(
            s.submit_guess("abcdefg"),
            Err(GuessError::Format(FormatError::EqualsCount(0)))
        ));
        assert_eq!(s.remaining_attempts(), MAX_ATTEMPTS);
        assert!(s.history().is_empty());
        assert_eq!(s.state(), GameState::InProgress);
    }

    #[test]
    fn incorrect_guess_is_free() {
        let mut s = session();
        assert!(matches!(
            s.submit_guess("1+2+3=7"),
            Err(GuessError::Evaluation(EvaluationError::NotEqual { .. }))
        ));
        assert!(matches!(
            s.submit_guess("5/0+1=1"),
            Err(GuessError::Evaluation(EvaluationError::Expression(_)))
        ));
        assert_eq!(s.remaining_attempts(), MAX_ATTEMPTS);
        assert!(s.history().is_empty());
    }

    #[test]
    fn non_winning_guess_consumes_attempt() {
        let mut s = session();
        let submission = s.submit_guess("1+2+3=6").unwrap();

        assert!(!submission.won);
        assert_eq!(submission.attempt, 1);
        assert_eq!(submission.result, GuessResult::score("1+2+3=6", SECRET));
        assert_eq!(s.remaining_attempts(), MAX_ATTEMPTS - 1);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].equation.text(), "1+2+3=6");
    }

    #[test]
    fn exact_match_wins_immediately() {
        let mut s = session();
        s.submit_guess("1+2+3=6").unwrap();
        let submission = s.submit_guess(SECRET).unwrap();

        assert!(submission.won);
        assert!(submission.result.is_perfect());
        assert!(s.is_over());
        assert!(s.is_won());
        assert_eq!(s.state(), GameState::Won);
        // Winning does not spend an attempt
        assert_eq!(s.remaining_attempts(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn exhausting_attempts_loses() {
        let mut s = session();
        for (i, guess) in MISSES.iter().enumerate() {
            assert!(!s.is_over(), "game ended early at guess {i}");
            let submission = s.submit_guess(guess).unwrap();
            assert!(!submission.won);
        }

        assert!(s.is_over());
        assert!(!s.is_won());
        assert_eq!(s.state(), GameState::Lost);
        assert_eq!(s.remaining_attempts(), 0);
        assert_eq!(s.history().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let mut s = session();
        for guess in &MISSES[..MAX_ATTEMPTS - 1] {
            s.submit_guess(guess).unwrap();
        }
        assert_eq!(s.remaining_attempts(), 1);

        let submission = s.submit_guess(SECRET).unwrap();
        assert!(submission.won);
        assert_eq!(s.state(), GameState::Won);
        assert_eq!(s.remaining_attempts(), 1);
    }

    #[test]
    fn guesses_after_game_over_are_rejected() {
        let mut s = session();
        s.submit_guess(SECRET).unwrap();

        assert_eq!(s.submit_guess("1+2+3=6"), Err(GuessError::GameOver));
        assert_eq!(s.submit_guess("bad"), Err(GuessError::GameOver));
        assert_eq!(s.history().len(), 1);

        let mut lost = session();
        for guess in MISSES {
            lost.submit_guess(guess).unwrap();
        }
        assert_eq!(lost.submit_guess(SECRET), Err(GuessError::GameOver));
        assert_eq!(lost.history().len(), MAX_ATTEMPTS);
        assert!(!lost.is_won());
    }

    #[test]
    fn events_published_once_per_accepted_guess() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut s = session();
        let sink = Rc::clone(&events);
        s.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        s.submit_guess("1+1=2").unwrap_err();
        s.submit_guess("1+2+3=7").unwrap_err();
        s.submit_guess("1+2+3=6").unwrap();
        s.submit_guess(SECRET).unwrap();
        s.submit_guess("9-3*2=3").unwrap_err();

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].attempt, 1);
        assert_eq!(events[0].guess.text(), "1+2+3=6");
        assert_eq!(events[1].attempt, 2);
        assert!(events[1].result.is_perfect());
    }

    #[test]
    fn unsubscribed_listener_receives_nothing_more() {
        let count = Rc::new(RefCell::new(0));
        let mut s = session();
        let counter = Rc::clone(&count);
        let id = s.subscribe(move |_| *counter.borrow_mut() += 1);

        s.submit_guess("1+2+3=6").unwrap();
        assert!(s.unsubscribe(id));
        s.submit_guess("9-3*2=3").unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn late_subscriber_gets_no_replay() {
        let count = Rc::new(RefCell::new(0));
        let mut s = session();
        s.submit_guess("1+2+3=6").unwrap();

        let counter = Rc::clone(&count);
        s.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn keyboard_tracks_history() {
        let mut s = session();
        assert!(s.keyboard().is_empty());

        s.submit_guess("3+12=15").unwrap();
        let keyboard = s.keyboard();
        assert_eq!(keyboard.get('3'), Some(Verdict::Present));
        assert_eq!(keyboard.get('='), Some(Verdict::Correct));

        s.submit_guess(SECRET).unwrap();
        assert_eq!(s.keyboard().get('3'), Some(Verdict::Correct));
    }

    #[test]
    fn new_game_picks_from_source() {
        let corpus = vec![Equation::new("9-3*2=3").unwrap()];
        let mut rng = StdRng::seed_from_u64(7);
        let s = GameSession::new_game(&corpus, &mut rng).unwrap();
        assert_eq!(s.target_equation().text(), "9-3*2=3");
    }

    #[test]
    fn new_game_rejects_empty_source() {
        let corpus: Vec<Equation> = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            GameSession::new_game(&corpus, &mut rng),
            Err(CorpusError::Empty)
        ));
    }
}
