//! Keyboard view derived from guess history
//!
//! For every character guessed so far, the best verdict it has received in
//! any guess. Presentation layers use it to color a virtual keyboard.

use super::verdict::{GuessResult, Verdict};
use rustc_hash::FxHashMap;

/// Virtual keyboard layout: digits on the first row, symbols on the second
pub const KEYBOARD_ROWS: [&str; 2] = ["1234567890", "+-*/="];

/// Best verdict per character across a guess history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<char, Verdict>,
}

impl KeyboardState {
    /// Fold a history of `(guess, result)` pairs into a keyboard view
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{GuessResult, KeyboardState, Verdict};
    ///
    /// let first = GuessResult::score("1+2+3=6", "12+3=15");
    /// let second = GuessResult::score("12+3=15", "12+3=15");
    /// let keyboard = KeyboardState::from_history([
    ///     ("1+2+3=6", &first),
    ///     ("12+3=15", &second),
    /// ]);
    ///
    /// assert_eq!(keyboard.get('2'), Some(Verdict::Correct));
    /// assert_eq!(keyboard.get('6'), Some(Verdict::Absent));
    /// assert_eq!(keyboard.get('9'), None);
    /// ```
    #[must_use]
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a GuessResult)>,
    {
        let mut state = Self::default();
        for (guess, result) in history {
            state.record(guess, result);
        }
        state
    }

    fn record(&mut self, guess: &str, result: &GuessResult) {
        for (ch, &verdict) in guess.chars().zip(result.verdicts()) {
            let best = self.keys.entry(ch).or_insert(verdict);
            *best = (*best).max(verdict);
        }
    }

    /// Best verdict seen for `key`, or `None` if it was never guessed
    #[inline]
    #[must_use]
    pub fn get(&self, key: char) -> Option<Verdict> {
        self.keys.get(&key).copied()
    }

    /// Number of distinct characters guessed so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_has_no_keys() {
        let keyboard = KeyboardState::from_history(std::iter::empty());
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.get('1'), None);
    }

    #[test]
    fn best_verdict_wins() {
        let secret = "12+3=15";
        let guesses = ["3+12=15", "12+3=15"];
        let results: Vec<GuessResult> = guesses
            .iter()
            .map(|g| GuessResult::score(g, secret))
            .collect();

        let keyboard =
            KeyboardState::from_history(guesses.iter().copied().zip(results.iter()));

        // '3' was Present in the first guess, Correct in the second
        assert_eq!(keyboard.get('3'), Some(Verdict::Correct));
        assert_eq!(keyboard.get('+'), Some(Verdict::Correct));
    }

    #[test]
    fn later_worse_verdict_does_not_downgrade() {
        let secret = "12+3=15";
        let first = GuessResult::score("12+3=15", secret);
        let second = GuessResult::score("9-3*2=3", secret);

        let keyboard = KeyboardState::from_history([("12+3=15", &first), ("9-3*2=3", &second)]);

        assert_eq!(keyboard.get('='), Some(Verdict::Correct));
        assert_eq!(keyboard.get('9'), Some(Verdict::Absent));
        assert_eq!(keyboard.get('3'), Some(Verdict::Correct));
    }

    #[test]
    fn duplicate_in_one_guess_keeps_best() {
        // First '+' Present, second '+' Absent: keyboard shows Present
        let result = GuessResult::score("1+2+3=6", "10+5=15");
        let keyboard = KeyboardState::from_history([("1+2+3=6", &result)]);
        assert_eq!(keyboard.get('+'), Some(Verdict::Present));
        assert_eq!(keyboard.len(), 6);
    }

    #[test]
    fn layout_covers_alphabet() {
        let keys: String = KEYBOARD_ROWS.concat();
        assert_eq!(keys.chars().count(), 15);
        for ch in "0123456789+-*/=".chars() {
            assert!(keys.contains(ch));
        }
    }
}
