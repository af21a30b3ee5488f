//! Guess scoring
//!
//! Each character of a guess receives a verdict against the secret:
//! - Correct: same character in the same position
//! - Present: character occurs elsewhere in the secret
//! - Absent: character is not in the secret (or every occurrence is
//!   already credited to another position)

use std::fmt;

/// Per-character feedback for a guess
///
/// Ordered so that the best verdict is the greatest:
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Shorthand used when parsing and printing results
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single verdict character
    ///
    /// Accepts `C`/`c`/🟩, `P`/`p`/🟨 and `-`/`_`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' | '🟩' => Some(Self::Correct),
            'P' | 'p' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Verdicts for one guess, aligned by index with the guess characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Vec<Verdict>);

impl GuessResult {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and consume those
    ///    secret positions
    /// 2. Second pass: for every other guess position, consume the first
    ///    unconsumed secret position holding the same character and mark it
    ///    Present; with none left it is Absent
    ///
    /// Each secret character is credited to at most one guess position, so a
    /// repeated guess character is never over-counted.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{GuessResult, Verdict};
    ///
    /// let result = GuessResult::score("1+1+1=3", "12+3=15");
    /// assert_eq!(result.to_string(), "CPP--PP");
    /// assert_eq!(result.verdicts()[0], Verdict::Correct);
    /// ```
    #[must_use]
    pub fn score(guess: &str, secret: &str) -> Self {
        let guess: Vec<char> = guess.chars().collect();
        let secret: Vec<char> = secret.chars().collect();

        let mut verdicts = vec![Verdict::Absent; guess.len()];
        let mut consumed = vec![false; secret.len()];

        // First pass: exact positions
        for (i, (g, s)) in guess.iter().zip(&secret).enumerate() {
            if g == s {
                verdicts[i] = Verdict::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: first available occurrence elsewhere
        for (i, g) in guess.iter().enumerate() {
            if verdicts[i] == Verdict::Correct {
                continue;
            }

            let available = secret
                .iter()
                .zip(&consumed)
                .position(|(s, &used)| !used && s == g);

            if let Some(j) = available {
                verdicts[i] = Verdict::Present;
                consumed[j] = true;
            }
        }

        Self(verdicts)
    }

    /// Get the verdicts in guess order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Verdict::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Verdict::Present)
    }

    fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Parse a result from a string like "CP--C" or "🟩🟨⬜⬜🟩"
    ///
    /// # Examples
    /// ```
    /// use numberle::core::GuessResult;
    ///
    /// let a = GuessResult::from_str("CP-").unwrap();
    /// let b = GuessResult::from_str("🟩🟨⬜").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        s.chars()
            .map(Verdict::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Convert to an emoji string such as "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for GuessResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid result string: {s}"))
    }
}

/// Score `guess` against `secret`; see [`GuessResult::score`]
#[must_use]
pub fn score(guess: &str, secret: &str) -> GuessResult {
    GuessResult::score(guess, secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(s: &str) -> GuessResult {
        GuessResult::from_str(s).unwrap()
    }

    #[test]
    fn exact_match_is_perfect() {
        let r = score("12+3=15", "12+3=15");
        assert!(r.is_perfect());
        assert_eq!(r.count_correct(), 7);
        assert_eq!(r.count_present(), 0);
    }

    #[test]
    fn disjoint_characters_all_absent() {
        // Only the '=' is shared, and it sits at a different index
        let r = score("99-9=90", "1+2+3=6");
        assert_eq!(r, result("----P--"));
        assert_eq!(r.count_correct(), 0);
        assert_eq!(r.count_present(), 1);
    }

    #[test]
    fn misplaced_characters_are_present() {
        // 3+12=15 vs 12+3=15: only "=15" lines up
        let r = score("3+12=15", "12+3=15");
        assert_eq!(r, result("PPPPCCC"));
    }

    #[test]
    fn single_occurrence_credited_once() {
        // Secret has one '+', guess has two: only the first is credited
        let r = score("1+2+3=6", "10+5=15");
        assert_eq!(r.verdicts()[1], Verdict::Present);
        assert_eq!(r.verdicts()[3], Verdict::Absent);
        assert_eq!(r, result("CP---P-"));
    }

    #[test]
    fn correct_position_takes_priority_over_earlier_present() {
        // The second '1' matches exactly; the first must not steal it
        let r = score("1+1+1=3", "2*1+1=3");
        assert_eq!(r, result("--CCCCC"));
    }

    #[test]
    fn presence_consumes_first_available_by_index() {
        // Secret has two '1's, guess has three: the third goes uncredited
        let r = score("1+1+1=3", "12+3=15");
        assert_eq!(r, result("CPP--PP"));
    }

    #[test]
    fn repeated_digits_in_secret() {
        let r = score("11+1=12", "1+11=12");
        assert_eq!(r, result("CPPCCCC"));
    }

    #[test]
    fn scoring_is_idempotent() {
        let a = score("9-3*2=3", "3*2-3=3");
        let b = score("9-3*2=3", "3*2-3=3");
        assert_eq!(a, b);
    }

    #[test]
    fn unequal_lengths_do_not_panic() {
        let r = score("12+3=15", "15=3");
        assert_eq!(r.len(), 7);
        let r = score("1", "12+3=15");
        assert_eq!(r, result("C"));
    }

    #[test]
    fn verdict_ordering() {
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Absent);
    }

    #[test]
    fn result_from_str_valid() {
        let a = GuessResult::from_str("CP-cp_").unwrap();
        let b = GuessResult::from_str("🟩🟨⬜🟩🟨⬜").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "CP-CP-");
    }

    #[test]
    fn result_from_str_invalid() {
        assert!(GuessResult::from_str("CPX").is_none());
        assert!(GuessResult::from_str("G").is_none());
        assert!("CPX".parse::<GuessResult>().is_err());
    }

    #[test]
    fn result_to_emoji() {
        assert_eq!(result("CP-").to_emoji(), "🟩🟨⬜");
    }

    #[test]
    fn empty_result_is_not_perfect() {
        assert!(!GuessResult::from_str("").unwrap().is_perfect());
    }
}
