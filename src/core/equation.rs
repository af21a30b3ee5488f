//! Numberle equation representation and validation
//!
//! An equation is well-formed when it is exactly [`Equation::LEN`] characters
//! long and contains exactly one `=`. It is correct when, in addition, the
//! left-hand side evaluates to the integer written on the right-hand side.

use super::expression::{EvalError, evaluate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a string is not a well-formed equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("equation must contain exactly one '=', found {0}")]
    EqualsCount(usize),

    #[error("equation must be exactly {len} characters, got {0}", len = Equation::LEN)]
    WrongLength(usize),
}

/// Why a well-formed equation is not mathematically correct
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("both sides of '=' must be non-empty")]
    EmptySide,

    #[error("left-hand side cannot be evaluated: {0}")]
    Expression(#[from] EvalError),

    #[error("right-hand side \"{0}\" is not an integer")]
    RightSide(String),

    #[error("left-hand side is {left}, not {right}")]
    NotEqual { left: i64, right: i64 },
}

/// A well-formed Numberle equation
///
/// Holding an `Equation` guarantees the structural invariants (length and a
/// single `=`); arithmetic truth is checked separately with
/// [`Equation::check`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    text: String,
}

impl Equation {
    /// Number of characters in every equation
    pub const LEN: usize = 7;

    /// Create a new Equation from a string
    ///
    /// # Errors
    /// Returns `FormatError` if the text does not contain exactly one `=` or
    /// is not exactly [`Equation::LEN`] characters long.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Equation, FormatError};
    ///
    /// let equation = Equation::new("12+3=15").unwrap();
    /// assert_eq!(equation.text(), "12+3=15");
    ///
    /// assert_eq!(Equation::new("1+1=2"), Err(FormatError::WrongLength(5)));
    /// assert_eq!(Equation::new("1234567"), Err(FormatError::EqualsCount(0)));
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, FormatError> {
        let text = text.into();

        let equals = text.chars().filter(|&ch| ch == '=').count();
        if equals != 1 {
            return Err(FormatError::EqualsCount(equals));
        }

        let len = text.chars().count();
        if len != Self::LEN {
            return Err(FormatError::WrongLength(len));
        }

        Ok(Self { text })
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate over the characters of the equation
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    /// The text on either side of the `=`
    #[must_use]
    pub fn sides(&self) -> (&str, &str) {
        // Exactly one '=' is guaranteed by construction
        self.text.split_once('=').unwrap_or((self.text.as_str(), ""))
    }

    /// Check that the equation is arithmetically true
    ///
    /// # Errors
    /// Returns `EvaluationError` if either side is empty, the left-hand side
    /// fails to evaluate, the right-hand side is not an integer, or the two
    /// values differ.
    pub fn check(&self) -> Result<(), EvaluationError> {
        let (left, right) = self.sides();
        if left.is_empty() || right.is_empty() {
            return Err(EvaluationError::EmptySide);
        }

        let left_value = evaluate(left)?;
        let right_value: i64 = right
            .parse()
            .map_err(|_| EvaluationError::RightSide(right.to_string()))?;

        if left_value == right_value {
            Ok(())
        } else {
            Err(EvaluationError::NotEqual {
                left: left_value,
                right: right_value,
            })
        }
    }

    /// Whether the equation is arithmetically true
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.check().is_ok()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Equation {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Equation {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Whether `input` has the shape of an equation
///
/// # Examples
/// ```
/// use numberle::core::is_well_formed;
///
/// assert!(is_well_formed("12+3=15"));
/// assert!(!is_well_formed("1+1=2"));
/// assert!(!is_well_formed("1+1=2=3"));
/// ```
#[must_use]
pub fn is_well_formed(input: &str) -> bool {
    Equation::new(input).is_ok()
}

/// Whether `input` is a well-formed, arithmetically true equation
///
/// # Examples
/// ```
/// use numberle::core::is_correct;
///
/// assert!(is_correct("1+2+3=6"));
/// assert!(!is_correct("1+2+3=7"));
/// assert!(is_correct("12+3=15"));
/// ```
#[must_use]
pub fn is_correct(input: &str) -> bool {
    Equation::new(input).is_ok_and(|equation| equation.is_correct())
}
