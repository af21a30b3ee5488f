//! Integer expression evaluation
//!
//! Evaluates expressions made of non-negative integer literals and the binary
//! operators `+ - * /` with standard precedence, without building a tree:
//! a single left-to-right scan keeps an operand stack and an operator stack.
//!
//! - `*` and `/` bind tighter than `+` and `-`
//! - operators of equal precedence group to the left
//! - division truncates toward zero
//!
//! There is no unary minus and no parentheses.

use thiserror::Error;

/// Errors produced while evaluating an expression
///
/// `DivisionByZero` and `Overflow` are arithmetic failures of a well-shaped
/// expression; the remaining variants mean the input is not an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("operator is missing an operand")]
    MissingOperand,

    #[error("expression is empty")]
    Empty,
}

impl EvalError {
    /// Whether the expression was well-shaped but its arithmetic failed
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}

/// A binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Parse an operator symbol
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// `*` and `/`
    #[inline]
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Apply the operator with checked integer arithmetic
    ///
    /// # Errors
    /// Returns `EvalError::DivisionByZero` for a zero divisor and
    /// `EvalError::Overflow` if the result does not fit in an `i64`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };

        result.ok_or(EvalError::Overflow)
    }
}

/// Evaluate an arithmetic expression
///
/// # Algorithm
/// 1. Consecutive digits accumulate into one operand
/// 2. On an operator, reduce the stacks while the incoming operator is
///    additive or the operator on top is multiplicative, then push it
/// 3. After the scan, reduce until the operator stack is empty
///
/// # Errors
/// Returns an `EvalError` for malformed input (characters other than ASCII
/// digits and `+ - * /`, a dangling operator, empty input) and for
/// arithmetic failures (division by zero, overflow).
///
/// # Examples
/// ```
/// use numberle::core::{EvalError, evaluate};
///
/// assert_eq!(evaluate("2+3*4"), Ok(14));
/// assert_eq!(evaluate("10-2-3"), Ok(5));
/// assert_eq!(evaluate("7/0"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<i64, EvalError> {
    let mut operands: Vec<i64> = Vec::new();
    let mut operators: Vec<Operator> = Vec::new();
    let mut chars = expression.chars().enumerate().peekable();

    while let Some((position, ch)) = chars.next() {
        if let Some(digit) = ch.to_digit(10) {
            let mut value = i64::from(digit);
            while let Some(next) = chars.peek().and_then(|&(_, next)| next.to_digit(10)) {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(i64::from(next)))
                    .ok_or(EvalError::Overflow)?;
                chars.next();
            }
            operands.push(value);
        } else if let Some(incoming) = Operator::from_char(ch) {
            while let Some(&top) = operators.last() {
                if incoming.is_multiplicative() && !top.is_multiplicative() {
                    break;
                }
                operators.pop();
                reduce(&mut operands, top)?;
            }
            operators.push(incoming);
        } else {
            return Err(EvalError::UnexpectedChar {
                found: ch,
                position,
            });
        }
    }

    while let Some(operator) = operators.pop() {
        reduce(&mut operands, operator)?;
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        [] => Err(EvalError::Empty),
        _ => Err(EvalError::MissingOperand),
    }
}

/// Pop two operands, apply `operator`, push the result
fn reduce(operands: &mut Vec<i64>, operator: Operator) -> Result<(), EvalError> {
    let rhs = operands.pop().ok_or(EvalError::MissingOperand)?;
    let lhs = operands.pop().ok_or(EvalError::MissingOperand)?;
    operands.push(operator.apply(lhs, rhs)?);
    Ok(())
}
