//! Equation check command
//!
//! Validates a single equation, evaluates its left-hand side and optionally
//! scores it against a given secret.

use crate::core::{Equation, EvalError, EvaluationError, FormatError, GuessResult, evaluate};

/// Result of checking one equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    pub format: Result<(), FormatError>,
    /// `None` when the input is not well-formed
    pub left_value: Option<Result<i64, EvalError>>,
    /// `None` when the input is not well-formed
    pub evaluation: Option<Result<(), EvaluationError>>,
    /// Present when a secret was given and the input is well-formed
    pub score: Option<(Equation, GuessResult)>,
}

impl CheckResult {
    /// Whether the input would be accepted as a guess
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.format.is_ok() && matches!(self.evaluation, Some(Ok(())))
    }
}

/// Check an equation, optionally scoring it against `against`
///
/// # Errors
///
/// Returns an error if `against` is given but is not a well-formed equation.
pub fn check_equation(input: &str, against: Option<&str>) -> Result<CheckResult, String> {
    let secret = against
        .map(|text| Equation::new(text).map_err(|e| format!("Invalid secret '{text}': {e}")))
        .transpose()?;

    let equation = Equation::new(input);
    let format = equation.as_ref().map(|_| ()).map_err(|e| *e);

    let (left_value, evaluation, score) = match equation {
        Ok(equation) => {
            let left_value = evaluate(equation.sides().0);
            let evaluation = equation.check();
            let score = secret.map(|secret| {
                let result = GuessResult::score(equation.text(), secret.text());
                (secret, result)
            });
            (Some(left_value), Some(evaluation), score)
        }
        Err(_) => (None, None, None),
    };

    Ok(CheckResult {
        input: input.to_string(),
        format,
        left_value,
        evaluation,
        score,
    })
}
