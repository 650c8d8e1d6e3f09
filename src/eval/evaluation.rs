//! The evaluation pipeline: validate, normalize, parse, round.

use super::error::EvalError;
use super::grammar::{normalize, sanitize};
use super::parser::parse;

/// Above this magnitude an f64 carries no fractional part, so noise
/// rounding is skipped (the scale factor would overflow anyway).
const ROUND_LIMIT: f64 = 1e15;

/// Evaluate an expression against the calculator grammar.
///
/// The expression is validated character-by-character, rewritten to
/// plain ASCII arithmetic (`%` becomes `/100`), parsed with standard
/// operator precedence, and the result rounded to 12 decimal places to
/// absorb floating-point noise. Non-finite results, division by zero
/// among them, are reported as [`EvalError::NonFinite`].
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let safe = sanitize(expr).ok_or(EvalError::ForbiddenCharacter)?;
    let value = parse(&normalize(safe))?;
    if !value.is_finite() {
        tracing::debug!(expr = %expr, "expression produced a non-finite result");
        return Err(EvalError::NonFinite);
    }
    Ok(round_noise(value))
}

/// Round to 12 decimal places so `0.1 + 0.2` reads back as `0.3`.
fn round_noise(value: f64) -> f64 {
    if value.abs() >= ROUND_LIMIT {
        return value;
    }
    ((value + f64::EPSILON) * 1e12).round() / 1e12
}

/// Format a value the way the display shows numbers: the shortest
/// string that reads back as the same f64, with no trailing `.0` on
/// whole numbers.
pub fn format_number(value: f64) -> String {
    value.to_string()
}
