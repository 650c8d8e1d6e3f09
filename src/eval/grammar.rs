//! Character grammar for calculator expressions.
//!
//! Expressions are checked against a fixed character set before any
//! parsing happens; anything outside the set is rejected up front.
//! Validated text is then rewritten into plain ASCII arithmetic.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches strings containing only grammar-safe characters.
    /// Allows: digits, `+ - * / ( ) . %`, and whitespace.
    static ref GRAMMAR_SAFE: Regex = Regex::new(
        r"^[0-9+\-*/().% \t\r\n]*$"
    ).unwrap();
}

/// Validate an expression against the accepted character grammar.
///
/// Returns the input unchanged when every character is grammar-safe,
/// `None` otherwise. Unicode operator glyphs are not grammar-safe;
/// they are only folded by [`normalize`], which runs after this check.
pub fn sanitize(expr: &str) -> Option<&str> {
    if GRAMMAR_SAFE.is_match(expr) {
        Some(expr)
    } else {
        None
    }
}

/// Rewrite an expression into plain ASCII arithmetic.
///
/// Folds the unicode multiply/divide/minus glyphs to `* / -` and
/// rewrites `%` to the literal text `/100`. Percent is division sugar
/// applied textually, not percentage-of-an-operand: `100+10%` becomes
/// `100+10/100` and evaluates to `100.1`, not `110`.
pub fn normalize(expr: &str) -> String {
    expr.replace('×', "*")
        .replace('÷', "/")
        .replace('−', "-")
        .replace('%', "/100")
}
