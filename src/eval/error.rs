//! Evaluation error type.

use thiserror::Error;

/// Why an expression failed to evaluate.
///
/// All variants are one failure kind as far as collaborators are
/// concerned: the engine converts any of them into the `"Error"`
/// display sentinel and never propagates them further.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression contains a character outside the accepted grammar.
    #[error("character outside the expression grammar")]
    ForbiddenCharacter,

    /// The expression is not well-formed arithmetic.
    #[error("malformed expression at offset {at}")]
    UnexpectedToken {
        /// Character offset of the first token that could not be placed.
        at: usize,
    },

    /// A numeric literal could not be read as a number.
    #[error("invalid numeric literal {literal:?}")]
    BadLiteral {
        /// The offending literal text.
        literal: String,
    },

    /// Evaluation produced NaN or an infinity (division by zero included).
    #[error("result is not a finite number")]
    NonFinite,
}
