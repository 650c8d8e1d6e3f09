//! Expression evaluation for the calculator.
//!
//! This module provides functionality to:
//! - Validate expressions against a fixed character grammar
//! - Parse four-function arithmetic with a recursive-descent parser
//! - Round results to absorb floating-point noise

mod error;
mod evaluation;
mod grammar;
mod parser;

pub use error::EvalError;
pub use evaluation::{evaluate, format_number};
pub use grammar::{normalize, sanitize};
