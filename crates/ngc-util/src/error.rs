//! Error types shared across the workspace.

use thiserror::Error;

use crate::number::Number;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while parsing and evaluating G-code.
///
/// Errors are not recovered internally; they propagate to the caller of
/// the parser entry points. Each variant carries the offending fragment
/// so the rendered message can point at the problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input does not match the grammar.
    #[error("parse error at column {column}: {message}")]
    Parse {
        /// 1-based byte column within the offending line.
        column: usize,
        message: String,
    },

    /// A parameter lookup targeted a key that is not defined.
    ///
    /// The payload is the reference as written, e.g. `#5` or `#<probe>`.
    #[error("undefined parameter {0}")]
    UndefinedParameter(String),

    /// A numeric-parameter index evaluated to a number with a fractional
    /// part, e.g. `#[1.5]`.
    #[error("expected an integer parameter index, got {0}")]
    ExpectedInteger(f64),

    /// A letter/number pair is not defined by the dialect tables.
    #[error("unknown word {letter}{number}")]
    UnknownWord { letter: char, number: Number },

    /// A math operation has no real result (division by zero, `ln` of a
    /// non-positive number, inverse trig outside its domain, ...).
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}
