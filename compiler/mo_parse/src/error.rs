//! Parse error types.
//!
//! Malformed input is rejected here; the formatter downstream never sees
//! it and has no recovery path of its own.

use mo_ir::Span;

/// Parser failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token `{found}` at {span}, expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
}

pub type PResult<T> = Result<T, ParseError>;
