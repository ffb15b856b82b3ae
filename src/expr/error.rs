//! Error types for expression compilation and evaluation.

use thiserror::Error;

/// Compile-time failure, reported when the user submits an expression.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} (at position {position})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Character offset into the trimmed input.
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unexpected {found}, expected {expected}")]
    Unexpected {
        found: String,
        expected: &'static str,
    },
    #[error("unknown name '{0}'")]
    UnknownName(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("'{0}' is a function, call it like {0}(x)")]
    MissingCall(String),
    #[error("'{name}' takes {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: &'static str,
        found: usize,
    },
    #[error("unclosed '('")]
    UnclosedParen,
    #[error("unmatched ')'")]
    UnmatchedParen,
    #[error("expression nested too deeply (limit {0})")]
    TooDeep(usize),
}

/// Per-sample failure. The sampler drops the sample and breaks the curve there.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("math domain error in {0}")]
    Domain(&'static str),
    #[error("result out of range")]
    Overflow,
}

pub type ParseResult<T> = Result<T, ParseError>;
pub type EvalResult<T> = Result<T, EvalError>;
