//! Expression module - compiles user text into a function of `x`
//!
//! Only `x`, the constants `pi`, `e`, `tau` and a fixed set of math functions
//! are reachable from user input. Anything else fails at compile time.

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;

pub use ast::{BinaryOp, Function, Node, NAMESPACE, VARIABLE};
pub use error::{EvalError, EvalResult, ParseError, ParseErrorKind, ParseResult};
pub use parser::MAX_DEPTH;

use lexer::Lexer;
use parser::Parser;
use std::fmt;
use std::str::FromStr;

/// A compiled expression in the variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Compile `source`. Surrounding whitespace is ignored and not kept.
    pub fn parse(source: &str) -> ParseResult<Self> {
        let source = source.trim();
        let tokens = Lexer::new(source).tokenize()?;
        let root = Parser::new(tokens).parse()?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Evaluate at one sample point.
    pub fn eval(&self, x: f64) -> EvalResult<f64> {
        eval::eval_node(&self.root, x)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
