//! Recursive-descent parser over the restricted expression grammar.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | name | name '(' args ')' | '(' expr ')'
//! name    := ident | 'math' '.' ident
//! ```
//!
//! Tree height is capped at [`MAX_DEPTH`]: every `(`, call, unary sign, `^`
//! and chained binary operator counts one level. Evaluation and drop recurse
//! over the same tree, so the cap bounds them too.

use crate::expr::ast::{self, BinaryOp, Function, Node};
use crate::expr::error::{ParseError, ParseErrorKind, ParseResult};
use crate::expr::lexer::{Token, TokenKind};

/// Deepest nesting accepted by the parser.
pub const MAX_DEPTH: usize = 200;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse a complete expression. Every token must be consumed.
    pub fn parse(mut self) -> ParseResult<Node> {
        if self.peek_kind() == &TokenKind::Eof {
            return Err(ParseError::new(ParseErrorKind::Empty, 0));
        }

        let node = self.parse_expr()?;

        match self.peek_kind() {
            TokenKind::Eof => Ok(node),
            TokenKind::RParen => Err(self.error_here(ParseErrorKind::UnmatchedParen)),
            _ => Err(self.unexpected("an operator or end of input")),
        }
    }

    fn parse_expr(&mut self) -> ParseResult<Node> {
        let outer = self.depth;
        let mut lhs = self.parse_term()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            // Left-folded chains grow the tree one level per operator
            self.descend()?;
            let rhs = self.parse_term()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth = outer;
        Ok(lhs)
    }

    fn parse_term(&mut self) -> ParseResult<Node> {
        let outer = self.depth;
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Rem,
                _ => break,
            };
            self.advance();
            self.descend()?;
            let rhs = self.parse_unary()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth = outer;
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> ParseResult<Node> {
        match self.peek_kind() {
            TokenKind::Minus => {
                self.advance();
                self.descend()?;
                let inner = self.parse_unary()?;
                self.ascend();
                Ok(Node::Neg(Box::new(inner)))
            }
            TokenKind::Plus => {
                self.advance();
                self.descend()?;
                let inner = self.parse_unary()?;
                self.ascend();
                Ok(inner)
            }
            _ => self.parse_power(),
        }
    }

    /// `-x^2` is `-(x^2)` and `2^3^2` is `2^(3^2)`.
    fn parse_power(&mut self) -> ParseResult<Node> {
        let base = self.parse_primary()?;
        if self.peek_kind() == &TokenKind::Caret {
            self.advance();
            self.descend()?;
            let exponent = self.parse_unary()?;
            self.ascend();
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> ParseResult<Node> {
        match self.peek_kind().clone() {
            TokenKind::Number(value) => {
                self.advance();
                Ok(Node::Number(value))
            }
            TokenKind::LParen => {
                let open = self.advance().position;
                self.descend()?;
                let inner = self.parse_expr()?;
                self.expect_close(open)?;
                self.ascend();
                Ok(inner)
            }
            TokenKind::Ident(_) => self.parse_name(),
            TokenKind::RParen => Err(self.error_here(ParseErrorKind::UnmatchedParen)),
            _ => Err(self.unexpected("a number, 'x', a constant or a function call")),
        }
    }

    fn parse_name(&mut self) -> ParseResult<Node> {
        let start = self.pos_of_current();
        let written = self.read_qualified_name()?;
        let name = ast::unqualified(&written);

        if self.peek_kind() == &TokenKind::LParen {
            let func = Function::lookup(name)
                .ok_or_else(|| ParseError::new(ParseErrorKind::UnknownFunction(written.clone()), start))?;
            let args = self.parse_args()?;
            if !func.arity().contains(&args.len()) {
                return Err(ParseError::new(
                    ParseErrorKind::Arity {
                        name: written,
                        expected: func.arity_text(),
                        found: args.len(),
                    },
                    start,
                ));
            }
            return Ok(Node::Call { func, args });
        }

        if written == ast::VARIABLE {
            return Ok(Node::Var);
        }
        if let Some(value) = ast::constant(name) {
            return Ok(Node::Number(value));
        }
        if Function::lookup(name).is_some() {
            return Err(ParseError::new(ParseErrorKind::MissingCall(written), start));
        }
        Err(ParseError::new(ParseErrorKind::UnknownName(written), start))
    }

    /// Reads `ident` or `math.ident`, returning the name as written.
    fn read_qualified_name(&mut self) -> ParseResult<String> {
        let head = match self.peek_kind() {
            TokenKind::Ident(name) => name.clone(),
            _ => return Err(self.unexpected("a name")),
        };
        self.advance();
        if head != ast::NAMESPACE || self.peek_kind() != &TokenKind::Dot {
            return Ok(head);
        }
        self.advance();
        match self.peek_kind().clone() {
            TokenKind::Ident(member) => {
                self.advance();
                Ok(format!("{}.{}", head, member))
            }
            _ => Err(self.unexpected("a name after 'math.'")),
        }
    }

    fn parse_args(&mut self) -> ParseResult<Vec<Node>> {
        let open = self.advance().position;
        let mut args = Vec::new();
        if self.peek_kind() == &TokenKind::RParen {
            self.advance();
            return Ok(args);
        }
        self.descend()?;
        loop {
            args.push(self.parse_expr()?);
            if self.peek_kind() == &TokenKind::Comma {
                self.advance();
                continue;
            }
            self.expect_close(open)?;
            self.ascend();
            return Ok(args);
        }
    }

    fn expect_close(&mut self, open: usize) -> ParseResult<()> {
        match self.peek_kind() {
            TokenKind::RParen => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Err(ParseError::new(ParseErrorKind::UnclosedParen, open)),
            _ => Err(self.unexpected("')'")),
        }
    }

    // --- Helpers ---

    fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_here(ParseErrorKind::TooDeep(MAX_DEPTH)));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current(&self) -> &Token {
        // The lexer always terminates the stream with Eof
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn pos_of_current(&self) -> usize {
        self.current().position
    }

    fn advance(&mut self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[idx]
    }

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pos_of_current())
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        self.error_here(ParseErrorKind::Unexpected {
            found: self.peek_kind().describe(),
            expected,
        })
    }
}

fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
