//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, the cursor primitives, and the
//! top-level parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, cursor primitives, and coordination
//! - `declarations`: function declarations, parameter lists, variable
//!   declarations
//! - `statements`: statement dispatch, blocks, `if`/`for`/`return`
//! - `expressions`: precedence climbing for binary operators, factors,
//!   call arguments
//!
//! Parser methods are split across multiple files using `impl Parser`
//! blocks, allowing each module to extend the Parser with related
//! functionality while maintaining access to the shared parser state.
//!
//! # Contract
//!
//! The parser owns a finite token sequence and a single forward-only
//! cursor. There is no backtracking: every rule either consumes tokens and
//! returns a node, or fails with the first [`SyntaxError`] and no partial
//! tree. Matching is driven by exact token text; the token kind is
//! consulted only to recognise identifiers and literals.

use thiserror::Error;

use crate::parser::ast::Node;
use crate::parser::token::{Token, TokenKind};

/// Parser error type: a single error kind raised at the first grammar
/// violation, carrying the offending token text, the expected text when
/// one applies, and the source offset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected token '{found}' at offset {offset}, expected '{expected}'")]
    Expected {
        expected: String,
        found: String,
        offset: usize,
    },
    #[error("unexpected token '{found}' at offset {offset}")]
    Unexpected { found: String, offset: usize },
    #[error("unexpected end of token stream at offset {offset}")]
    UnexpectedEnd { offset: usize },
}

impl SyntaxError {
    /// Text of the offending token; empty for end-of-stream.
    pub fn found(&self) -> &str {
        match self {
            SyntaxError::Expected { found, .. } | SyntaxError::Unexpected { found, .. } => found,
            SyntaxError::UnexpectedEnd { .. } => "",
        }
    }

    /// The text the grammar required at the failure point, when one applies.
    pub fn expected(&self) -> Option<&str> {
        match self {
            SyntaxError::Expected { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// Source offset of the failure.
    pub fn offset(&self) -> usize {
        match self {
            SyntaxError::Expected { offset, .. }
            | SyntaxError::Unexpected { offset, .. }
            | SyntaxError::UnexpectedEnd { offset } => *offset,
        }
    }
}

/// Recursive descent parser over a flat token stream.
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire token stream into the root statement block holding
    /// all top-level declarations and statements.
    pub fn parse_program(&mut self) -> Result<Node, SyntaxError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            // A top-level `int` opens a function declaration only when the
            // token two ahead is '(' and the next one is not ';'.
            if self.check("int")
                && self.peek_ahead(1).text != ";"
                && self.peek_ahead(2).text == "("
            {
                statements.push(self.parse_function_declaration()?);
            } else {
                statements.push(self.parse_statement()?);
            }
        }

        Ok(Node::Block { statements })
    }

    // ===== Cursor primitives =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// True iff the current token's text equals `expected`, without
    /// consuming. Always false at end of stream.
    pub(crate) fn check(&self, expected: &str) -> bool {
        !self.is_at_end() && self.tokens[self.position].text == expected
    }

    /// Current token without consuming; the empty sentinel past the end.
    pub(crate) fn peek(&self) -> Token {
        self.tokens
            .get(self.position)
            .cloned()
            .unwrap_or_else(Token::empty)
    }

    /// Lookahead at `offset` tokens past the cursor without consuming; the
    /// empty sentinel past the end.
    pub(crate) fn peek_ahead(&self, offset: usize) -> Token {
        self.tokens
            .get(self.position + offset)
            .cloned()
            .unwrap_or_else(Token::empty)
    }

    /// Return the current token and advance the cursor. At end of stream
    /// this is a safe no-op that returns the last-seen token.
    pub(crate) fn consume(&mut self) -> Token {
        if !self.is_at_end() {
            self.position += 1;
        }

        match self.position.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.clone(),
            None => Token::empty(),
        }
    }

    /// Consume the current token if its text matches `expected`, else fail
    /// with the found/expected pair.
    pub(crate) fn expect(&mut self, expected: &str) -> Result<Token, SyntaxError> {
        if self.check(expected) {
            return Ok(self.consume());
        }

        let found = self.peek();
        Err(SyntaxError::Expected {
            expected: expected.to_string(),
            found: found.text,
            offset: found.offset,
        })
    }

    /// Consume the current token if it is identifier-kind, else fail.
    pub(crate) fn expect_identifier(&mut self) -> Result<Token, SyntaxError> {
        if !self.is_at_end() && self.tokens[self.position].kind == TokenKind::Identifier {
            return Ok(self.consume());
        }

        let found = self.peek();
        Err(SyntaxError::Expected {
            expected: "identifier".to_string(),
            found: found.text,
            offset: found.offset,
        })
    }

    /// Error for a token no statement or factor rule accepts.
    pub(crate) fn unexpected(&self) -> SyntaxError {
        let found = self.peek();

        if found.is_empty() {
            SyntaxError::UnexpectedEnd {
                offset: self.end_offset(),
            }
        } else {
            SyntaxError::Unexpected {
                found: found.text,
                offset: found.offset,
            }
        }
    }

    /// Offset just past the last real token, for end-of-stream errors.
    fn end_offset(&self) -> usize {
        self.tokens
            .last()
            .map(|token| token.offset + token.text.chars().count())
            .unwrap_or(0)
    }
}
