//! Expression parsing implementation
//!
//! This module handles parsing of expressions using precedence climbing:
//! one mutually-recursive rule per precedence tier, lowest first.
//!
//! # Precedence tiers (low → high)
//!
//! ```text
//! logical_or  ::= logical_and { "||" logical_and }
//! logical_and ::= comparison  { "&&" comparison }
//! comparison  ::= additive    { ("==" | "!=" | ">" | "<" | ">=" | "<=") additive }
//! additive    ::= term        { ("+" | "-") term }
//! term        ::= factor      { ("*" | "/") factor }
//! factor      ::= "!" factor | "(" logical_or ")" | literal
//!               | identifier [ "(" args ")" ]
//! ```
//!
//! Every binary tier is left-associative; unary `!` binds tighter than any
//! binary operator. Postfix `++` is a statement form only and never appears
//! inside these rules.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::parse::{Parser, SyntaxError};
use crate::parser::token::TokenKind;

impl Parser {
    /// Lowest tier and the entry point for every expression position.
    pub(crate) fn parse_logical_or(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_logical_and()?;

        while self.check("||") {
            let op = self.consume().text;
            let right = self.parse_logical_and()?;
            node = Node::BinaryOp {
                op,
                left: Some(Box::new(node)),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn parse_logical_and(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_comparison()?;

        while self.check("&&") {
            let op = self.consume().text;
            let right = self.parse_comparison()?;
            node = Node::BinaryOp {
                op,
                left: Some(Box::new(node)),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn parse_comparison(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_additive()?;

        while self.check("==")
            || self.check("!=")
            || self.check(">")
            || self.check("<")
            || self.check(">=")
            || self.check("<=")
        {
            let op = self.consume().text;
            let right = self.parse_additive()?;
            node = Node::BinaryOp {
                op,
                left: Some(Box::new(node)),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn parse_additive(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_term()?;

        while self.check("+") || self.check("-") {
            let op = self.consume().text;
            let right = self.parse_term()?;
            node = Node::BinaryOp {
                op,
                left: Some(Box::new(node)),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn parse_term(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_factor()?;

        while self.check("*") || self.check("/") {
            let op = self.consume().text;
            let right = self.parse_factor()?;
            node = Node::BinaryOp {
                op,
                left: Some(Box::new(node)),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    /// Highest tier: unary `!`, parenthesized sub-expressions (which restart
    /// at the lowest tier), literals, identifiers and calls.
    fn parse_factor(&mut self) -> Result<Node, SyntaxError> {
        if self.check("!") {
            let op = self.consume().text;
            let operand = self.parse_factor()?;
            // '!' keeps the original's shape: a binary operator node with
            // an absent left operand.
            return Ok(Node::BinaryOp {
                op,
                left: None,
                right: Box::new(operand),
            });
        }

        if self.check("(") {
            self.consume();
            let expr = self.parse_logical_or()?;
            self.expect(")")?;
            return Ok(expr);
        }

        match self.peek().kind {
            TokenKind::Literal => {
                let value = self.consume().text;
                Ok(Node::Literal { value })
            }
            TokenKind::Identifier => {
                let name = self.consume().text;
                if self.check("(") {
                    self.parse_function_call(name)
                } else {
                    Ok(Node::Identifier { name })
                }
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parse call arguments after the callee name: `( [expr {"," expr}] )`.
    pub(crate) fn parse_function_call(&mut self, name: String) -> Result<Node, SyntaxError> {
        self.expect("(")?;

        let mut args = Vec::new();
        if !self.check(")") {
            loop {
                args.push(self.parse_logical_or()?);

                if self.check(",") {
                    self.consume();
                } else {
                    break;
                }
            }
        }

        self.expect(")")?;
        Ok(Node::Call { name, args })
    }
}
