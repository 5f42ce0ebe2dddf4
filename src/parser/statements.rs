//! Statement parsing implementation
//!
//! This module handles parsing of all statement forms:
//!
//! - Variable declarations: `int x = 42;`
//! - Control flow: `if`/`else`, `for`
//! - `return` with an optional expression
//! - Statement blocks: `{ ... }`
//! - Function call statements: `f(1, 2);`
//! - Postfix increment statements: `i ++;`
//!
//! # Grammar
//!
//! ```text
//! statement ::= return_stmt | if_stmt | var_decl | for_stmt
//!             | block | call_stmt | post_inc_stmt
//! ```
//!
//! Dispatch is text-driven and order-sensitive: `return`, `if`, `int`
//! (variable declaration unless followed by `(`), `for`, `{`, then the two
//! identifier-led statement forms. A bare identifier expression statement
//! is a syntax error.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::parse::{Parser, SyntaxError};
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement, including its terminating `;` where the form
    /// requires one.
    pub(crate) fn parse_statement(&mut self) -> Result<Node, SyntaxError> {
        self.statement(true)
    }

    /// Parse the update clause of a `for` loop: the same statement rule,
    /// except call and post-increment statements may omit the trailing `;`
    /// directly before the closing `)`.
    fn parse_update_statement(&mut self) -> Result<Node, SyntaxError> {
        self.statement(false)
    }

    fn statement(&mut self, terminated: bool) -> Result<Node, SyntaxError> {
        if self.check("return") {
            self.consume();

            let expr = if self.check(";") {
                None
            } else {
                Some(Box::new(self.parse_logical_or()?))
            };

            self.expect(";")?;
            return Ok(Node::Return { expr });
        }

        if self.check("if") {
            return self.parse_if_statement();
        }

        // `int` opens a variable declaration unless it looks like a
        // (misplaced) function declaration.
        if self.check("int") && self.peek_ahead(1).text != "(" {
            return self.parse_variable_declaration();
        }

        if self.check("for") {
            return self.parse_for_statement();
        }

        if self.check("{") {
            return self.parse_statement_block();
        }

        let current = self.peek();

        // Function call statement: identifier directly followed by '('.
        if current.kind == TokenKind::Identifier && self.peek_ahead(1).text == "(" {
            let name = self.consume().text;
            let call = self.parse_function_call(name)?;
            self.statement_terminator(terminated)?;
            return Ok(call);
        }

        // Postfix increment statement: identifier directly followed by '++'.
        if current.kind == TokenKind::Identifier && self.peek_ahead(1).text == "++" {
            let name = self.consume().text;
            let op = self.consume().text;
            self.statement_terminator(terminated)?;
            return Ok(Node::UnaryOp {
                op,
                operand: Box::new(Node::Identifier { name }),
            });
        }

        Err(self.unexpected())
    }

    /// Require the `;` in normal statement position; in the for-update
    /// position it is optional and consumed when present.
    fn statement_terminator(&mut self, required: bool) -> Result<(), SyntaxError> {
        if required {
            self.expect(";")?;
        } else if self.check(";") {
            self.consume();
        }
        Ok(())
    }

    /// Parse a brace-delimited statement block.
    pub(crate) fn parse_statement_block(&mut self) -> Result<Node, SyntaxError> {
        self.expect("{")?;

        let mut statements = Vec::new();
        while !self.check("}") && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect("}")?;
        Ok(Node::Block { statements })
    }

    /// Parse `if (condition) statement [else statement]`.
    fn parse_if_statement(&mut self) -> Result<Node, SyntaxError> {
        self.consume(); // 'if'
        self.expect("(")?;
        let condition = Box::new(self.parse_logical_or()?);
        self.expect(")")?;

        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.check("else") {
            self.consume();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Node::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Parse `for (init condition; update) body`.
    ///
    /// The init clause runs through the general statement rule and consumes
    /// its own `;`; the condition is a bare expression followed by an
    /// explicit `;`; the update clause uses the statement rule again with a
    /// relaxed terminator. All four clauses are required.
    fn parse_for_statement(&mut self) -> Result<Node, SyntaxError> {
        self.consume(); // 'for'
        self.expect("(")?;

        let init = Box::new(self.parse_statement()?);

        let condition = Box::new(self.parse_logical_or()?);
        self.expect(";")?;

        let update = Box::new(self.parse_update_statement()?);
        self.expect(")")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Node::For {
            init,
            condition,
            update,
            body,
        })
    }
}
