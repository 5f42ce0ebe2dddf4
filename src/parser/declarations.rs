//! Declaration parsing implementation
//!
//! This module handles the two declaration forms of the language:
//!
//! - Function declarations: `int name(int a, int b) { ... }`
//! - Variable declarations: `int name [= expr];`
//!
//! # Grammar
//!
//! ```text
//! function_decl ::= "int" identifier "(" [params] ")" block
//! params        ::= "int" identifier { "," "int" identifier }
//! var_decl      ::= "int" identifier [ "=" expr ] ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{Node, Param};
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a function declaration with its body block.
    pub(crate) fn parse_function_declaration(&mut self) -> Result<Node, SyntaxError> {
        let return_type = self.expect("int")?.text;
        let name = self.expect_identifier()?.text;

        self.expect("(")?;
        let params = self.parse_parameters()?;
        self.expect(")")?;

        let body = self.parse_statement_block()?;

        Ok(Node::FunctionDef {
            return_type,
            name,
            params,
            body: Box::new(body),
        })
    }

    /// Parse a comma-separated parameter list; empty when the next token is
    /// not a type keyword.
    fn parse_parameters(&mut self) -> Result<Vec<Param>, SyntaxError> {
        let mut params = Vec::new();

        if self.check("int") {
            let type_name = self.consume().text;
            let name = self.expect_identifier()?.text;
            params.push(Param { type_name, name });

            while self.check(",") {
                self.consume();

                if !self.check("int") {
                    let found = self.peek();
                    return Err(SyntaxError::Expected {
                        expected: "int".to_string(),
                        found: found.text,
                        offset: found.offset,
                    });
                }

                let type_name = self.consume().text;
                let name = self.expect_identifier()?.text;
                params.push(Param { type_name, name });
            }
        }

        Ok(params)
    }

    /// Parse a variable declaration, including its terminating `;`.
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<Node, SyntaxError> {
        let type_name = self.expect("int")?.text;
        let name = self.expect_identifier()?.text;

        let init = if self.check("=") {
            self.consume();
            Some(Box::new(self.parse_logical_or()?))
        } else {
            None
        };

        self.expect(";")?;

        Ok(Node::VarDecl {
            type_name,
            name,
            init,
        })
    }
}
