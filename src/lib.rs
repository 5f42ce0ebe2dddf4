//! # Introduction
//!
//! minic compiles a minimal C-like language (a single `int` type, functions
//! with typed parameters, arithmetic/comparison/logical operators,
//! `if`/`for`/`return`, function calls, postfix increment) into a typed,
//! owned Abstract Syntax Tree.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Token stream → Parser → AST → (read-only consumers)
//! ```
//!
//! 1. [`parser::lexer`] — classifies source text into
//!    [`parser::token::Token`]s with source offsets.
//! 2. [`parser::parse`] — recursive descent with precedence climbing over
//!    the token stream; produces a root statement block or the first
//!    [`parser::parse::SyntaxError`].
//! 3. [`parser::ast`] — the closed node set; every node exclusively owns
//!    its children, and consumers traverse read-only via kind dispatch and
//!    typed fields.
//! 4. [`printer`] — renders the tree as an indented structural dump.
//!
//! Parsing is a pure, synchronous function of the token stream; concurrent
//! parses of independent streams share no state.

pub mod parser;
pub mod printer;

use thiserror::Error;

use parser::ast::Node;
use parser::lexer::{LexError, Lexer};
use parser::parse::{Parser, SyntaxError};

/// Pipeline error: the lexing or parsing stage failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Tokenize and parse `source` into the root statement block.
pub fn compile(source: &str) -> Result<Node, CompileError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;

    let mut parser = Parser::new(tokens);
    let root = parser.parse_program()?;

    Ok(root)
}
