//! Minimal C subset parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: tokenization (source text → tokens)
//! - [`token`]: the token data model shared by lexer and parser
//! - [`parse`]: parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Subset
//!
//! - Types: `int` only
//! - Statements: variable declarations, `if`/`else`, `for`, `return`,
//!   blocks, function call statements, postfix increment statements
//! - Expressions: arithmetic, comparison and logical operators, unary `!`,
//!   parenthesized sub-expressions, function calls
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for
//! binary operators. Matching is driven by token text over a flat stream
//! with a single forward-only cursor; there is no backtracking and the
//! first grammar violation aborts the parse.

pub mod ast;
pub mod lexer;
pub mod parse;
pub mod token;

mod declarations;
mod expressions;
mod statements;
