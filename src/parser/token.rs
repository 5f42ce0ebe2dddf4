//! Token data model shared by the lexer and the parser

use std::fmt;

/// Coarse token classification.
///
/// The parser matches on token text; the kind is consulted only to
/// recognise identifiers and literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Punctuator,
}

/// A classified piece of source text with its character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// The empty sentinel returned by lookahead past the end of the
    /// stream. No real token has empty text.
    pub fn empty() -> Self {
        Self {
            kind: TokenKind::Punctuator,
            text: String::new(),
            offset: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "end of input")
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_empty_and_real_tokens_are_not() {
        assert!(Token::empty().is_empty());
        assert!(!Token::new(TokenKind::Punctuator, ";", 3).is_empty());
    }

    #[test]
    fn display_quotes_text_and_names_end_of_input() {
        assert_eq!(Token::new(TokenKind::Keyword, "int", 0).to_string(), "'int'");
        assert_eq!(Token::empty().to_string(), "end of input");
    }
}
