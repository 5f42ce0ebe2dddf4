//! Lexer (tokenizer) for the minimal C subset
//!
//! Converts raw source text into the flat [`Token`] stream the parser
//! consumes. The stream carries no explicit EOF token; the parser treats
//! the end of the vector as end-of-stream.
//!
//! Classification is driven by a [`TokenTable`] owned by the lexer rather
//! than a process-wide lookup table, so independent lexers share no state.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::parser::token::{Token, TokenKind};

/// Lexer error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{character}' at offset {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("unterminated block comment starting at offset {position}")]
    UnterminatedComment { position: usize },
}

const KEYWORDS: &[&str] = &["int", "return", "if", "else", "for"];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "=", "==", "!=", ">", "<", ">=", "<=", "&&", "||", "!", "++",
];

const PUNCTUATORS: &[&str] = &["(", ")", "{", "}", "[", "]", ";", ","];

/// Immutable keyword/operator/punctuator classification table.
///
/// Text absent from the table classifies as [`TokenKind::Literal`] when it
/// is all digits and [`TokenKind::Identifier`] otherwise.
#[derive(Debug, Clone)]
pub struct TokenTable {
    kinds: FxHashMap<&'static str, TokenKind>,
}

impl TokenTable {
    pub fn new() -> Self {
        let mut kinds = FxHashMap::default();
        for text in KEYWORDS {
            kinds.insert(*text, TokenKind::Keyword);
        }
        for text in OPERATORS {
            kinds.insert(*text, TokenKind::Operator);
        }
        for text in PUNCTUATORS {
            kinds.insert(*text, TokenKind::Punctuator);
        }
        Self { kinds }
    }

    /// Exact-text lookup; `None` when the text is not a fixed token.
    pub fn lookup(&self, text: &str) -> Option<TokenKind> {
        self.kinds.get(text).copied()
    }

    /// Classify a piece of token text.
    pub fn classify(&self, text: &str) -> TokenKind {
        if let Some(kind) = self.lookup(text) {
            return kind;
        }
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            return TokenKind::Literal;
        }
        TokenKind::Identifier
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Character scanner producing classified tokens with source offsets.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    table: TokenTable,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            table: TokenTable::new(),
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let offset = self.position;
        let ch = self.input[self.position];

        if ch.is_ascii_digit() {
            return Ok(self.number(offset));
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            return Ok(self.word(offset));
        }

        self.symbol(offset)
    }

    /// Scan a digit run into a literal token.
    fn number(&mut self, offset: usize) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.position += 1;
        }

        Token::new(TokenKind::Literal, text, offset)
    }

    /// Scan an identifier-shaped run; the table decides keyword vs identifier.
    fn word(&mut self, offset: usize) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphanumeric() && ch != '_' {
                break;
            }
            text.push(ch);
            self.position += 1;
        }

        let kind = self.table.classify(&text);
        Token::new(kind, text, offset)
    }

    /// Longest-match scan for operators and punctuators: two-character
    /// operators win over their one-character prefixes (`==` over `=`,
    /// `++` over `+`).
    fn symbol(&mut self, offset: usize) -> Result<Token, LexError> {
        if let Some(pair) = self.pair_text() {
            if let Some(kind) = self.table.lookup(&pair) {
                self.position += 2;
                return Ok(Token::new(kind, pair, offset));
            }
        }

        let ch = self.input[self.position];
        let single = ch.to_string();

        if let Some(kind) = self.table.lookup(&single) {
            self.position += 1;
            return Ok(Token::new(kind, single, offset));
        }

        Err(LexError::UnexpectedCharacter {
            character: ch,
            position: offset,
        })
    }

    fn pair_text(&self) -> Option<String> {
        let first = *self.input.get(self.position)?;
        let second = *self.input.get(self.position + 1)?;
        let mut text = String::with_capacity(2);
        text.push(first);
        text.push(second);
        Some(text)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while let Some(ch) = self.peek() {
                if !ch.is_whitespace() {
                    break;
                }
                self.position += 1;
            }

            if self.peek() == Some('/') && self.peek_next() == Some('/') {
                while let Some(ch) = self.peek() {
                    if ch == '\n' {
                        break;
                    }
                    self.position += 1;
                }
                continue;
            }

            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                let start = self.position;
                self.position += 2;
                loop {
                    if self.is_at_end() {
                        return Err(LexError::UnterminatedComment { position: start });
                    }
                    if self.peek() == Some('*') && self.peek_next() == Some('/') {
                        self.position += 2;
                        break;
                    }
                    self.position += 1;
                }
                continue;
            }

            return Ok(());
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn classifies_words_and_symbols() {
        let tokens = Lexer::new("int x = 42;").tokenize().unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Literal,
                TokenKind::Punctuator,
            ]
        );
    }

    #[test]
    fn longest_match_for_double_operators() {
        assert_eq!(texts("i++"), ["i", "++"]);
        assert_eq!(texts("a >= b"), ["a", ">=", "b"]);
        assert_eq!(texts("a > = b"), ["a", ">", "=", "b"]);
        assert_eq!(texts("x != y && z"), ["x", "!=", "y", "&&", "z"]);
        assert_eq!(texts("!x"), ["!", "x"]);
    }

    #[test]
    fn offsets_point_at_token_starts() {
        let tokens = Lexer::new("int abc;").tokenize().unwrap();
        let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, [0, 4, 7]);
    }

    #[test]
    fn skips_comments_and_whitespace() {
        let source = "int a; // trailing\n/* block\ncomment */ int b;";
        assert_eq!(texts(source), ["int", "a", ";", "int", "b", ";"]);
    }

    #[test]
    fn no_eof_token_and_empty_input() {
        assert!(Lexer::new("").tokenize().unwrap().is_empty());
        assert!(Lexer::new("  \n\t ").tokenize().unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = Lexer::new("int a @ b;").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '@',
                position: 6
            }
        );
    }

    #[test]
    fn rejects_unterminated_block_comment() {
        let err = Lexer::new("int a; /* open").tokenize().unwrap_err();
        assert_eq!(err, LexError::UnterminatedComment { position: 7 });
    }

    #[test]
    fn table_fallback_classification() {
        let table = TokenTable::new();
        assert_eq!(table.classify("for"), TokenKind::Keyword);
        assert_eq!(table.classify("||"), TokenKind::Operator);
        assert_eq!(table.classify("123"), TokenKind::Literal);
        assert_eq!(table.classify("x1"), TokenKind::Identifier);
    }
}
