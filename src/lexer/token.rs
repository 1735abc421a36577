use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::int_serde;

/// A single token from an input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Decoded literal value
    pub lexeme: Lexeme,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: Lexeme, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            column,
        }
    }

    /// Creates a token whose kind and lexeme are both the given text
    pub fn other(text: impl Into<String>, column: usize) -> Self {
        let text = text.into();
        Token::new(TokenKind::Other(text.clone()), Lexeme::Text(text), column)
    }
}

/// All possible token kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Integer literal
    Int,
    /// Boolean literal (`true` / `false`, any case)
    Bool,
    /// Atom, a word adjacent to a colon (`:ok`, `ok:`)
    Atom,

    // Operators
    /// Fat arrow (=>)
    Arrow,
    /// Key separator, a colon followed by a space
    Colon,

    // Delimiters
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
    /// Map sigil %
    Map,
    /// Comma delimiter
    Comma,

    // Special
    /// End of input marker. Never produced by the scanner; the parser drops it
    Eof,
    /// Unrecognized input; the kind is the text itself.
    ///
    /// Covers bare words, stray characters, words that start like a boolean
    /// (`truex`) and integers with a dangling `_` separator.
    Other(String),
}

impl TokenKind {
    /// Kind for a single-character delimiter, if `c` is one
    pub fn delimiter(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            '%' => Some(TokenKind::Map),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Int => write!(f, "INT"),
            TokenKind::Bool => write!(f, "BOOL"),
            TokenKind::Atom => write!(f, "ATOM"),
            TokenKind::Arrow => write!(f, "ARROW"),
            TokenKind::Colon => write!(f, "COLON"),
            TokenKind::LeftBracket => write!(f, "LEFT_BRACKET"),
            TokenKind::RightBracket => write!(f, "RIGHT_BRACKET"),
            TokenKind::LeftBrace => write!(f, "LEFT_BRACE"),
            TokenKind::RightBrace => write!(f, "RIGHT_BRACE"),
            TokenKind::Map => write!(f, "MAP"),
            TokenKind::Comma => write!(f, "COMMA"),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Other(text) => write!(f, "{}", text),
        }
    }
}

/// Decoded literal carried by a token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lexeme {
    /// Integer value (underscores stripped), any width
    Int(#[serde(with = "int_serde")] BigInt),
    /// Boolean value
    Bool(bool),
    /// Source text
    Text(String),
}

impl Lexeme {
    /// Integer lexeme from any primitive integer
    pub fn int(value: impl Into<BigInt>) -> Self {
        Lexeme::Int(value.into())
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Lexeme::Int(n) => write!(f, "{}", n),
            Lexeme::Bool(b) => write!(f, "{}", b),
            Lexeme::Text(s) => write!(f, "{}", s),
        }
    }
}
