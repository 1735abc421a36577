//! Lexical analysis for exdata
//!
//! Converts one line of literal data syntax into a flat list of tokens.

mod literal_scanner;
mod token;

pub use literal_scanner::{LiteralScanner, LINE_SENTINEL};
pub use token::{Lexeme, Token, TokenKind};

/// Tokenizes a single input line. Never fails.
pub fn tokenize(line: &str) -> Vec<Token> {
    let tokens = LiteralScanner::new(line).scan_tokens();
    tracing::trace!(tokens = tokens.len(), "scanned line");
    tokens
}
