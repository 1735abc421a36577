use num_bigint::BigInt;

use super::token::{Lexeme, Token, TokenKind};

/// Line terminator sentinel, skipped like whitespace and ends comments
pub const LINE_SENTINEL: char = '$';

/// Scanner for one line of literal data syntax
///
/// Scanning is total: every input produces a token list, unrecognized
/// text degrades into [`TokenKind::Other`] tokens.
pub struct LiteralScanner {
    /// Source line as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

impl LiteralScanner {
    /// Creates a new scanner over a single input line
    pub fn new(source: &str) -> Self {
        LiteralScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens from the line and returns them as a vector
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        std::mem::take(&mut self.tokens)
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            c if c.is_whitespace() || c == LINE_SENTINEL => {}

            ',' => self.add_text_token(TokenKind::Comma),

            '#' => self.skip_line_comment(),

            '=' if self.match_char('>') => self.add_text_token(TokenKind::Arrow),

            // `key: value` separator; a colon glued to a word only marks the atom
            ':' => {
                if self.peek() == Some(' ') {
                    self.add_text_token(TokenKind::Colon);
                }
            }

            c if c.is_ascii_digit() => self.scan_integer(c),

            c if is_word_char(c) => self.scan_word(),

            c => match TokenKind::delimiter(c) {
                Some(kind) => self.add_text_token(kind),
                None => self.add_other_token(),
            },
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == LINE_SENTINEL || c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn scan_integer(&mut self, first: char) {
        let mut digits = String::from(first);
        let mut malformed = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if c == '_' {
                // Separators are only valid between two digits
                if !self.peek_next().is_some_and(|n| n.is_ascii_digit()) {
                    malformed = true;
                }
            } else {
                break;
            }
            self.advance();
        }

        let Some(value) = BigInt::parse_bytes(digits.as_bytes(), 10) else {
            self.add_other_token();
            return;
        };

        if malformed {
            tracing::debug!(
                column = self.start + 1,
                "integer `{}` has a dangling separator",
                self.lexeme_text()
            );
            self.add_token(TokenKind::Other(digits), Lexeme::Int(value));
        } else {
            self.add_token(TokenKind::Int, Lexeme::Int(value));
        }
    }

    fn scan_word(&mut self) {
        if let Some(width) = self.boolean_width() {
            self.scan_boolean(width);
            return;
        }

        let after_colon = self.start > 0 && self.source[self.start - 1] == ':';

        while self.peek().is_some_and(is_word_char) {
            self.advance();
        }

        if after_colon || self.peek() == Some(':') {
            self.add_text_token(TokenKind::Atom);
        } else {
            self.add_other_token();
        }
    }

    fn scan_boolean(&mut self, width: usize) {
        let end = self.start + width;

        match self.source.get(end) {
            // Longer word that merely starts like a boolean, e.g. `truex`
            Some(&next) if !is_terminator(next) => {
                while self.peek().is_some_and(|c| !c.is_whitespace()) {
                    self.advance();
                }
                self.add_other_token();
            }
            _ => {
                self.current = end;
                self.add_token(TokenKind::Bool, Lexeme::Bool(width == 4));
            }
        }
    }

    /// Width of the `true`/`false` literal starting at the token start, if any
    fn boolean_width(&self) -> Option<usize> {
        ["true", "false"]
            .iter()
            .find(|literal| self.matches_ignore_case(literal))
            .map(|literal| literal.len())
    }

    fn matches_ignore_case(&self, literal: &str) -> bool {
        let end = self.start + literal.len();
        end <= self.source.len()
            && self.source[self.start..end]
                .iter()
                .zip(literal.chars())
                .all(|(c, l)| c.to_ascii_lowercase() == l)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn lexeme_text(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_text_token(&mut self, kind: TokenKind) {
        let text = self.lexeme_text();
        self.add_token(kind, Lexeme::Text(text));
    }

    fn add_other_token(&mut self) {
        let token = Token::other(self.lexeme_text(), self.start + 1);
        self.tokens.push(token);
    }

    fn add_token(&mut self, kind: TokenKind, lexeme: Lexeme) {
        self.tokens.push(Token::new(kind, lexeme, self.start + 1));
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_terminator(c: char) -> bool {
    c.is_whitespace() || c == LINE_SENTINEL
}
