//! # exdata - Elixir-style literal data reader
//!
//! Reads lines written in a small subset of Elixir literal syntax (integers,
//! booleans, atoms, lists, tuples and one-level maps) and turns each line
//! into a forest of tagged values.
//!
//! ## Basic Usage
//!
//! ```rust
//! use exdata::{Node, Parser, Scanner};
//!
//! let tokens = Scanner::new("{:ok, [1, 2_000]}").scan_tokens();
//! let values = Parser::new(tokens).parse();
//!
//! assert_eq!(
//!     values,
//!     vec![Node::Tuple(vec![
//!         Node::Atom("ok".to_string()),
//!         Node::List(vec![Node::int(1), Node::int(2000)]),
//!     ])]
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Line → Scanner → Tokens → Parser → Nodes → Repl output
//! ```
//!
//! - [`Scanner`] - Tokenizes one line
//! - [`Parser`] - Folds tokens into [`Node`] trees with a stack of open structures
//! - [`Repl`] - Reads lines from any `BufRead` and writes the rendered values
//!
//! ## Lenient input
//!
//! Nothing here returns an error for malformed input. Unknown words and
//! characters become [`TokenKind::Other`] tokens which the parser drops,
//! unclosed structures are discarded at the end of the line and a closing
//! delimiter closes whatever structure is open.

pub mod config;
pub mod error;
mod int_serde;
pub mod lexer;
pub mod parser;
pub mod repl;

/// Version of the exdata crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types
pub use config::{OutputFormat, ReplConfig};
pub use error::{Error, Result};
pub use lexer::{tokenize, Lexeme, LiteralScanner, Token, TokenKind};
pub use parser::{parse, read_line, Node, NodeTag, StructureParser};
pub use repl::Repl;

/// Type alias for the literal scanner (lexer).
pub type Scanner = LiteralScanner;

/// Type alias for the structural parser.
pub type Parser = StructureParser;
