//! Structural parsing for exdata
//!
//! Folds a line's tokens into tagged value trees with an explicit stack of
//! open lists, tuples and maps.

mod node;
mod structure_parser;

pub use node::{Node, NodeTag};
pub use structure_parser::StructureParser;

use crate::lexer::{tokenize, Token};

/// Parses a token sequence into the line's top-level values. Never fails.
pub fn parse(tokens: &[Token]) -> Vec<Node> {
    let nodes = StructureParser::new(tokens.to_vec()).parse();
    tracing::trace!(nodes = nodes.len(), "parsed line");
    nodes
}

/// Tokenizes and parses a single input line
pub fn read_line(line: &str) -> Vec<Node> {
    let nodes = StructureParser::new(tokenize(line)).parse();
    tracing::trace!(nodes = nodes.len(), "parsed line");
    nodes
}
