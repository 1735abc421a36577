use super::node::Node;
use crate::lexer::{Lexeme, Token, TokenKind};

/// A list, tuple or map still waiting for its closing delimiter
#[derive(Debug)]
enum Frame {
    List(Vec<Node>),
    Tuple(Vec<Node>),
    Map(Vec<Node>),
}

impl Frame {
    fn push(&mut self, node: Node) {
        match self {
            Frame::List(items) | Frame::Tuple(items) | Frame::Map(items) => items.push(node),
        }
    }

    fn into_node(self) -> Node {
        match self {
            Frame::List(items) => Node::List(items),
            Frame::Tuple(items) => Node::Tuple(items),
            Frame::Map(items) => Node::Map(items),
        }
    }
}

/// Single-pass, stack-based parser from tokens to value trees
///
/// Parsing is total. Closing delimiters are not checked against their
/// openers, unknown tokens are dropped and structures left open at the end
/// of the input are discarded.
pub struct StructureParser {
    tokens: Vec<Token>,
    current: usize,
    stack: Vec<Frame>,
    output: Vec<Node>,
}

impl StructureParser {
    /// Creates a new parser over one line's tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        StructureParser {
            tokens,
            current: 0,
            stack: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Parses the tokens into the top-level values of the line
    pub fn parse(&mut self) -> Vec<Node> {
        while self.current < self.tokens.len() {
            self.parse_token();
            self.current += 1;
        }

        if !self.stack.is_empty() {
            tracing::debug!(frames = self.stack.len(), "discarding unclosed structures");
            self.stack.clear();
        }

        std::mem::take(&mut self.output)
    }

    fn parse_token(&mut self) {
        let token = self.tokens[self.current].clone();

        match (&token.kind, &token.lexeme) {
            (TokenKind::LeftBrace, _) => self.stack.push(Frame::Tuple(Vec::new())),
            (TokenKind::LeftBracket, _) => self.stack.push(Frame::List(Vec::new())),
            (TokenKind::Map, _) => self.stack.push(Frame::Map(Vec::new())),

            (TokenKind::RightBrace | TokenKind::RightBracket, _) => self.close_frame(),

            (TokenKind::Comma, _) => {}

            (TokenKind::Atom, lexeme) => {
                let name = lexeme.to_string();
                self.emit(Node::Atom(name));
            }
            (TokenKind::Int, Lexeme::Int(n)) => {
                let n = n.clone();
                self.emit(Node::Int(n));
            }
            (TokenKind::Bool, Lexeme::Bool(b)) => {
                let b = *b;
                self.emit(Node::Bool(b));
            }

            // `key: value` keeps a marker atom built from the token after the colon
            (TokenKind::Colon, _) => {
                let next = self
                    .tokens
                    .get(self.current + 1)
                    .map(|t| t.lexeme.to_string())
                    .unwrap_or_default();
                self.emit(Node::Atom(format!(":{}", next)));
            }

            (kind, _) => {
                tracing::debug!(column = token.column, "dropping token {}", kind);
            }
        }
    }

    fn close_frame(&mut self) {
        match self.stack.pop() {
            Some(frame) => {
                let node = frame.into_node();
                tracing::trace!(tag = %node.tag(), depth = self.stack.len(), "closed structure");
                self.emit(node);
            }
            None => {
                tracing::debug!(
                    column = self.tokens[self.current].column,
                    "ignoring unmatched closing delimiter"
                );
            }
        }
    }

    /// Appends a node to the innermost open structure, or to the output
    fn emit(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(frame) => frame.push(node),
            None => self.output.push(node),
        }
    }
}
