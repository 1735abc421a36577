use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::int_serde;

/// Parsed value tree
///
/// Serializes in the `{"%k": tag, "%v": value}` shape printed by the line
/// processor's tagged output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "%k", content = "%v", rename_all = "lowercase")]
pub enum Node {
    /// Atom name, without the leading colon
    Atom(String),
    /// Integer value, any width
    Int(#[serde(with = "int_serde")] BigInt),
    /// Boolean value
    Bool(bool),
    /// `[...]` children in source order
    List(Vec<Node>),
    /// `{...}` children in source order
    Tuple(Vec<Node>),
    /// `%...` children in source order.
    ///
    /// Keys and values sit side by side exactly as they were read; see
    /// [`Node::map_entries`] for the keyed view.
    Map(Vec<Node>),
}

/// Tag of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeTag {
    /// Atom
    Atom,
    /// Integer
    Int,
    /// Boolean
    Bool,
    /// List
    List,
    /// Tuple
    Tuple,
    /// Map
    Map,
}

impl Node {
    /// Integer node from any primitive integer
    pub fn int(value: impl Into<BigInt>) -> Self {
        Node::Int(value.into())
    }

    /// Returns the tag of this node
    pub fn tag(&self) -> NodeTag {
        match self {
            Node::Atom(_) => NodeTag::Atom,
            Node::Int(_) => NodeTag::Int,
            Node::Bool(_) => NodeTag::Bool,
            Node::List(_) => NodeTag::List,
            Node::Tuple(_) => NodeTag::Tuple,
            Node::Map(_) => NodeTag::Map,
        }
    }

    /// Keyed view of a map node.
    ///
    /// Walks the positional children pairing each atom with the next child.
    /// Separator atoms produced by `key: value` syntax (names starting with
    /// `:`) are skipped, and non-atom children in key position are ignored.
    /// Keys are unique in first-seen order; a repeated key keeps its last
    /// value. Returns `None` for anything but a map.
    pub fn map_entries(&self) -> Option<Vec<(&str, &Node)>> {
        let Node::Map(children) = self else {
            return None;
        };

        let mut entries: Vec<(&str, &Node)> = Vec::new();
        let mut rest = children.iter().filter(|child| !child.is_separator());

        while let Some(child) = rest.next() {
            let Node::Atom(key) = child else {
                continue;
            };
            let Some(value) = rest.next() else {
                break;
            };
            match entries.iter_mut().find(|(k, _)| *k == key.as_str()) {
                Some(entry) => entry.1 = value,
                None => entries.push((key.as_str(), value)),
            }
        }

        Some(entries)
    }

    fn is_separator(&self) -> bool {
        matches!(self, Node::Atom(name) if name.starts_with(':'))
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            NodeTag::Atom => "atom",
            NodeTag::Int => "int",
            NodeTag::Bool => "bool",
            NodeTag::List => "list",
            NodeTag::Tuple => "tuple",
            NodeTag::Map => "map",
        };
        write!(f, "{}", name)
    }
}

/// Renders the node back into literal syntax
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Atom(name) => write!(f, ":{}", name),
            Node::Int(n) => write!(f, "{}", n),
            Node::Bool(b) => write!(f, "{}", b),
            Node::List(items) => write_items(f, "[", items, "]"),
            Node::Tuple(items) => write_items(f, "{", items, "}"),
            Node::Map(items) => write_items(f, "%{", items, "}"),
        }
    }
}

fn write_items(f: &mut fmt::Formatter, open: &str, items: &[Node], close: &str) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
        // The scanner only accepts a boolean followed by whitespace
        if let Node::Bool(_) = item {
            write!(f, " ")?;
        }
    }
    write!(f, "{}", close)
}
