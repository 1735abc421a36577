//! Property-based tests for the literal scanner and structural parser
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Scanning and parsing never panic on arbitrary input
//! 2. Digit-only integers scan to a single integer token
//! 3. Rendered lists and tuples read back to the same tree

use exdata::lexer::{tokenize, Lexeme, TokenKind};
use exdata::parser::{parse, read_line, Node};
use num_bigint::BigInt;
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the scanner
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,200}").unwrap()
}

/// Generate lines made of literal-looking fragments
fn literal_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(literal_fragment(), 0..40).prop_map(|parts| parts.join(""))
}

fn literal_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("[".to_string()),
        Just("]".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("%".to_string()),
        Just(", ".to_string()),
        Just(": ".to_string()),
        Just(":".to_string()),
        Just("=>".to_string()),
        Just(" ".to_string()),
        Just("$".to_string()),
        Just("# ".to_string()),
        Just("true".to_string()),
        Just("FALSE ".to_string()),
        Just("_".to_string()),
        (0u64..100_000).prop_map(|n| n.to_string()),
        "[a-z][a-z0-9_]{0,8}".prop_map(|s| s),
    ]
}

/// Generate simple values: ints, atoms, booleans, lists and tuples of them
fn simple_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        (0i64..1_000_000).prop_map(Node::int),
        "[a-z][a-z0-9_]{0,6}"
            .prop_filter("reads as a boolean", |s| {
                !s.starts_with("true") && !s.starts_with("false")
            })
            .prop_map(Node::Atom),
        any::<bool>().prop_map(Node::Bool),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::List),
            prop::collection::vec(inner, 0..6).prop_map(Node::Tuple),
        ]
    })
}

// =============================================================================
// TOTALITY
// =============================================================================

proptest! {
    /// The scanner should never panic on arbitrary input
    #[test]
    fn scanner_never_panics(source in arbitrary_source_string()) {
        let _ = tokenize(&source);
    }

    /// Scanning and parsing literal-looking input never panics
    #[test]
    fn parser_never_panics(source in literal_like_string()) {
        let tokens = tokenize(&source);
        let _ = parse(&tokens);
    }

    /// Unbalanced delimiters degrade instead of failing
    #[test]
    fn parser_handles_unbalanced_delimiters(
        opens in 0usize..30,
        closes in 0usize..30
    ) {
        let source = format!("{}1{}", "[".repeat(opens), "]".repeat(closes));
        let values = read_line(&source);

        if opens == 0 {
            // The bare integer plus nothing for the stray closers
            prop_assert_eq!(values, vec![Node::int(1)]);
        } else if closes < opens {
            prop_assert!(values.is_empty());
        } else {
            prop_assert_eq!(values.len(), 1);
        }
    }
}

// =============================================================================
// LITERALS
// =============================================================================

proptest! {
    /// Digit-only literals scan to one integer token with the same value
    #[test]
    fn digit_literals_scan_to_int(n in 0i64..i64::MAX) {
        let source = n.to_string();
        let tokens = tokenize(&source);

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Int);
        prop_assert_eq!(&tokens[0].lexeme, &Lexeme::int(n));
        prop_assert_eq!(parse(&tokens)[0].to_string(), source);
    }

    /// Literals of any width stay integers, never fallback tokens
    #[test]
    fn wide_digit_literals_scan_to_int(source in "[1-9][0-9]{18,60}") {
        let tokens = tokenize(&source);

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Int);
        prop_assert_eq!(tokens[0].lexeme.to_string(), source.clone());
        prop_assert_eq!(read_line(&format!("[{}]", source))[0].to_string(), format!("[{}]", source));
    }

    /// Digit groups separated by underscores read as the joined digits
    #[test]
    fn grouped_digits_scan_to_int(groups in prop::collection::vec("[0-9]{1,3}", 1..5)) {
        let source = groups.join("_");
        let digits = groups.concat();
        let tokens = tokenize(&source);

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Int);
        prop_assert_eq!(&tokens[0].lexeme, &Lexeme::Int(digits.parse::<BigInt>().unwrap()));
    }

    /// Rendering a parsed list or tuple and reading it back is stable
    #[test]
    fn literal_rendering_reads_back(node in simple_node()) {
        let rendered = node.to_string();
        let first = read_line(&rendered);
        prop_assert_eq!(&first, &vec![node]);

        let again: Vec<String> = first.iter().map(|n| n.to_string()).collect();
        prop_assert_eq!(read_line(&again.join(" ")), first);
    }
}
