//! Recursive-descent regex grammar, built on `nom` combinators.
//!
//! ```text
//! regex  := alt
//! alt    := concat ('|' concat)*
//! concat := repeat repeat*
//! repeat := atom postfix?
//! postfix:= '*' | '+' | '?'
//! atom   := class | '(' regex ')' | CHAR
//! class  := '[' '^'? class_body ']'
//! ```
//!
//! The parser is total on well-formed input and best-effort on malformed
//! input (spec.md §7): whenever the grammar above gets stuck on a byte it
//! cannot place — an unmatched `)`, a leading `|` with nothing before it —
//! that byte is folded in as a literal character and parsing resumes right
//! after it, the same way `original_source`'s `parse_atom` treats any byte
//! that isn't `[` or `(` as a literal `REG_CHAR` with no reserved-alphabet
//! check at all. A stray quantifier with nothing to bind to (`a**`, or a
//! bare `*` at the start of the pattern) is the one case spec.md §9 singles
//! out as a strict rejection, reported as [`ParseError::UnexpectedQuantifier`].

mod nomerr;
mod regex;

use crate::error::ParseError;
use crate::tree::{Node, NodeKind};
use nom::Finish;
use nomerr::PErr;

/// Parse a pattern into a syntax tree.
pub fn parse(pattern: &str) -> Result<Node, ParseError> {
    if pattern.bytes().any(|b| b == 0) {
        return Err(ParseError::ReservedCodeUnit);
    }

    let bytes = pattern.as_bytes();
    if bytes.is_empty() {
        return Err(ParseError::Incomplete);
    }

    let mut pieces = Vec::new();
    let mut rest = bytes;
    while !rest.is_empty() {
        match regex::regex(rest).finish() {
            Ok((leftover, tree)) => {
                pieces.push(tree);
                if leftover.is_empty() {
                    break;
                }
                if matches!(leftover[0], b'*' | b'+' | b'?') {
                    return Err(ParseError::UnexpectedQuantifier);
                }
                // The grammar stopped here because this byte isn't a
                // valid atom starter in this position (an unmatched `)`,
                // for instance) — fold it in as a literal and keep going.
                pieces.push(Node::new(NodeKind::Char(leftover[0])));
                rest = &leftover[1..];
            }
            Err(PErr { cause, .. }) => {
                if let Some(err) = cause {
                    return Err(err);
                }
                if matches!(rest[0], b'*' | b'+' | b'?') {
                    return Err(ParseError::UnexpectedQuantifier);
                }
                pieces.push(Node::new(NodeKind::Char(rest[0])));
                rest = &rest[1..];
            }
        }
    }

    match pieces.len() {
        0 => Err(ParseError::Incomplete),
        1 => Ok(pieces.pop().unwrap()),
        _ => Ok(Node::new(NodeKind::Concat(pieces))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_is_incomplete() {
        assert_eq!(parse(""), Err(ParseError::Incomplete));
    }

    #[test]
    fn bare_quantifier_is_rejected() {
        assert_eq!(parse("*"), Err(ParseError::UnexpectedQuantifier));
        assert_eq!(parse("a**"), Err(ParseError::UnexpectedQuantifier));
    }

    #[test]
    fn unmatched_close_paren_becomes_a_literal_character() {
        let tree = parse("a)").unwrap();
        match tree.kind {
            NodeKind::Concat(nodes) => {
                assert_eq!(nodes[0].kind, NodeKind::Char(b'a'));
                assert_eq!(nodes[1].kind, NodeKind::Char(b')'));
            }
            other => panic!("expected Concat, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_close_paren_mid_pattern_keeps_parsing_afterward() {
        let tree = parse("a)b").unwrap();
        match tree.kind {
            NodeKind::Concat(nodes) => {
                assert_eq!(nodes.len(), 3);
                assert_eq!(nodes[0].kind, NodeKind::Char(b'a'));
                assert_eq!(nodes[1].kind, NodeKind::Char(b')'));
                assert_eq!(nodes[2].kind, NodeKind::Char(b'b'));
            }
            other => panic!("expected Concat, got {other:?}"),
        }
    }

    #[test]
    fn leading_pipe_with_nothing_before_it_becomes_literal() {
        let tree = parse("|a").unwrap();
        match tree.kind {
            NodeKind::Concat(nodes) => {
                assert_eq!(nodes[0].kind, NodeKind::Char(b'|'));
                assert_eq!(nodes[1].kind, NodeKind::Char(b'a'));
            }
            other => panic!("expected Concat, got {other:?}"),
        }
    }

    #[test]
    fn nul_byte_is_rejected() {
        assert_eq!(parse("a\0b"), Err(ParseError::ReservedCodeUnit));
    }
}
