//! The syntax tree produced by the parser and consumed by the NFA builder.
//!
//! A node's `kind` fixes what it matches; an optional `postfix` quantifier
//! (`*`, `+`, `?`) can be attached to any node, mirroring the grammar's
//! `repeat := atom postfix?` production.

use crate::bitset::Bitset;

/// A resolved set of 0..255 byte values. Range expansion and `^` negation
/// are both applied by the parser before a `CharSet` is built, so the
/// builder never needs to reason about negation itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    members: Bitset,
}

impl CharSet {
    pub fn empty() -> Self {
        CharSet {
            members: Bitset::new(256),
        }
    }

    pub fn insert(&mut self, byte: u8) {
        self.members.set(byte as usize);
    }

    pub fn insert_range(&mut self, low: u8, high: u8) {
        for b in low..=high {
            self.insert(b);
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.members.test(byte as usize)
    }

    pub fn negate(&mut self) {
        let mut negated = Bitset::new(256);
        for b in 0..=255u8 {
            if !self.members.test(b as usize) {
                negated.set(b as usize);
            }
        }
        self.members = negated;
    }

    pub fn iter_members(&self) -> impl Iterator<Item = u8> + '_ {
        self.members.iter_set().map(|i| i as u8)
    }
}

/// Postfix quantifier attached to a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Postfix {
    Star,
    Plus,
    Optional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A single literal byte. The parser stores `.` as `Char(b'.')`, same
    /// as any other byte; its wildcard meaning is realized only when the
    /// NFA builder turns a node into a fragment.
    Char(u8),
    /// `[...]` or `[^...]`, already resolved to its member set.
    Class(CharSet),
    /// A sequence of nodes, each matched in order.
    Concat(Vec<Node>),
    /// A set of alternative nodes, exactly one of which matches.
    Alt(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub postfix: Option<Postfix>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            postfix: None,
        }
    }

    pub fn with_postfix(kind: NodeKind, postfix: Postfix) -> Self {
        Node {
            kind,
            postfix: Some(postfix),
        }
    }
}
