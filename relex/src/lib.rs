//! # relex
//!
//! `relex` compiles a small regular expression dialect into an automaton
//! and scans byte strings for every non-overlapping match, leftmost and
//! longest at each position.
//!
//! ## Usage
//!
//! ```rust
//! let engine = relex::compile("[0-9]+").unwrap();
//! let matches: Vec<_> = engine.find_all(b"a42b7c").map(|m| (m.offset, m.length)).collect();
//! assert_eq!(matches, vec![(1, 2), (4, 1)]);
//! ```
//!
//! ## Pipeline
//!
//! A pattern goes through five stages, each its own module:
//!
//! 1. [`parser`] turns the pattern string into a [`tree::Node`] syntax
//!    tree, via a `nom`-based recursive-descent grammar.
//! 2. [`nfa`] builds a Thompson-construction NFA from that tree.
//! 3. [`dfa`] determinizes the NFA into a DFA via subset construction.
//! 4. [`dfa::compress`] partitions the 256-byte alphabet into equivalence
//!    classes and rewrites the DFA's transition table in terms of them.
//! 5. [`engine`] drives the compressed table (or, for comparison, the NFA
//!    directly) over an input buffer to produce matches.
//!
//! ## Syntax
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
//! `.` matches any single byte; there is no escape syntax, so every other
//! byte (including `\`) stands for itself. There are no capture groups,
//! anchors, or counted repetition (`{m,n}`) — see [`error`] for what
//! happens when a pattern can't be compiled.

pub mod bitset;
pub mod dfa;
pub mod engine;
pub mod error;
pub mod nfa;
pub mod parser;
pub mod tree;

pub use engine::{compile, Engine, Match};
