//! The public compile/match surface.

use crate::dfa::compress::{compress, longest_match_at as dfa_table_match, CompressedTable};
use crate::dfa::Dfa;
use crate::error::ParseError;
use crate::nfa::eval::longest_match_at as nfa_match;
use crate::nfa::Nfa;
use crate::parser;

/// A single non-overlapping match: `input[offset..offset + length]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub offset: usize,
    pub length: usize,
}

/// A compiled pattern, holding both representations of the automaton so
/// callers (and this crate's own benchmarks) can drive matching through
/// either one.
#[derive(Debug, Clone)]
pub struct Engine {
    nfa: Nfa,
    table: CompressedTable,
}

impl Engine {
    /// Compiles a pattern through the full parser → NFA → DFA →
    /// compressed-table pipeline.
    pub fn compile(pattern: &str) -> Result<Engine, ParseError> {
        let tree = parser::parse(pattern)?;
        let nfa = Nfa::compile(&tree);
        let dfa = Dfa::from_nfa(&nfa);
        let table = compress(&dfa);
        Ok(Engine { nfa, table })
    }

    /// Scans `input` left to right for every non-overlapping match,
    /// driven by the compressed DFA table.
    pub fn find_all<'a>(&'a self, input: &'a [u8]) -> impl Iterator<Item = Match> + 'a {
        AnywhereScanner {
            input,
            cursor: 0,
            step: move |at| dfa_table_match(&self.table, input, at),
        }
    }

    /// Same as [`Engine::find_all`] but driven by the NFA simulator
    /// directly, bypassing the DFA entirely. Exists so tests and
    /// benchmarks can compare the two representations against each other.
    pub fn find_all_nfa<'a>(&'a self, input: &'a [u8]) -> impl Iterator<Item = Match> + 'a {
        AnywhereScanner {
            input,
            cursor: 0,
            step: move |at| nfa_match(&self.nfa, input, at),
        }
    }

    /// Whether the pattern matches `input` in its entirety (anchored at
    /// both ends), independent of the anywhere-scanning `find_all`.
    pub fn is_match_entire(&self, input: &[u8]) -> bool {
        dfa_table_match(&self.table, input, 0) == Some(input.len())
    }

    /// No-op beyond what `Drop` already does; kept on the public surface
    /// so the interface reads the same as a caller coming from a
    /// manual-memory-management background would expect.
    pub fn release(self) {}
}

/// Compiles a pattern. Shorthand for [`Engine::compile`].
pub fn compile(pattern: &str) -> Result<Engine, ParseError> {
    Engine::compile(pattern)
}

/// Leftmost, non-overlapping, longest-match scan. A zero-length match is
/// never yielded, but the cursor still advances by one byte past it so
/// the scan always terminates.
struct AnywhereScanner<'a, F: Fn(usize) -> Option<usize>> {
    input: &'a [u8],
    cursor: usize,
    step: F,
}

impl<'a, F: Fn(usize) -> Option<usize>> Iterator for AnywhereScanner<'a, F> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while self.cursor < self.input.len() {
            match (self.step)(self.cursor) {
                Some(len) if len > 0 => {
                    let m = Match {
                        offset: self.cursor,
                        length: len,
                    };
                    self.cursor += len;
                    return Some(m);
                }
                _ => self.cursor += 1,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, input: &str) -> Vec<(usize, usize)> {
        let engine = Engine::compile(pattern).unwrap();
        engine
            .find_all(input.as_bytes())
            .map(|m| (m.offset, m.length))
            .collect()
    }

    #[test]
    fn literal_scan_finds_every_occurrence() {
        assert_eq!(matches("a", "banana"), vec![(1, 1), (3, 1), (5, 1)]);
    }

    #[test]
    fn star_suppresses_zero_length_matches_between_runs() {
        assert_eq!(matches("a*", "aaabaa"), vec![(0, 3), (4, 2)]);
    }

    #[test]
    fn class_plus_scan() {
        assert_eq!(matches("[0-9]+", "a42b7c"), vec![(1, 2), (4, 1)]);
    }

    #[test]
    fn negated_class_scan() {
        assert_eq!(matches("[^abc]", "abXcY"), vec![(2, 1), (4, 1)]);
    }

    #[test]
    fn nfa_and_dfa_scanners_agree() {
        let engine = Engine::compile("(ab)+|c").unwrap();
        let input = b"ababcxab";
        let via_dfa: Vec<_> = engine.find_all(input).collect();
        let via_nfa: Vec<_> = engine.find_all_nfa(input).collect();
        assert_eq!(via_dfa, via_nfa);
    }

    #[test]
    fn no_matches_is_an_empty_iterator_not_an_error() {
        assert_eq!(matches("z", "abc"), vec![]);
    }
}
