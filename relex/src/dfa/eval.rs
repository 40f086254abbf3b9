//! Table-driven DFA simulator, walking the raw (uncompressed) 256-wide
//! transition table one byte at a time.

use super::Dfa;

#[derive(Debug, Clone)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    current: Option<usize>,
}

impl<'a> DfaEvaluator<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        DfaEvaluator {
            dfa,
            current: Some(dfa.start),
        }
    }

    pub fn is_accepting(&self) -> bool {
        self.current
            .map_or(false, |s| self.dfa.states[s].is_final)
    }

    pub fn is_dead(&self) -> bool {
        self.current.is_none()
    }

    pub fn step(&mut self, byte: u8) {
        self.current = self
            .current
            .and_then(|s| self.dfa.states[s].transitions[byte as usize]);
    }
}

/// Length of the longest match anchored at `input[start..]`, or `None` if
/// no prefix of `input[start..]` is accepted.
pub fn longest_match_at(dfa: &Dfa, input: &[u8], start: usize) -> Option<usize> {
    let mut evaluator = DfaEvaluator::new(dfa);
    let mut last_accept = evaluator.is_accepting().then_some(0);

    let mut len = 0;
    while start + len < input.len() {
        evaluator.step(input[start + len]);
        len += 1;
        if evaluator.is_dead() {
            break;
        }
        if evaluator.is_accepting() {
            last_accept = Some(len);
        }
    }

    last_accept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::Nfa;
    use crate::parser::parse;

    fn dfa_for(pattern: &str) -> Dfa {
        Dfa::from_nfa(&Nfa::compile(&parse(pattern).unwrap()))
    }

    #[test]
    fn class_plus_matches_longest_run() {
        let dfa = dfa_for("[0-9]+");
        assert_eq!(longest_match_at(&dfa, b"42b", 0), Some(2));
        assert_eq!(longest_match_at(&dfa, b"b", 0), None);
    }

    #[test]
    fn dies_cleanly_on_unrecognized_byte() {
        let dfa = dfa_for("ab");
        assert_eq!(longest_match_at(&dfa, b"ac", 0), None);
    }
}
