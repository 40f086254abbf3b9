//! The DFA container, its subset-construction builder, the table
//! simulator, and the equivalence-class compressor.

pub mod builder;
pub mod compress;
pub mod eval;

use crate::bitset::Bitset;
use crate::nfa::Nfa;

#[derive(Debug, Clone)]
pub struct DfaState {
    /// The set of NFA states this DFA state stands in for. Kept around
    /// only so `builder::build` can dedup by value; not read afterward.
    pub nfa_states: Bitset,
    pub is_final: bool,
    pub transitions: [Option<usize>; 256],
}

#[derive(Debug, Clone)]
pub struct Dfa {
    pub states: Vec<DfaState>,
    pub start: usize,
}

impl Dfa {
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Determinizes an NFA via subset construction.
    pub fn from_nfa(nfa: &Nfa) -> Dfa {
        builder::build(nfa)
    }
}
