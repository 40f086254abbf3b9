//! Subset (Rabin–Scott) construction: determinizes an [`Nfa`] into a
//! [`Dfa`] whose states are ε-closed NFA state sets, deduplicated by a
//! linear scan over the DFA states built so far — acceptable per the
//! scale these automata run at, and a direct match for `find_dfa_state`
//! in the C tool this engine is descended from.

use super::{Dfa, DfaState};
use crate::bitset::Bitset;
use crate::nfa::{epsilon_closure, move_on_byte, Nfa};
use std::collections::VecDeque;

fn find_or_create(states: &mut Vec<DfaState>, queue: &mut VecDeque<usize>, nfa: &Nfa, set: &Bitset) -> usize {
    if let Some(idx) = states.iter().position(|s| &s.nfa_states == set) {
        return idx;
    }
    let is_final = set.iter_set().any(|s| nfa.states[s].is_final);
    let idx = states.len();
    states.push(DfaState {
        nfa_states: set.clone(),
        is_final,
        transitions: [None; 256],
    });
    queue.push_back(idx);
    idx
}

pub fn build(nfa: &Nfa) -> Dfa {
    let mut start_set = Bitset::new(nfa.state_count());
    start_set.set(nfa.start);
    epsilon_closure(nfa, &mut start_set);

    let mut states = Vec::new();
    let mut queue = VecDeque::new();
    let start = find_or_create(&mut states, &mut queue, nfa, &start_set);

    while let Some(idx) = queue.pop_front() {
        let current_set = states[idx].nfa_states.clone();
        for byte in 0u8..=255 {
            let mut next_set = move_on_byte(nfa, &current_set, byte);
            if next_set.is_empty() {
                continue;
            }
            epsilon_closure(nfa, &mut next_set);
            let target = find_or_create(&mut states, &mut queue, nfa, &next_set);
            states[idx].transitions[byte as usize] = Some(target);
        }
    }

    Dfa { states, start }
}
