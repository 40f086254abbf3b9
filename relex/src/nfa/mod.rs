//! The NFA container and its Thompson-construction builder.

mod builder;
pub mod eval;

use crate::bitset::Bitset;
use crate::tree::Node;

/// A single NFA state's outgoing transitions. Kept as three small vectors
/// rather than one transition enum so that the subset constructor and the
/// simulator can each iterate exactly the kind of edge they care about
/// without filtering.
#[derive(Debug, Clone, Default)]
pub struct NfaState {
    pub is_final: bool,
    pub epsilon: Vec<usize>,
    pub byte: Vec<(u8, usize)>,
    pub wildcard: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Nfa {
    pub states: Vec<NfaState>,
    pub start: usize,
}

impl Nfa {
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Builds the NFA for a syntax tree via Thompson's construction.
    pub fn compile(tree: &Node) -> Nfa {
        builder::compile(tree)
    }
}

/// Extends `set` to its ε-closure via a fixed-point loop. Shared by the
/// NFA simulator and the subset constructor so the two never drift apart
/// on what "ε-closure" means.
pub(crate) fn epsilon_closure(nfa: &Nfa, set: &mut Bitset) {
    loop {
        let mut changed = false;
        for state in set.iter_set().collect::<Vec<_>>() {
            for &target in &nfa.states[state].epsilon {
                if !set.test(target) {
                    set.set(target);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
}

/// The set of states reachable from any member of `set` on `byte`,
/// including states reached via a wildcard transition.
pub(crate) fn move_on_byte(nfa: &Nfa, set: &Bitset, byte: u8) -> Bitset {
    let mut next = Bitset::new(nfa.state_count());
    for state in set.iter_set() {
        for &(b, to) in &nfa.states[state].byte {
            if b == byte {
                next.set(to);
            }
        }
        for &to in &nfa.states[state].wildcard {
            next.set(to);
        }
    }
    next
}
