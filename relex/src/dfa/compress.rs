//! Equivalence-class compression of a DFA's transition table.
//!
//! Two bytes are equivalent if every DFA state transitions them to the
//! same place. Collapsing the 256-wide alphabet down to its equivalence
//! classes shrinks the transition table from `states * 256` to
//! `states * classes` while preserving exactly the same matching
//! behavior, the classic table-compression trick lexer generators use.

use super::Dfa;

#[derive(Debug, Clone)]
pub struct CompressedTable {
    /// Maps each byte value to its equivalence class.
    class_of: [u8; 256],
    num_classes: usize,
    /// `table[state][class]`.
    table: Vec<Vec<Option<usize>>>,
    is_final: Vec<bool>,
    start: usize,
}

impl CompressedTable {
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn class_of(&self, byte: u8) -> u8 {
        self.class_of[byte as usize]
    }

    pub fn is_final(&self, state: usize) -> bool {
        self.is_final[state]
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn step(&self, state: usize, byte: u8) -> Option<usize> {
        self.table[state][self.class_of(byte) as usize]
    }
}

/// Partitions the 256-byte alphabet by comparing each byte's transition
/// column across every state; bytes with identical columns share a class.
pub fn compress(dfa: &Dfa) -> CompressedTable {
    let n = dfa.state_count();
    let mut class_of = [0u8; 256];
    let mut representatives: Vec<u8> = Vec::new();

    for byte in 0u8..=255 {
        let existing_class = representatives.iter().position(|&rep| {
            (0..n).all(|s| dfa.states[s].transitions[byte as usize] == dfa.states[s].transitions[rep as usize])
        });
        match existing_class {
            Some(class_id) => class_of[byte as usize] = class_id as u8,
            None => {
                class_of[byte as usize] = representatives.len() as u8;
                representatives.push(byte);
            }
        }
    }

    let num_classes = representatives.len();
    let table = dfa
        .states
        .iter()
        .map(|state| {
            representatives
                .iter()
                .map(|&rep| state.transitions[rep as usize])
                .collect()
        })
        .collect();
    let is_final = dfa.states.iter().map(|s| s.is_final).collect();

    CompressedTable {
        class_of,
        num_classes,
        table,
        is_final,
        start: dfa.start,
    }
}

/// Length of the longest match anchored at `input[start..]`, or `None` if
/// no prefix of `input[start..]` is accepted. Mirrors [`super::eval`]'s
/// walk, but through the compressed table.
pub fn longest_match_at(table: &CompressedTable, input: &[u8], start: usize) -> Option<usize> {
    let mut current = Some(table.start());
    let mut last_accept = current.filter(|&s| table.is_final(s)).map(|_| 0);

    let mut len = 0;
    while start + len < input.len() {
        current = current.and_then(|s| table.step(s, input[start + len]));
        len += 1;
        let Some(s) = current else { break };
        if table.is_final(s) {
            last_accept = Some(len);
        }
    }

    last_accept
}
