//! Thompson construction: turns a syntax tree into an [`Nfa`] one fragment
//! at a time. A [`Fragment`] is a transient builder value — a start state
//! plus the set of states still dangling an unconnected "out" edge — and
//! is consumed exactly once by whichever combinator uses it next.

use super::{Nfa, NfaState};
use crate::tree::{CharSet, Node, NodeKind, Postfix};

struct Builder {
    states: Vec<NfaState>,
}

impl Builder {
    fn new() -> Self {
        Builder { states: Vec::new() }
    }

    fn new_state(&mut self) -> usize {
        self.states.push(NfaState::default());
        self.states.len() - 1
    }

    fn add_epsilon(&mut self, from: usize, to: usize) {
        self.states[from].epsilon.push(to);
    }

    fn add_byte(&mut self, from: usize, byte: u8, to: usize) {
        self.states[from].byte.push((byte, to));
    }

    fn add_wildcard(&mut self, from: usize, to: usize) {
        self.states[from].wildcard.push(to);
    }
}

/// Start state plus the dangling out-states whose next transition is not
/// yet decided.
struct Fragment {
    start: usize,
    outs: Vec<usize>,
}

fn char_fragment(b: &mut Builder, byte: u8) -> Fragment {
    let start = b.new_state();
    let out = b.new_state();
    b.add_byte(start, byte, out);
    Fragment {
        start,
        outs: vec![out],
    }
}

fn dot_fragment(b: &mut Builder) -> Fragment {
    let start = b.new_state();
    let out = b.new_state();
    b.add_wildcard(start, out);
    Fragment {
        start,
        outs: vec![out],
    }
}

fn class_fragment(b: &mut Builder, set: &CharSet) -> Fragment {
    let start = b.new_state();
    let out = b.new_state();
    for byte in set.iter_members() {
        b.add_byte(start, byte, out);
    }
    Fragment {
        start,
        outs: vec![out],
    }
}

fn concat_fragment(b: &mut Builder, first: Fragment, second: Fragment) -> Fragment {
    for out in first.outs {
        b.add_epsilon(out, second.start);
    }
    Fragment {
        start: first.start,
        outs: second.outs,
    }
}

fn alt_fragment(b: &mut Builder, left: Fragment, right: Fragment) -> Fragment {
    let start = b.new_state();
    b.add_epsilon(start, left.start);
    b.add_epsilon(start, right.start);
    let mut outs = left.outs;
    outs.extend(right.outs);
    Fragment { start, outs }
}

fn star_fragment(b: &mut Builder, inner: Fragment) -> Fragment {
    let start = b.new_state();
    let out = b.new_state();
    b.add_epsilon(start, inner.start);
    b.add_epsilon(start, out);
    for o in inner.outs {
        b.add_epsilon(o, start);
    }
    Fragment {
        start,
        outs: vec![out],
    }
}

fn plus_fragment(b: &mut Builder, inner: Fragment) -> Fragment {
    let out = b.new_state();
    for o in &inner.outs {
        b.add_epsilon(*o, inner.start);
        b.add_epsilon(*o, out);
    }
    Fragment {
        start: inner.start,
        outs: vec![out],
    }
}

fn optional_fragment(b: &mut Builder, inner: Fragment) -> Fragment {
    let start = b.new_state();
    let out = b.new_state();
    b.add_epsilon(start, inner.start);
    b.add_epsilon(start, out);
    for o in inner.outs {
        b.add_epsilon(o, out);
    }
    Fragment {
        start,
        outs: vec![out],
    }
}

fn build(b: &mut Builder, node: &Node) -> Fragment {
    let base = match &node.kind {
        NodeKind::Char(b'.') => dot_fragment(b),
        NodeKind::Char(byte) => char_fragment(b, *byte),
        NodeKind::Class(set) => class_fragment(b, set),
        NodeKind::Concat(nodes) => {
            let mut iter = nodes.iter();
            let first = build(b, iter.next().expect("concat node has at least one child"));
            iter.fold(first, |acc, n| {
                let next = build(b, n);
                concat_fragment(b, acc, next)
            })
        }
        NodeKind::Alt(nodes) => {
            let mut iter = nodes.iter();
            let first = build(b, iter.next().expect("alt node has at least one branch"));
            iter.fold(first, |acc, n| {
                let next = build(b, n);
                alt_fragment(b, acc, next)
            })
        }
    };

    match node.postfix {
        Some(Postfix::Star) => star_fragment(b, base),
        Some(Postfix::Plus) => plus_fragment(b, base),
        Some(Postfix::Optional) => optional_fragment(b, base),
        None => base,
    }
}

pub fn compile(tree: &Node) -> Nfa {
    let mut builder = Builder::new();
    let frag = build(&mut builder, tree);
    for out in &frag.outs {
        builder.states[*out].is_final = true;
    }
    Nfa {
        states: builder.states,
        start: frag.start,
    }
}
