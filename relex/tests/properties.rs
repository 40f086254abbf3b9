//! Property-based tests cross-validating this engine's own two simulators
//! against each other, and against the `regex` crate as an independent
//! oracle for whole-string acceptance.

use proptest::prelude::*;
use regex::Regex as LibRegex;
use relex::bitset::Bitset;

/// Generates patterns built only from operators this grammar actually
/// supports (concatenation, alternation, `*`, `+`, `?`, grouping), rooted
/// at a single-letter class so every generated pattern stays well-formed.
fn random_regex() -> impl Strategy<Value = String> {
    "[a-z]".prop_recursive(8, 256, 10, |inner| {
        prop_oneof![
            5 => prop::collection::vec(inner.clone(), 1..6)
                .prop_map(|v| format!("({})", v.join(""))),
            5 => prop::collection::vec(inner.clone(), 1..6)
                .prop_map(|v| v.join("|")),
            2 => inner.clone().prop_map(|r| format!("({r})*")),
            2 => inner.clone().prop_map(|r| format!("({r})+")),
            2 => inner.clone().prop_map(|r| format!("({r})?")),
        ]
    })
}

proptest! {
    /// Whole-string acceptance must agree with a trusted independent regex
    /// engine for any pattern built from this grammar's operators.
    #[test]
    fn whole_string_acceptance_matches_library_regex(
        pattern in random_regex(),
        candidates in prop::collection::vec("[a-z]{0,8}", 10),
    ) {
        let engine = relex::compile(&pattern).unwrap();
        let oracle = LibRegex::new(&format!("^(?:{pattern})$")).unwrap();
        for candidate in candidates {
            prop_assert_eq!(
                engine.is_match_entire(candidate.as_bytes()),
                oracle.is_match(&candidate),
                "pattern {pattern:?} disagreed on {candidate:?}"
            );
        }
    }

    /// The NFA simulator and the compressed DFA table must always agree on
    /// an anywhere scan, since they describe the same language.
    #[test]
    fn nfa_and_dfa_scans_agree(
        pattern in random_regex(),
        input in "[a-z]{0,20}",
    ) {
        let engine = relex::compile(&pattern).unwrap();
        let via_dfa: Vec<_> = engine.find_all(input.as_bytes()).collect();
        let via_nfa: Vec<_> = engine.find_all_nfa(input.as_bytes()).collect();
        prop_assert_eq!(via_dfa, via_nfa);
    }

    /// A scan never yields a zero-length match, and always makes forward
    /// progress, so it terminates on any input including the empty one.
    #[test]
    fn scan_never_yields_zero_length_matches(
        pattern in random_regex(),
        input in "[a-z]{0,20}",
    ) {
        let engine = relex::compile(&pattern).unwrap();
        for m in engine.find_all(input.as_bytes()) {
            prop_assert!(m.length > 0);
        }
    }

    /// Matches produced by a scan are sorted and non-overlapping.
    #[test]
    fn scan_matches_are_ordered_and_non_overlapping(
        pattern in random_regex(),
        input in "[a-z]{0,20}",
    ) {
        let engine = relex::compile(&pattern).unwrap();
        let matches: Vec<_> = engine.find_all(input.as_bytes()).collect();
        for pair in matches.windows(2) {
            prop_assert!(pair[0].offset + pair[0].length <= pair[1].offset);
        }
    }

    /// Unioning a bitset with itself is a no-op, the same invariant the
    /// ε-closure fixed point relies on to terminate.
    #[test]
    fn self_union_is_idempotent(bits in prop::collection::vec(0usize..64, 0..20)) {
        let mut a = Bitset::new(64);
        for b in &bits { a.set(*b); }
        let mut b = a.clone();
        b.union_with(&a.clone());
        prop_assert_eq!(a, b);
    }
}

/// Subset construction must produce a DFA whose states are exactly the
/// distinct ε-closed NFA state sets reachable from the start: compiling
/// the same pattern twice must yield DFAs with the same number of states.
#[test]
fn subset_construction_is_deterministic() {
    for pattern in ["(ab)+|c", "[0-9]+", "a*b*c*", "(foo|bar|baz)+"] {
        let tree = relex::parser::parse(pattern).unwrap();
        let nfa_a = relex::nfa::Nfa::compile(&tree);
        let nfa_b = relex::nfa::Nfa::compile(&tree);
        let dfa_a = relex::dfa::Dfa::from_nfa(&nfa_a);
        let dfa_b = relex::dfa::Dfa::from_nfa(&nfa_b);
        assert_eq!(dfa_a.state_count(), dfa_b.state_count());
    }
}
