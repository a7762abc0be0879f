//! Property-based tests for the key matchers
//!
//! Tests invariants:
//! - A scored match is exact or shares at least MIN_PREFIX_SCORE leading characters
//! - A containment match is exact or contains / is contained in the target
//! - Any returned key is one of the candidates
//! - An exact candidate always wins

use proptest::prelude::*;

use crate::core::reference::matching::common_prefix_len;
use crate::core::reference::{
    find_key_containing, find_key_scored, normalize_key, MIN_PREFIX_SCORE,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    "[A-Za-z ():'-]{0,16}"
}

fn arb_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_key(), 0..8)
}

proptest! {
    #[test]
    fn scored_match_meets_floor(keys in arb_keys(), target in arb_key()) {
        let found = find_key_scored(keys.iter().map(String::as_str), &target);
        if let Some(key) = found {
            prop_assert!(keys.iter().any(|k| k == key));
            let (nk, nt) = (normalize_key(key), normalize_key(&target));
            prop_assert!(nk == nt || common_prefix_len(&nk, &nt) >= MIN_PREFIX_SCORE);
        }
    }

    #[test]
    fn scored_match_prefers_exact(mut keys in arb_keys(), target in arb_key(), at in any::<prop::sample::Index>()) {
        let position = at.index(keys.len() + 1);
        keys.insert(position, target.clone());
        let found = find_key_scored(keys.iter().map(String::as_str), &target);
        prop_assert_eq!(found.map(normalize_key), Some(normalize_key(&target)));
    }

    #[test]
    fn containment_match_is_related(keys in arb_keys(), target in arb_key()) {
        let found = find_key_containing(keys.iter().map(String::as_str), &target);
        if let Some(key) = found {
            prop_assert!(keys.iter().any(|k| k == key));
            let (nk, nt) = (normalize_key(key), normalize_key(&target));
            prop_assert!(!nt.is_empty());
            prop_assert!(nk == nt || (!nk.is_empty() && (nk.contains(&nt) || nt.contains(&nk))));
        }
    }

    #[test]
    fn containment_ignores_empty_target(keys in arb_keys(), target in "[ '`:-]{0,6}") {
        prop_assert_eq!(normalize_key(&target), "");
        prop_assert_eq!(find_key_containing(keys.iter().map(String::as_str), &target), None);
    }
}
