//! Property-based tests for the resolvers
//!
//! Tests invariants:
//! - Path lookup ignores letter case
//! - Every class/entry pair resolves through its own slug path
//! - A subclass argument never hides a base feature
//! - Arbitrary input never panics

use proptest::prelude::*;

use crate::core::reference::slugify;
use crate::tests::common::{class_descriptions, library};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Every `(path, description)` pair in the class-description fixture, with
/// the path written as slugs.
fn entry_paths() -> Vec<(String, String)> {
    class_descriptions()
        .classes
        .iter()
        .filter_map(|(class, node)| Some((class, node.as_record()?)))
        .flat_map(|(class, entries)| {
            entries.iter().filter_map(move |(entry, text)| {
                Some((
                    format!("{} > {}", slugify(class), slugify(entry)),
                    text.as_text()?.to_string(),
                ))
            })
        })
        .collect()
}

/// Re-case an ASCII string using a bit mask.
fn recase(input: &str, mask: u64) -> String {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if mask >> (i % 64) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn path_lookup_ignores_case(path in "[A-Za-z >-]{0,40}") {
        let library = library();
        prop_assert_eq!(
            library.resolve_path(&path.to_uppercase()),
            library.resolve_path(&path.to_lowercase())
        );
    }

    #[test]
    fn every_entry_is_reachable(pair in prop::sample::select(entry_paths()), mask in any::<u64>()) {
        let (path, description) = pair;
        let library = library();
        let resolved = library.resolve_path(&recase(&path, mask));
        prop_assert_eq!(resolved.as_deref(), Some(description.as_str()));
    }

    #[test]
    fn subclass_never_hides_base_feature(subclass in "[A-Za-z :()-]{0,24}") {
        let library = library();
        let resolved = library.resolve_feature("Fighter", "Fighting Style", Some(subclass.as_str()));
        prop_assert_eq!(
            resolved.as_deref(),
            Some("You adopt a particular style of fighting as your specialty.")
        );
    }

    #[test]
    fn arbitrary_input_never_panics(a in any::<String>(), b in any::<String>(), c in any::<String>()) {
        let library = library();
        let _ = library.resolve_path(&a);
        let _ = library.resolve_by_class_and_feature(&a, Some(b.as_str()));
        let _ = library.resolve_feature(&a, &b, Some(c.as_str()));
        let _ = library.resolve_race_feature(&a, &b);
        let _ = crate::core::reference::ReferenceLibrary::normalize_feature_title(&c);
    }
}
