//! Property-based tests for key normalization
//!
//! Tests invariants:
//! - normalize_key is idempotent
//! - normalize_key output has no stripped punctuation and collapsed whitespace
//! - normalize_key ignores ASCII letter case
//! - slugify is idempotent and produces a clean charset
//! - normalize_feature_title output is a normalized key

use proptest::prelude::*;

use crate::core::reference::normalize::STRIPPED_PUNCTUATION;
use crate::core::reference::{normalize_feature_title, normalize_key, slugify};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Feature-like names: letters, digits, spacing, parentheses and the
/// punctuation normalization strips.
fn arb_feature_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 \t().,:'`\"\u{2019}\u{201C}\u{201D}\u{2014}-]{0,48}"
}

/// Names with a trailing parenthetical hint such as `(p.109)`.
fn arb_annotated_name() -> impl Strategy<Value = String> {
    ("[A-Za-z][A-Za-z ]{0,20}", "[A-Za-z0-9 .]{0,10}")
        .prop_map(|(name, hint)| format!("{name} ({hint})"))
}

proptest! {
    #[test]
    fn normalize_key_is_idempotent(input in arb_feature_name()) {
        let once = normalize_key(&input);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn normalize_key_output_is_clean(input in arb_feature_name()) {
        let key = normalize_key(&input);
        prop_assert!(!key.contains(STRIPPED_PUNCTUATION));
        prop_assert!(!key.starts_with(' ') && !key.ends_with(' '));
        prop_assert!(!key.contains("  "));
        prop_assert!(!key.contains('\t'));
        prop_assert!(!key.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn normalize_key_ignores_case(input in "[A-Za-z0-9 ()':-]{0,40}") {
        prop_assert_eq!(normalize_key(&input.to_uppercase()), normalize_key(&input));
    }

    #[test]
    fn normalize_key_drops_trailing_parenthetical(input in arb_annotated_name()) {
        let base = input.split(" (").next().unwrap_or_default();
        prop_assert_eq!(normalize_key(&input), normalize_key(base));
    }

    #[test]
    fn slugify_is_idempotent(input in any::<String>()) {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn slugify_charset(input in any::<String>()) {
        let slug = slugify(&input);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn feature_title_is_whitespace_collapsed(input in arb_feature_name()) {
        let title = normalize_feature_title(&input);
        prop_assert!(!title.starts_with(' ') && !title.ends_with(' '));
        prop_assert!(!title.contains("  "));
        prop_assert!(!title.contains(STRIPPED_PUNCTUATION));
    }
}
