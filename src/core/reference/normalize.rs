//! Key Normalizer
//!
//! Canonicalizes free-text identifiers so that call-site names and document
//! keys can be compared despite inconsistent formatting.
//!
//! Two canonical forms exist:
//!
//! - [`normalize_key`]: lower-case, punctuation-stripped, trailing
//!   parentheticals removed, whitespace collapsed. Used for title matching.
//! - [`slugify`]: lower-case alphanumeric runs joined by single hyphens. Used
//!   for path segments such as `"path-of-the-berserker"`.
//!
//! Both are total: any input, including empty or whitespace-only text,
//! produces a (possibly empty) key.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters removed outright during normalization: ASCII and typographic
/// apostrophes, backticks, straight and curly double quotes, colons, hyphen
/// and em-dash.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '\u{2019}', '\'', '`', '"', '\u{201C}', '\u{201D}', ':', '-', '\u{2014}',
];

/// A parenthetical group at the end of the text, e.g. `" (p.109)"`.
static TRAILING_PARENTHETICAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\([^)]*\)\s*$").expect("Invalid trailing parenthetical regex")
});

/// A stray page marker left at the end of a title: `"p. 72"`, `"pp 12"`.
static PAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bpp?\.?\s*\d+$").expect("Invalid page marker regex"));

/// Ordinal hints inside a title: `"2nd"`, `"11th"`.
static ORDINAL_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(st|nd|rd|th)\b").expect("Invalid ordinal regex"));

/// Parentheticals glued to surrounding words that survived normalization.
static INNER_PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\(.*?\)\b").expect("Invalid inner parenthetical regex"));

/// Normalize an identifier into a comparable key.
///
/// ```rust
/// use ttrpg_codex::core::reference::normalize_key;
///
/// assert_eq!(normalize_key("Feature (p.109)"), "feature");
/// assert_eq!(normalize_key("Channel Divinity: Turn the Unholy"), "channel divinity turn the unholy");
/// assert_eq!(normalize_key("  Dwarven   Toughness "), "dwarven toughness");
/// ```
///
/// Normalization is idempotent. Punctuation is removed before parentheticals
/// are stripped, and stripping repeats while the text still ends in a
/// parenthetical group, so a second pass never finds anything left to strip.
pub fn normalize_key(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut key: String = lowered
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    while let Some(found) = TRAILING_PARENTHETICAL.find(&key) {
        key.truncate(found.start());
    }

    collapse_whitespace(&key)
}

/// Convert an identifier into a hyphen-joined slug.
///
/// Every run of characters other than `a-z` and `0-9` becomes a single
/// hyphen; leading and trailing hyphens are trimmed.
///
/// ```rust
/// use ttrpg_codex::core::reference::slugify;
///
/// assert_eq!(slugify("Path of the Berserker"), "path-of-the-berserker");
/// assert_eq!(slugify("Channel Divinity: Turn the Unholy"), "channel-divinity-turn-the-unholy");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Reduce a feature's display title to its base name.
///
/// Applies [`normalize_key`], then drops a trailing page marker, ordinal
/// hints and any remaining glued parentheticals. The result is suitable both
/// as a lookup key and as a display label.
///
/// ```rust
/// use ttrpg_codex::core::reference::normalize_feature_title;
///
/// assert_eq!(normalize_feature_title("Extra Attack (p.49)"), "extra attack");
/// assert_eq!(normalize_feature_title("Fighting Style p. 72"), "fighting style");
/// assert_eq!(normalize_feature_title("Ability Score Improvement 4th"), "ability score improvement");
/// ```
pub fn normalize_feature_title(raw: &str) -> String {
    let key = normalize_key(raw);
    let without_page = PAGE_MARKER.replace(&key, "");
    let without_ordinals = ORDINAL_HINT.replace_all(without_page.trim(), "");
    let without_parens = INNER_PARENTHETICAL.replace_all(without_ordinals.trim(), "");
    collapse_whitespace(&without_parens)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
