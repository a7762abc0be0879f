//! Key matchers shared by the resolvers.
//!
//! Both matchers compare [`normalize_key`] forms and return the original
//! document key so the caller can index back into the document.
//!
//! - [`find_key_scored`]: exact match, else the key sharing the longest
//!   common prefix with the target, accepted only at
//!   [`MIN_PREFIX_SCORE`] characters or more.
//! - [`find_key_containing`]: exact match, else the first key whose
//!   normalized form contains, or is contained in, the target.

use super::normalize::normalize_key;

/// Minimum shared-prefix length for a partial match to be accepted.
///
/// Reference key sets are fixed; changing this value silently reassigns
/// descriptions.
pub const MIN_PREFIX_SCORE: usize = 4;

/// Find a key by normalized equality, falling back to the longest common
/// prefix.
///
/// On ties the earliest key in iteration order wins. A fallback score below
/// [`MIN_PREFIX_SCORE`] is treated as no match.
pub fn find_key_scored<'a, I>(keys: I, target: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized_target = normalize_key(target);
    let mut best: Option<(&'a str, usize)> = None;

    for key in keys {
        let normalized_key = normalize_key(key);
        if normalized_key == normalized_target {
            return Some(key);
        }

        let score = common_prefix_len(&normalized_key, &normalized_target);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((key, score));
        }
    }

    match best {
        Some((key, score)) if score >= MIN_PREFIX_SCORE => {
            log::trace!("Prefix match '{}' for '{}' (score {})", key, target, score);
            Some(key)
        }
        _ => None,
    }
}

/// Find a key by normalized equality, falling back to containment in either
/// direction.
///
/// A target that normalizes to empty matches nothing.
pub fn find_key_containing<'a, I>(keys: I, target: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized_target = normalize_key(target);
    if normalized_target.is_empty() {
        return None;
    }

    let candidates: Vec<(&'a str, String)> = keys
        .into_iter()
        .map(|key| (key, normalize_key(key)))
        .collect();

    if let Some((key, _)) = candidates
        .iter()
        .find(|(_, normalized)| *normalized == normalized_target)
    {
        return Some(*key);
    }

    candidates
        .iter()
        .find(|(_, normalized)| {
            !normalized.is_empty()
                && (normalized.contains(&normalized_target)
                    || normalized_target.contains(normalized.as_str()))
        })
        .map(|(key, _)| {
            log::trace!("Containment match '{}' for '{}'", key, target);
            *key
        })
}

/// Number of leading characters two strings share.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
