//! Path Resolver
//!
//! Resolves slugged reference paths against the class-description document:
//!
//! ```text
//! "barbarian > rage"
//! "barbarian > path-of-the-berserker > frenzy"
//! "paladin > oath-of-devotion > channel-divinity-turn-the-unholy"
//! ```
//!
//! The first segment names the class and the last segment names the entry.
//! Intermediate segments only document the hierarchy. Entry titles match by
//! exact slug, else by the longest title slug that prefixes the requested
//! slug, so `"channel-divinity"` answers a request for
//! `"channel-divinity-turn-the-unholy"`.

use super::document::{ClassDescriptionDocument, Record};
use super::normalize::slugify;

/// Separator between path segments.
pub const PATH_DELIMITER: char = '>';

/// Resolves class > subclass > feature paths.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    document: &'a ClassDescriptionDocument,
}

impl<'a> PathResolver<'a> {
    pub fn new(document: &'a ClassDescriptionDocument) -> Self {
        Self { document }
    }

    /// Resolve a `>`-delimited path to its description text.
    ///
    /// A single-segment path returns the class introduction.
    pub fn resolve(&self, path: &str) -> Option<&'a str> {
        let segments: Vec<&str> = path
            .split(PATH_DELIMITER)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        let (class_segment, rest) = segments.split_first()?;
        let feature = rest.last().copied();
        self.resolve_by_class_and_feature(class_segment, feature)
    }

    /// Resolve by class name and optional feature name, in any casing.
    pub fn resolve_by_class_and_feature(
        &self,
        class_name: &str,
        feature_name: Option<&str>,
    ) -> Option<&'a str> {
        let Some((class_key, entries)) = self.find_class(&slugify(class_name)) else {
            log::debug!("No class matches '{}'", class_name);
            return None;
        };

        let feature_slug = feature_name.map(slugify).unwrap_or_default();
        if feature_slug.is_empty() {
            return Self::introduction(class_key, entries);
        }

        let entry_key = Self::find_entry(entries, &feature_slug);
        if entry_key.is_none() {
            log::debug!("No entry of '{}' matches '{}'", class_key, feature_slug);
        }
        entry_key.and_then(|key| entries.get(key)).and_then(|entry| entry.as_text())
    }

    /// First top-level key whose slug equals `class_slug`.
    fn find_class(&self, class_slug: &str) -> Option<(&'a str, &'a Record)> {
        let (key, node) = self
            .document
            .classes
            .iter()
            .find(|(key, _)| slugify(key) == class_slug)?;
        Some((key.as_str(), node.as_record()?))
    }

    /// Try `"The <Class>"`, then `"<Class>"`, for introductory text.
    fn introduction(class_key: &str, entries: &'a Record) -> Option<&'a str> {
        [format!("The {class_key}"), class_key.to_string()]
            .iter()
            .filter_map(|candidate| entries.get(candidate).and_then(|entry| entry.as_text()))
            .find(|text| !text.is_empty())
    }

    /// Exact slug match, else the longest title slug prefixing `entry_slug`.
    fn find_entry(entries: &'a Record, entry_slug: &str) -> Option<&'a str> {
        let mut best_prefix: Option<(&'a str, usize)> = None;

        for key in entries.keys() {
            let slug = slugify(key);
            if slug == entry_slug {
                return Some(key.as_str());
            }
            if entry_slug.starts_with(&slug)
                && best_prefix.map_or(true, |(_, len)| slug.len() > len)
            {
                best_prefix = Some((key.as_str(), slug.len()));
            }
        }

        best_prefix.map(|(key, _)| {
            log::trace!("Prefix entry '{}' for '{}'", key, entry_slug);
            key
        })
    }
}
