//! Feature Resolver
//!
//! Resolves `(class, feature, subclass?)` against the class-feature document.
//! Names tolerate page references, parenthetical suffixes and punctuation
//! differences through [`find_key_scored`].
//!
//! # Lookup Order
//!
//! ```text
//! 1. Class node            (scored match on top-level keys)
//! 2. Search bucket         ("Class Features" mapping, else the class node itself)
//! 3. Subclass nodes        (exact name, then prefix; bucket before the
//!                           keys beside "Class Features")
//!      feature, then "Channel Divinity: <feature>", next node on a miss
//! 4. Base bucket           feature, then "Channel Divinity: <feature>"
//! ```
//!
//! A subclass hit wins over the base class. A miss in the subclass falls
//! through to the base bucket.

use super::document::{ClassFeatureDocument, ContentNode, Record};
use super::matching::find_key_scored;
use super::normalize::normalize_key;

/// Mapping on a class node that holds its base features.
pub const CLASS_FEATURES_KEY: &str = "Class Features";

/// Prefix under which cleric and paladin subclasses nest their options.
pub const CHANNEL_DIVINITY_PREFIX: &str = "Channel Divinity: ";

/// Resolves class and subclass feature descriptions.
#[derive(Debug, Clone, Copy)]
pub struct FeatureResolver<'a> {
    document: &'a ClassFeatureDocument,
}

/// A located class: its node and the bucket features are searched in.
#[derive(Debug, Clone, Copy)]
struct ClassScope<'a> {
    node: &'a Record,
    bucket: &'a Record,
}

impl<'a> FeatureResolver<'a> {
    pub fn new(document: &'a ClassFeatureDocument) -> Self {
        Self { document }
    }

    /// Resolve a feature description, preferring the subclass when given.
    pub fn resolve(
        &self,
        class_name: &str,
        feature_name: &str,
        subclass_name: Option<&str>,
    ) -> Option<String> {
        let Some(scope) = self.class_scope(class_name) else {
            log::debug!("No class matches '{}'", class_name);
            return None;
        };

        if let Some(subclass) = subclass_name {
            let candidates = Self::subclass_candidates(scope, subclass);
            if candidates.is_empty() {
                log::debug!("No subclass of '{}' matches '{}'", class_name, subclass);
            }
            if let Some(text) = candidates
                .into_iter()
                .find_map(|node| Self::lookup(node, feature_name))
            {
                return Some(text);
            }
            log::trace!(
                "'{}' not in subclass '{}', falling back to base class",
                feature_name,
                subclass
            );
        }

        let text = Self::lookup(scope.bucket, feature_name);
        if text.is_none() {
            log::debug!("No feature of '{}' matches '{}'", class_name, feature_name);
        }
        text
    }

    fn class_scope(&self, class_name: &str) -> Option<ClassScope<'a>> {
        let classes = &self.document.classes;
        let class_key = find_key_scored(classes.keys().map(String::as_str), class_name)?;
        let node = classes.get(class_key)?.as_record()?;
        let bucket = node
            .get(CLASS_FEATURES_KEY)
            .and_then(|features| features.as_record())
            .unwrap_or(node);
        Some(ClassScope { node, bucket })
    }

    /// Record-valued subclass nodes for `subclass_name`, best first.
    ///
    /// Exact normalized matches come before prefix matches, so a bucket
    /// feature such as `Oath Spells` cannot shadow an `Oath of Devotion`
    /// node beside `Class Features`. Within each tier the bucket is searched
    /// before the class node's other keys.
    fn subclass_candidates(scope: ClassScope<'a>, subclass_name: &str) -> Vec<&'a Record> {
        let target = normalize_key(subclass_name);
        let has_siblings = !std::ptr::eq(scope.bucket, scope.node);
        let bucket_entries = || scope.bucket.iter().filter_map(record_entry);
        let sibling_entries = || {
            scope
                .node
                .iter()
                .filter(move |_| has_siblings)
                .filter(|(key, _)| key.as_str() != CLASS_FEATURES_KEY)
                .filter_map(record_entry)
        };

        let mut candidates: Vec<&'a Record> = Vec::new();
        let mut push = |record: &'a Record| {
            if !candidates.iter().any(|seen| std::ptr::eq(*seen, record)) {
                candidates.push(record);
            }
        };

        bucket_entries()
            .chain(sibling_entries())
            .filter(|(key, _)| normalize_key(key) == target)
            .for_each(|(_, record)| push(record));

        for entries in [
            bucket_entries().collect::<Vec<_>>(),
            sibling_entries().collect::<Vec<_>>(),
        ] {
            let scored = find_key_scored(entries.iter().map(|(key, _)| *key), subclass_name);
            if let Some(&(_, record)) = scored.and_then(|key| entries.iter().find(|(k, _)| *k == key)) {
                push(record);
            }
        }

        candidates
    }

    /// Feature lookup within one bucket: the feature name, then its
    /// `Channel Divinity:` form. A matched key ends the search even when its
    /// content renders empty.
    fn lookup(bucket: &'a Record, feature_name: &str) -> Option<String> {
        let keys = || bucket.keys().map(String::as_str);
        let key = find_key_scored(keys(), feature_name).or_else(|| {
            find_key_scored(keys(), &format!("{CHANNEL_DIVINITY_PREFIX}{feature_name}"))
        })?;

        bucket
            .get(key)
            .and_then(|content| content.stringify())
            .filter(|text| !text.trim().is_empty())
    }
}

fn record_entry<'a>((key, node): (&'a String, &'a ContentNode)) -> Option<(&'a str, &'a Record)> {
    Some((key.as_str(), node.as_record()?))
}
