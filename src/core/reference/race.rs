//! Race Resolver
//!
//! Resolves `(race text, feature)` against the race document. Race text
//! arrives in several shapes:
//!
//! ```text
//! "Dwarf"                  base race
//! "Halfling (Lightfoot)"   base race with subrace in parentheses
//! "Hill Dwarf"             subrace name alone
//! ```
//!
//! Traits are not addressable records in the document; they are bolded
//! header paragraphs inside a traits section. Each lookup builds a
//! throwaway trait index from the base race's section, overlays the
//! subrace's section on top, and searches it by name.

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::{ContentNode, RaceDocument, Record, CONTENT_FIELD};
use super::matching::find_key_containing;
use super::normalize::normalize_key;
use super::traits::{TraitExtractor, TraitMap};

/// Label matched against race node keys to find the traits section.
pub const TRAITS_LABEL: &str = "traits";

/// First parenthetical group: `"Halfling (Lightfoot)"` -> `"Lightfoot"`.
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("Invalid parenthetical regex"));

/// A resolved base race.
#[derive(Debug, Clone, Copy)]
pub struct RaceMatch<'a> {
    /// Display name of the base race in the document.
    pub key: &'a str,
    /// The base race node.
    pub node: &'a Record,
}

/// Resolves race and subrace trait descriptions.
#[derive(Debug, Clone, Copy)]
pub struct RaceResolver<'a> {
    document: &'a RaceDocument,
    extractor: TraitExtractor,
}

impl<'a> RaceResolver<'a> {
    pub fn new(document: &'a RaceDocument) -> Self {
        Self {
            document,
            extractor: TraitExtractor::new(),
        }
    }

    /// Resolve a race feature description.
    pub fn resolve(&self, race_text: &str, feature_name: &str) -> Option<String> {
        let Some(race) = self.find_race(race_text) else {
            log::debug!("No race matches '{}'", race_text);
            return None;
        };

        let subrace = subrace_label(race_text, race.key);
        let index = self.trait_index(race.node, subrace.as_deref());
        let description = find_trait(&index, feature_name);
        if description.is_none() {
            log::debug!(
                "No trait of '{}' (subrace {:?}) matches '{}'",
                race.key,
                subrace,
                feature_name
            );
        }
        description
    }

    /// Locate the base race for free-form race text.
    ///
    /// Tries the text as given, then the text before any parenthetical, then
    /// scans every race's traits section for a subrace node of that name.
    pub fn find_race(&self, race_text: &str) -> Option<RaceMatch<'a>> {
        if let Some(found) = self.find_base(race_text) {
            return Some(found);
        }

        let base_text = race_text.split('(').next().unwrap_or_default().trim();
        if !base_text.is_empty() && base_text != race_text {
            if let Some(found) = self.find_base(base_text) {
                log::trace!("Race '{}' resolved through '{}'", race_text, base_text);
                return Some(found);
            }
        }

        self.races().find_map(|(key, node)| {
            let section = traits_section(node)?;
            find_subrace_key(section, race_text)?;
            log::trace!("Race '{}' found as a subrace of '{}'", race_text, key);
            Some(RaceMatch { key, node })
        })
    }

    /// Build the trait index for a base race, overlaying a subrace's traits
    /// when one is named. Subrace traits replace base traits of the same name.
    pub fn trait_index(&self, base_node: &'a Record, subrace: Option<&str>) -> TraitMap {
        let Some(section) = traits_section(base_node) else {
            return TraitMap::new();
        };

        let mut index = self.section_traits(section);

        if let Some(subrace) = subrace {
            let sub_node = find_subrace_key(section, subrace)
                .and_then(|key| section.get(key))
                .and_then(ContentNode::as_record);
            match sub_node {
                Some(node) => index.extend(self.section_traits(node)),
                None => log::trace!("No subrace node matches '{}'", subrace),
            }
        }

        index
    }

    fn section_traits(&self, section: &Record) -> TraitMap {
        section
            .get(CONTENT_FIELD)
            .map(|content| self.extractor.extract(content))
            .unwrap_or_default()
    }

    fn find_base(&self, race_text: &str) -> Option<RaceMatch<'a>> {
        let key = find_key_containing(self.races().map(|(key, _)| key), race_text)?;
        let node = self.document.races.get(key)?.as_record()?;
        Some(RaceMatch { key, node })
    }

    /// Races whose node is an object.
    fn races(&self) -> impl Iterator<Item = (&'a str, &'a Record)> {
        let document = self.document;
        document
            .races
            .iter()
            .filter_map(|(key, node)| Some((key.as_str(), node.as_record()?)))
    }
}

/// Determine the subrace named by `race_text`, given its resolved base race.
///
/// A parenthetical names the subrace directly. Without one, text that
/// normalizes to the base race names no subrace, and any other text is the
/// subrace label itself.
///
/// The parenthetical is checked first because normalization strips it:
/// `"Halfling (Lightfoot)"` normalizes to the same key as `"Halfling"`.
pub fn subrace_label(race_text: &str, base_key: &str) -> Option<String> {
    let parenthetical = PARENTHETICAL
        .captures(race_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|label| !label.is_empty());
    if let Some(label) = parenthetical {
        return Some(label.to_string());
    }

    if normalize_key(race_text) == normalize_key(base_key) {
        return None;
    }

    Some(race_text.trim().to_string())
}

/// Search a trait index: normalized equality first, then containment in
/// either direction.
pub fn find_trait(index: &TraitMap, feature_name: &str) -> Option<String> {
    let trimmed = feature_name.trim();
    let target = normalize_key(trimmed.strip_suffix('.').unwrap_or(trimmed));
    if target.is_empty() {
        return None;
    }

    let exact = index.iter().find(|(name, _)| {
        let name = name.strip_suffix('.').unwrap_or(name.as_str());
        normalize_key(name) == target
    });

    exact
        .or_else(|| {
            index.iter().find(|(name, _)| {
                let name = normalize_key(name);
                !name.is_empty() && (name.contains(&target) || target.contains(name.as_str()))
            })
        })
        .map(|(_, description)| description.clone())
}

/// The traits section of a race node: the first object-valued key matching
/// [`TRAITS_LABEL`].
fn traits_section(node: &Record) -> Option<&Record> {
    let key = find_key_containing(record_keys(node), TRAITS_LABEL)?;
    node.get(key)?.as_record()
}

/// A subrace node inside a traits section. Only object-valued keys qualify,
/// so the section's own `content` list is never taken for a subrace.
fn find_subrace_key<'r>(section: &'r Record, subrace: &str) -> Option<&'r str> {
    find_key_containing(record_keys(section), subrace)
}

fn record_keys(record: &Record) -> impl Iterator<Item = &str> {
    record
        .iter()
        .filter(|(_, value)| value.as_record().is_some())
        .map(|(key, _)| key.as_str())
}
