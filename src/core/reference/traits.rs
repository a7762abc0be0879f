//! Trait Extractor
//!
//! Race compendia bundle individual traits as paragraphs that open with a
//! bolded header sentence:
//!
//! ```text
//! ***Darkvision.*** Accustomed to life underground, you have superior vision...
//! ***Dwarven Resilience.*** You have advantage on saving throws against poison...
//! ```
//!
//! [`TraitExtractor`] turns such a paragraph list into a name -> description
//! map. Paragraphs without a bolded header are connective prose and are
//! skipped.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::document::ContentNode;

/// Trait name -> description, in document order.
pub type TraitMap = IndexMap<String, String>;

/// Pattern for a bolded header paragraph: `***Name.*** Description`.
/// Captures: (header)(description). The header stays on one line; the
/// description may span several.
static BOLD_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*\*([^\r\n]+?)\.?\*\*\*\s*((?s:.*))$")
        .expect("Failed to compile bold header regex")
});

/// Extracts trait maps from traits-section content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraitExtractor;

impl TraitExtractor {
    /// Create a new trait extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract every bolded-header trait from a traits section's `content`.
    ///
    /// `content` is normally a list of paragraphs. A nested list of strings
    /// is joined with newlines before matching; a lone string is treated as
    /// a one-paragraph list. Any other shape yields nothing.
    pub fn extract(&self, content: &ContentNode) -> TraitMap {
        let mut traits = TraitMap::new();

        let paragraphs = match content {
            ContentNode::List(items) => items.as_slice(),
            ContentNode::Text(_) => std::slice::from_ref(content),
            _ => return traits,
        };

        for paragraph in paragraphs {
            let parsed = match paragraph {
                ContentNode::Text(text) => self.parse_paragraph(text),
                ContentNode::List(parts) => {
                    let joined = parts
                        .iter()
                        .filter_map(ContentNode::as_text)
                        .collect::<Vec<_>>()
                        .join("\n");
                    self.parse_paragraph(&joined)
                }
                _ => None,
            };

            if let Some((name, description)) = parsed {
                traits.insert(name, description);
            }
        }

        traits
    }

    /// Split a paragraph into `(header, description)` if it opens with a
    /// bolded header.
    ///
    /// An empty description falls back to the whole trimmed paragraph.
    pub fn parse_paragraph(&self, paragraph: &str) -> Option<(String, String)> {
        let caps = BOLD_HEADER_PATTERN.captures(paragraph)?;
        let name = caps.get(1)?.as_str().trim();
        if name.is_empty() {
            return None;
        }

        let description = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
        let description = if description.is_empty() {
            paragraph.trim()
        } else {
            description
        };

        Some((name.to_string(), description.to_string()))
    }
}

/// Extract traits with a default [`TraitExtractor`].
pub fn extract_traits(content: &ContentNode) -> TraitMap {
    TraitExtractor::new().extract(content)
}
