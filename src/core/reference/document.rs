//! Typed reference documents.
//!
//! The compendia arrive as loosely-shaped JSON converted from tabular and
//! markup sources. Every value inside them is modelled as a [`ContentNode`],
//! a tagged union over the shapes that actually occur:
//!
//! ```text
//! "Rage"                                  -> ContentNode::Text
//! ["In battle...", "While raging..."]     -> ContentNode::List
//! {"content": [...], "table": {...}}      -> ContentNode::Record
//! 3 / true / null                         -> ContentNode::Scalar
//! ```
//!
//! Object key order is preserved, so "first matching key" rules in the
//! resolvers follow document order.
//!
//! Three document shapes wrap these nodes:
//!
//! - [`ClassDescriptionDocument`]: class -> entry title -> text
//! - [`ClassFeatureDocument`]: class -> node with a `Class Features` mapping and subclass nodes
//! - [`RaceDocument`]: `Races` -> race -> node with a traits section and subrace nodes
//!
//! Documents are immutable after construction and safe to share between threads.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{ReferenceError, Result};

/// Field of a record that carries its primary text.
pub const CONTENT_FIELD: &str = "content";

/// Field of a record holding tabular data; never rendered as text.
pub const TABLE_FIELD: &str = "table";

/// An ordered JSON object of content nodes.
pub type Record = IndexMap<String, ContentNode>;

// ============================================================================
// ContentNode
// ============================================================================

/// Any value found inside a reference document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    /// A plain paragraph or description.
    Text(String),
    /// A list of paragraphs or nested values.
    List(Vec<ContentNode>),
    /// A JSON object: class node, subclass node, traits section, or a
    /// feature carrying `content` plus optional `table` data.
    Record(Record),
    /// Numbers, booleans and null.
    Scalar(serde_json::Value),
}

impl ContentNode {
    /// Returns the text if this node is a plain string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the fields if this node is an object.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Render this node as description text.
    ///
    /// - Text is returned as-is.
    /// - Lists are joined with newlines; non-text members are rendered as JSON.
    /// - Records prefer their `content` field (text or list). Otherwise every
    ///   other field except `table` is rendered recursively as `key: value`
    ///   lines.
    ///
    /// Returns `None` when nothing yields text.
    pub fn stringify(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::List(items) => Some(join_lines(items)),
            Self::Record(fields) => match fields.get(CONTENT_FIELD) {
                Some(Self::Text(text)) => Some(text.clone()),
                Some(Self::List(items)) => Some(join_lines(items)),
                _ => {
                    let parts: Vec<String> = fields
                        .iter()
                        .filter(|(key, _)| key.as_str() != TABLE_FIELD && key.as_str() != CONTENT_FIELD)
                        .filter_map(|(key, value)| {
                            value
                                .stringify()
                                .filter(|text| !text.is_empty())
                                .map(|text| format!("{key}: {text}"))
                        })
                        .collect();

                    if parts.is_empty() {
                        None
                    } else {
                        Some(parts.join("\n"))
                    }
                }
            },
            Self::Scalar(_) => None,
        }
    }

    /// Render this node as compact JSON.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn join_lines(items: &[ContentNode]) -> String {
    items
        .iter()
        .map(|item| match item {
            ContentNode::Text(text) => text.clone(),
            other => other.to_json_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<&str> for ContentNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ContentNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Class-description document: class display name -> entry title -> text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassDescriptionDocument {
    pub classes: Record,
}

/// Class-feature document: class display name -> class node.
///
/// A class node holds a `Class Features` mapping of feature title -> content
/// and may hold subclass nodes, each a mapping of feature title -> content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassFeatureDocument {
    pub classes: Record,
}

/// Race document: a root object whose `Races` mapping holds one node per race.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceDocument {
    #[serde(rename = "Races", default)]
    pub races: Record,
}

macro_rules! impl_document_loading {
    ($doc:ty) => {
        impl $doc {
            /// Parse a document from JSON text.
            pub fn from_json_str(json: &str) -> Result<Self> {
                Ok(serde_json::from_str(json)?)
            }

            /// Read and parse a document from a JSON file.
            pub fn from_path(path: &Path) -> Result<Self> {
                let file = File::open(path).map_err(|source| ReferenceError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                    ReferenceError::Parse {
                        path: path.to_path_buf(),
                        source,
                    }
                })
            }
        }
    };
}

impl_document_loading!(ClassDescriptionDocument);
impl_document_loading!(ClassFeatureDocument);
impl_document_loading!(RaceDocument);
