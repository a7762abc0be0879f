//! Error types for loading reference documents.
//!
//! Lookups never fail with an error: a lookup that finds nothing returns
//! `None`. These errors only cover reading and parsing the JSON documents.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for reference loading operations.
pub type Result<T> = std::result::Result<T, ReferenceError>;

/// Errors raised while loading a reference document.
#[derive(Error, Debug, Diagnostic)]
pub enum ReferenceError {
    /// The document file exists but could not be read.
    #[error("Failed to read reference document {path:?}: {source}")]
    #[diagnostic(
        code("CODEX::IO"),
        help("Check that the data directory is readable")
    )]
    Io {
        /// Path of the unreadable file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document file is not valid JSON or its root is not an object.
    #[error("Failed to parse reference document {path:?}: {source}")]
    #[diagnostic(
        code("CODEX::PARSE"),
        help("Reference documents must be JSON objects keyed by display name")
    )]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON parse error for in-memory documents.
    #[error("Serialization error: {0}")]
    #[diagnostic(code("CODEX::SERIALIZATION"))]
    Serialization(#[from] serde_json::Error),
}
