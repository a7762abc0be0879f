//! TTRPG Codex - Reference-Data Resolution for Class and Race Compendia
//!
//! Core library resolving loosely-specified class, subclass, feature and
//! race identifiers to description text from JSON reference documents.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
