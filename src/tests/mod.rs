//! Crate-level test suites
//!
//! Unit tests live beside the code they cover. This tree holds the shared
//! fixtures and the property-based suites that span several modules.

pub mod common;
mod property;
