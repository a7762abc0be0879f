//! Common Test Utilities
//!
//! Shared test helpers and fixtures used across test modules.
//! This module provides:
//! - Small in-memory reference documents (`fixtures`)

pub mod fixtures;

pub use fixtures::*;
