//! Property-based tests for reference resolution
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! Run all property tests:
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `normalize_props`: Key normalization and slugs
//!   - Normalization is idempotent
//!   - Output carries no stripped punctuation or stray whitespace
//!   - Slugs use only `[a-z0-9-]` with single inner hyphens
//!
//! - `matching_props`: Scored and containment key matchers
//!   - A scored match is exact or shares at least four leading characters
//!   - A containment match is exact or contains / is contained in the target
//!   - Matched keys always come from the candidate set
//!
//! - `resolver_props`: Resolver behavior over fixture documents
//!   - Path lookup is insensitive to letter case
//!   - Every class/entry pair is reachable by its own path
//!   - A subclass never hides a base feature
//!   - No input panics
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod matching_props;
mod normalize_props;
mod resolver_props;
