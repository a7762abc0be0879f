//! Reference-Data Resolution for Class and Race Compendia
//!
//! Given a loosely-specified identifier (a path like
//! `"barbarian > path-of-the-berserker > frenzy"`, or a class, race or feature
//! name typed by a user) this module locates the matching entry inside the
//! reference documents and returns its description text.
//!
//! # Architecture
//!
//! ```text
//!                   +----------------------+
//!                   |   ReferenceLibrary   |
//!                   +----------------------+
//!                    |         |          |
//!                    v         v          v
//!           PathResolver  FeatureResolver  RaceResolver
//!                    |         |          |        \
//!                    +---------+----------+    TraitExtractor
//!                              |
//!                        Key Normalizer
//! ```
//!
//! Every resolver normalizes its inputs, locates the best-matching document
//! key(s) with tiered fallback, and returns `Option`. `None` is the single
//! failure outcome: no match met the matching policy. Nothing here panics or
//! returns an error for a missing entry or a malformed document.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ttrpg_codex::core::reference::ReferenceLibrary;
//!
//! let library = ReferenceLibrary::load(&config.data)?;
//!
//! library.resolve_path("paladin > oath-of-devotion > channel-divinity-turn-the-unholy");
//! library.resolve_feature("Fighter", "Second Wind", Some("Champion"));
//! library.resolve_race_feature("Halfling (Lightfoot)", "Naturally Stealthy");
//! ```
//!
//! # Module Structure
//!
//! - [`document`]: typed reference documents and the shared [`ContentNode`]
//! - [`normalize`]: key normalization and slugs
//! - [`matching`]: scored and containment key matchers
//! - [`path`], [`feature`], [`race`]: the resolvers
//! - [`traits`]: bolded-header trait extraction
//! - [`library`]: the facade and document loading
//! - [`error`]: loading errors

pub mod document;
pub mod error;
pub mod feature;
pub mod library;
pub mod matching;
pub mod normalize;
pub mod path;
pub mod race;
pub mod traits;

pub use document::{
    ClassDescriptionDocument, ClassFeatureDocument, ContentNode, RaceDocument, Record,
};
pub use error::{ReferenceError, Result};
pub use feature::FeatureResolver;
pub use library::ReferenceLibrary;
pub use matching::{find_key_containing, find_key_scored, MIN_PREFIX_SCORE};
pub use normalize::{normalize_feature_title, normalize_key, slugify};
pub use path::PathResolver;
pub use race::{RaceMatch, RaceResolver};
pub use traits::{extract_traits, TraitExtractor, TraitMap};
