//! Reference Library
//!
//! Owns the three reference documents and exposes every lookup operation
//! behind one type. Documents are loaded once and never mutated, so a
//! library can be wrapped in an `Arc` and queried from any number of threads.

use std::path::Path;

use tracing::instrument;

use crate::config::DataConfig;

use super::document::{ClassDescriptionDocument, ClassFeatureDocument, RaceDocument};
use super::error::Result;
use super::feature::FeatureResolver;
use super::normalize;
use super::path::PathResolver;
use super::race::RaceResolver;

/// The loaded reference documents and the lookups over them.
#[derive(Debug, Clone, Default)]
pub struct ReferenceLibrary {
    class_descriptions: ClassDescriptionDocument,
    class_features: ClassFeatureDocument,
    races: RaceDocument,
}

impl ReferenceLibrary {
    /// Build a library from already-loaded documents.
    pub fn new(
        class_descriptions: ClassDescriptionDocument,
        class_features: ClassFeatureDocument,
        races: RaceDocument,
    ) -> Self {
        Self {
            class_descriptions,
            class_features,
            races,
        }
    }

    /// Load all three documents from the configured data directory.
    ///
    /// A document whose file does not exist is replaced by an empty document
    /// so lookups against it resolve to `None`. Unreadable or malformed files
    /// are errors.
    #[instrument(skip_all, fields(data_dir = %config.data_dir().display()))]
    pub fn load(config: &DataConfig) -> Result<Self> {
        log::info!("Loading reference documents from {}", config.data_dir().display());

        let library = Self::new(
            load_or_empty(&config.class_descriptions_path())?,
            load_or_empty(&config.class_features_path())?,
            load_or_empty(&config.races_path())?,
        );

        log::info!(
            "Loaded {} class description sets, {} class feature sets, {} races",
            library.class_descriptions.classes.len(),
            library.class_features.classes.len(),
            library.races.races.len()
        );

        Ok(library)
    }

    pub fn class_descriptions(&self) -> &ClassDescriptionDocument {
        &self.class_descriptions
    }

    pub fn class_features(&self) -> &ClassFeatureDocument {
        &self.class_features
    }

    pub fn races(&self) -> &RaceDocument {
        &self.races
    }

    pub fn path_resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.class_descriptions)
    }

    pub fn feature_resolver(&self) -> FeatureResolver<'_> {
        FeatureResolver::new(&self.class_features)
    }

    pub fn race_resolver(&self) -> RaceResolver<'_> {
        RaceResolver::new(&self.races)
    }

    /// Resolve a `"class > subclass > feature"` path against the
    /// class-description document.
    pub fn resolve_path(&self, path: &str) -> Option<String> {
        self.path_resolver().resolve(path).map(str::to_owned)
    }

    /// Resolve by class name and optional feature name against the
    /// class-description document. No feature returns the class introduction.
    pub fn resolve_by_class_and_feature(
        &self,
        class_name: &str,
        feature_name: Option<&str>,
    ) -> Option<String> {
        self.path_resolver()
            .resolve_by_class_and_feature(class_name, feature_name)
            .map(str::to_owned)
    }

    /// Resolve a class or subclass feature against the class-feature document.
    pub fn resolve_feature(
        &self,
        class_name: &str,
        feature_name: &str,
        subclass_name: Option<&str>,
    ) -> Option<String> {
        self.feature_resolver()
            .resolve(class_name, feature_name, subclass_name)
    }

    /// Reduce a feature's display title to its base name.
    pub fn normalize_feature_title(raw: &str) -> String {
        normalize::normalize_feature_title(raw)
    }

    /// Resolve a race or subrace trait against the race document.
    pub fn resolve_race_feature(&self, race_text: &str, feature_name: &str) -> Option<String> {
        self.race_resolver().resolve(race_text, feature_name)
    }
}

fn load_or_empty<D>(path: &Path) -> Result<D>
where
    D: Default + LoadDocument,
{
    if !path.exists() {
        log::warn!("Reference document {} not found, using an empty document", path.display());
        return Ok(D::default());
    }

    let document = D::load(path)?;
    log::debug!("Loaded reference document {}", path.display());
    Ok(document)
}

/// Documents readable from a JSON file.
trait LoadDocument: Sized {
    fn load(path: &Path) -> Result<Self>;
}

impl LoadDocument for ClassDescriptionDocument {
    fn load(path: &Path) -> Result<Self> {
        Self::from_path(path)
    }
}

impl LoadDocument for ClassFeatureDocument {
    fn load(path: &Path) -> Result<Self> {
        Self::from_path(path)
    }
}

impl LoadDocument for RaceDocument {
    fn load(path: &Path) -> Result<Self> {
        Self::from_path(path)
    }
}
