//! Reference lookup CLI
//!
//! Resolves class, feature and race descriptions from the configured
//! reference documents and prints them to the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ttrpg_codex::config::AppConfig;
use ttrpg_codex::core::logging;
use ttrpg_codex::core::reference::ReferenceLibrary;

/// Look up class, feature and race descriptions
#[derive(Parser)]
#[command(name = "ttrpg-codex")]
#[command(about = "Look up class, feature and race descriptions", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the reference documents
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a "class > subclass > feature" path
    Path {
        /// Path such as "barbarian > path-of-the-berserker > frenzy"
        reference: String,
    },

    /// Resolve a class introduction or one of its entries
    Class {
        class: String,
        feature: Option<String>,
    },

    /// Resolve a class or subclass feature
    Feature {
        class: String,
        feature: String,

        /// Prefer this subclass's version of the feature
        #[arg(long)]
        subclass: Option<String>,
    },

    /// Resolve a race or subrace trait
    Race { race: String, feature: String },

    /// Reduce a feature title to its base name
    Title { text: String },
}

impl Command {
    fn title(&self) -> String {
        match self {
            Command::Path { reference } => reference.clone(),
            Command::Class { class, feature } => match feature {
                Some(feature) => format!("{class} > {feature}"),
                None => class.clone(),
            },
            Command::Feature {
                class,
                feature,
                subclass,
            } => match subclass {
                Some(subclass) => format!("{class} ({subclass}) > {feature}"),
                None => format!("{class} > {feature}"),
            },
            Command::Race { race, feature } => format!("{race} > {feature}"),
            Command::Title { text } => text.clone(),
        }
    }

    fn execute(&self, library: &ReferenceLibrary) -> Option<String> {
        match self {
            Command::Path { reference } => library.resolve_path(reference),
            Command::Class { class, feature } => {
                library.resolve_by_class_and_feature(class, feature.as_deref())
            }
            Command::Feature {
                class,
                feature,
                subclass,
            } => library.resolve_feature(class, feature, subclass.as_deref()),
            Command::Race { race, feature } => library.resolve_race_feature(race, feature),
            Command::Title { text } => Some(ReferenceLibrary::normalize_feature_title(text)),
        }
    }
}

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let (mut config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = Some(data_dir);
    }

    let _log_guard = logging::init(&config.logging);
    log::debug!("{} v{} starting", ttrpg_codex::NAME, ttrpg_codex::VERSION);

    // Reported only once logging is up so it reaches stderr and the log file.
    if let Some(e) = config_error {
        log::warn!("{e}, using defaults");
    }

    let library = match ReferenceLibrary::load(&config.data) {
        Ok(library) => library,
        Err(e) => {
            logging::print_error("Failed to load reference documents");
            return Err(e.into());
        }
    };

    match cli.command.execute(&library) {
        Some(text) => {
            logging::print_panel(&cli.command.title(), &text);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            logging::print_warning(&format!(
                "No description available for {}",
                cli.command.title()
            ));
            Ok(ExitCode::FAILURE)
        }
    }
}
