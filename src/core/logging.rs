//! Terminal Logging Module
//!
//! Provides structured logging and terminal output for the lookup CLI:
//! - Daily-rolling JSON log files, gzipped once their day has passed
//! - Compact human-readable logs on stderr
//! - Error reporting with miette
//! - Styled result panels (console)
//!
//! Results go to stdout and diagnostics to stderr, so each stream's
//! capabilities are detected separately.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use console::{style, Term};
use flate2::write::GzEncoder;
use flate2::Compression;
use is_terminal::IsTerminal;
use supports_color::Stream;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "ttrpg-codex.log";

/// Width assumed when a stream is not attached to a terminal.
const FALLBACK_WIDTH: usize = 80;

static STDOUT_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();
static STDERR_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();

fn stdout_caps() -> &'static TerminalCapabilities {
    STDOUT_CAPS.get_or_init(|| TerminalCapabilities::for_stream(Stream::Stdout))
}

fn stderr_caps() -> &'static TerminalCapabilities {
    STDERR_CAPS.get_or_init(|| TerminalCapabilities::for_stream(Stream::Stderr))
}

// ============================================================================
// Terminal Capability Detection
// ============================================================================

/// What one output stream can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// At least the basic ANSI palette is available.
    pub colors: bool,
    pub unicode: bool,
    pub interactive: bool,
    pub width: usize,
}

impl TerminalCapabilities {
    /// Detect what stdout or stderr can render.
    pub fn for_stream(stream: Stream) -> Self {
        let (interactive, term) = match stream {
            Stream::Stdout => (io::stdout().is_terminal(), Term::stdout()),
            Stream::Stderr => (io::stderr().is_terminal(), Term::stderr()),
        };

        let colors = supports_color::on_cached(stream).is_some_and(|level| level.has_basic);
        let width = term
            .size_checked()
            .map_or(FALLBACK_WIDTH, |(_rows, cols)| usize::from(cols));
        let unicode = unicode_from_env(
            std::env::var("TERM").ok().as_deref(),
            locale_from_env().as_deref(),
        );

        Self {
            colors,
            unicode,
            interactive,
            width,
        }
    }

    /// Plain capabilities for piped output.
    pub fn plain() -> Self {
        Self {
            colors: false,
            unicode: false,
            interactive: false,
            width: FALLBACK_WIDTH,
        }
    }

    pub fn should_colorize(&self) -> bool {
        self.interactive && self.colors
    }
}

/// The effective character-type locale: `LC_ALL`, then `LC_CTYPE`, then `LANG`.
fn locale_from_env() -> Option<String> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}

/// Unicode is assumed unless the terminal is `dumb` or the locale names a
/// non-UTF-8 encoding. An unset locale counts as UTF-8.
fn unicode_from_env(term: Option<&str>, locale: Option<&str>) -> bool {
    if term == Some("dumb") {
        return false;
    }
    match locale {
        None => true,
        Some(locale) => {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        }
    }
}

// ============================================================================
// Logging Initialization
// ============================================================================

/// Initialize the logging system.
///
/// This sets up:
/// 1. A file logger (JSON formatted, daily rolling) in the configured log directory.
/// 2. A compact stderr logger, so stdout stays reserved for lookup results.
/// 3. Configures miette for error reporting.
///
/// `log` macros reach both layers through the subscriber's built-in
/// `tracing-log` bridge, installed by `init()`. `RUST_LOG` takes precedence
/// over the configured level.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the application
/// to ensure buffered logs are flushed on shutdown.
pub fn init(config: &LoggingConfig) -> WorkerGuard {
    let log_dir = config.log_dir();

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    // File Layer: JSON format for easy parsing/ingestion
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter.clone());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(stderr_caps().should_colorize())
        .compact()
        .with_target(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    init_miette(*stderr_caps());

    let archive_dir = log_dir.clone();
    std::thread::spawn(move || compress_old_logs(&archive_dir));

    log::debug!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );

    guard
}

/// Gzip rotated log files from earlier days. Returns how many were archived.
fn compress_old_logs(log_dir: &Path) -> usize {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();
    let prefix = format!("{LOG_FILE_NAME}.");

    let Ok(entries) = fs::read_dir(log_dir) else {
        return 0;
    };

    let mut archived = 0;
    for path in entries.flatten().map(|entry| entry.path()) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(day) = name.strip_prefix(&prefix) else {
            continue;
        };
        if day == today_suffix || day.contains('.') {
            continue;
        }

        match gzip_in_place(&path) {
            Ok(archive) => {
                log::info!("Compressed old log to {}", archive.display());
                archived += 1;
            }
            Err(e) => log::warn!("Failed to compress old log {}: {}", path.display(), e),
        }
    }
    archived
}

/// Replace `path` with `path.gz`.
///
/// The archive is written under a temporary name and renamed into place, so
/// an interrupted run never leaves a truncated `.gz` beside a deleted log.
/// An existing archive is left untouched along with its source.
fn gzip_in_place(path: &Path) -> io::Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;
    let archive = path.with_file_name(with_suffix(name, ".gz"));
    if archive.exists() {
        return Ok(archive);
    }

    let partial = path.with_file_name(with_suffix(name, ".gz.partial"));
    let mut encoder = GzEncoder::new(fs::File::create(&partial)?, Compression::default());
    io::copy(&mut io::BufReader::new(fs::File::open(path)?), &mut encoder)?;
    encoder.finish()?.sync_all()?;

    fs::rename(&partial, &archive)?;
    fs::remove_file(path)?;
    Ok(archive)
}

fn with_suffix(name: &OsStr, suffix: &str) -> OsString {
    let mut joined = name.to_os_string();
    joined.push(suffix);
    joined
}

/// Install the miette report handler for errors returned from `main`.
fn init_miette(caps: TerminalCapabilities) {
    let installed = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(caps.unicode)
                .color(caps.should_colorize())
                .width(caps.width)
                .build(),
        )
    }));
    if installed.is_err() {
        log::trace!("miette hook already installed");
    }
}

// ============================================================================
// Console Output Utilities
// ============================================================================

/// Greedy word wrap to `width` columns. Blank lines are kept; words longer
/// than `width` get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.lines() {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };

            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

/// Print a styled panel with title and content
pub fn print_panel(title: &str, content: &str) {
    let caps = stdout_caps();
    let width = caps.width.clamp(20, 80);

    let border_char = if caps.unicode { "─" } else { "-" };
    let corner_tl = if caps.unicode { "╭" } else { "+" };
    let corner_tr = if caps.unicode { "╮" } else { "+" };
    let corner_bl = if caps.unicode { "╰" } else { "+" };
    let corner_br = if caps.unicode { "╯" } else { "+" };
    let side = if caps.unicode { "│" } else { "|" };

    let title_display = format!(" {} ", title);
    let border_len = width
        .saturating_sub(title_display.chars().count())
        .saturating_sub(2)
        .max(1);
    let top = format!(
        "{}{}{}{}",
        style(corner_tl).cyan(),
        style(&title_display).cyan().bold(),
        style(border_char.repeat(border_len)).cyan(),
        style(corner_tr).cyan()
    );

    let bottom_border_len = width.saturating_sub(2).max(1);
    let bottom = format!(
        "{}{}{}",
        style(corner_bl).cyan(),
        style(border_char.repeat(bottom_border_len)).cyan(),
        style(corner_br).cyan()
    );

    println!("{}", top);
    let content_width = width.saturating_sub(4).max(1);
    for line in wrap_text(content, content_width) {
        let padded = format!("{:width$}", line, width = content_width);
        println!("{} {} {}", style(side).cyan(), padded, style(side).cyan());
    }
    println!("{}", bottom);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    let prefix = if stderr_caps().unicode { "✗" } else { "[x]" };
    eprintln!(
        "{} {}",
        style(prefix).for_stderr().red(),
        style(message).for_stderr().red().bold()
    );
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    let prefix = if stderr_caps().unicode { "⚠" } else { "[!]" };
    eprintln!(
        "{} {}",
        style(prefix).for_stderr().yellow(),
        style(message).for_stderr().yellow().bold()
    );
}

// ============================================================================
// Tests
// ============================================================================
