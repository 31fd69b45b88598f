//! Tool configuration (`nombres.toml`).
//!
//! Optional defaults for the `dedupe` and `generate` commands. Command-line
//! flags always win; each boolean option has a `--no-` form to switch a
//! file setting back off.
//!
//! ```toml
//! [dedupe]
//! key = "nombre"
//! keep = "last"
//! case_sensitive = false
//! keep_accents = false
//!
//! [generate]
//! seed = 7
//! types = ["poetica", "historica"]
//! ```

use std::path::{Path, PathBuf};

use nombres_core::{DedupeConfig, KeepPolicy};
use serde::Deserialize;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "nombres.toml";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Parsed `nombres.toml`. Missing sections and fields fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NombresConfig {
    /// Defaults for `nombres dedupe`.
    #[serde(default)]
    pub dedupe: DedupeSection,

    /// Defaults for `nombres generate`.
    #[serde(default)]
    pub generate: GenerateSection,
}

// ---------------------------------------------------------------------------
// DedupeSection
// ---------------------------------------------------------------------------

/// `[dedupe]` table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DedupeSection {
    /// Field the dedup key is read from (default `"nombre"`).
    pub key: Option<String>,
    /// `"first"` or `"last"` (default `"first"`).
    pub keep: Option<KeepPolicy>,
    /// Compare keys without lowercasing.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Compare keys without stripping accents.
    #[serde(default)]
    pub keep_accents: bool,
}

/// Command-line values that override the `[dedupe]` table. `None` leaves
/// the file value in place.
#[derive(Clone, Debug, Default)]
pub struct DedupeOverrides {
    pub key: Option<String>,
    pub keep: Option<KeepPolicy>,
    pub case_sensitive: Option<bool>,
    pub keep_accents: Option<bool>,
}

impl DedupeSection {
    /// Effective dedup settings after applying command-line overrides.
    #[must_use]
    pub fn resolve(&self, cli: DedupeOverrides) -> DedupeConfig {
        let defaults = DedupeConfig::default();
        DedupeConfig {
            key: cli.key.or_else(|| self.key.clone()).unwrap_or(defaults.key),
            keep: cli.keep.or(self.keep).unwrap_or(defaults.keep),
            case_sensitive: cli.case_sensitive.unwrap_or(self.case_sensitive),
            keep_accents: cli.keep_accents.unwrap_or(self.keep_accents),
        }
    }
}

// ---------------------------------------------------------------------------
// GenerateSection
// ---------------------------------------------------------------------------

/// `[generate]` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSection {
    /// RNG seed (default 42).
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Story types to draw from when no rule picks one.
    #[serde(default)]
    pub types: Vec<String>,
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            types: Vec::new(),
        }
    }
}

const fn default_seed() -> u64 {
    42
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Error loading a configuration file.
#[derive(Debug, Error)]
#[error("{}: {message}", source_label(.path.as_deref()))]
pub struct ConfigError {
    /// The path that was being loaded (if available).
    pub path: Option<PathBuf>,
    /// Human-readable message with line-level detail when possible.
    pub message: String,
}

fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "config error".to_owned(), |p| p.display().to_string())
}

impl NombresConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields all defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` on I/O errors (other than not-found) or parse errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError {
                    path: Some(path.to_owned()),
                    message: format!("could not read file: {e}"),
                });
            }
        };
        Self::parse(&contents).map_err(|mut e| {
            e.path = Some(path.to_owned());
            e
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `ConfigError` on invalid TOML or unknown fields.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| {
            let mut message = e.message().to_owned();
            if let Some(span) = e.span() {
                let line = toml_str[..span.start]
                    .chars()
                    .filter(|&c| c == '\n')
                    .count()
                    + 1;
                message = format!("line {line}: {message}");
            }
            ConfigError {
                path: None,
                message,
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
