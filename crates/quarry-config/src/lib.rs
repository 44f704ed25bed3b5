//! Configuration system for quarry.
//!
//! quarry uses TOML configuration files named `.quarry.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.quarry.toml` files found, then loading `~/.quarry.toml` as the global config with lowest
//! precedence.
//!
//! ```
//! use quarry_config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.search.max_results, 5);
//! assert_eq!(config.tracker.window, 1440);
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawIndexSettings, RawOutputSettings, RawSearchSettings, RawTrackerSettings,
    parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for quarry.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.quarry.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Stop word settings applied when the index is built.
    pub index: IndexSettings,
    /// Ranking settings.
    pub search: SearchSettings,
    /// Request tracker settings.
    pub tracker: TrackerSettings,
    /// Output settings for the command line driver.
    pub output: OutputSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.quarry.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// Warnings cover settings that load fine but make the engine useless or
    /// that name something quarry does not know, such as an unknown stop word
    /// language.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.quarry.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, toml::ser::Error> {
        let serializable = SerializableSettings {
            index: &self.index,
            search: &self.search,
            tracker: &self.tracker,
            output: &self.output,
        };
        toml::to_string_pretty(&serializable)
    }
}

/// Stop word settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Individual stop words, already split on spaces.
    pub stop_words: Vec<String>,
    /// Built-in stop word list to add, by language name or ISO code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_word_language: Option<String>,
}

/// Ranking settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of documents a search returns.
    pub max_results: usize,
    /// Two relevances closer than this are treated as equal.
    pub relevance_epsilon: f64,
    /// Status searched when the caller does not pick one.
    pub default_status: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 5,
            relevance_epsilon: 1e-6,
            default_status: String::from("actual"),
        }
    }
}

/// Request tracker settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerSettings {
    /// Number of most recent requests kept in the sliding window.
    pub window: u64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self { window: 1440 }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Results per page; 0 prints everything on one page.
    pub page_size: usize,
    /// Output format.
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Brace-delimited text lines.
    #[default]
    Text,
    /// JSON documents.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Borrowed view of the settings sections for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Index section.
    index: &'a IndexSettings,
    /// Search section.
    search: &'a SearchSettings,
    /// Tracker section.
    tracker: &'a TrackerSettings,
    /// Output section.
    output: &'a OutputSettings,
}
