//! Configuration file parsing.
//!
//! Parses individual `.quarry.toml` files into intermediate `RawConfig`
//! structures that keep every field optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, OutputFormat};

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Index settings section.
    pub index: Option<RawIndexSettings>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Request tracker settings section.
    pub tracker: Option<RawTrackerSettings>,
    /// Output settings section.
    pub output: Option<RawOutputSettings>,
}

/// Raw index settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIndexSettings {
    /// Stop words. Accepts a single space-separated string or a list.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub stop_words: Option<Vec<String>>,
    /// Built-in stop word list to add, by language name.
    pub stop_word_language: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Maximum documents per search.
    pub max_results: Option<usize>,
    /// Relevance tie tolerance.
    pub relevance_epsilon: Option<f64>,
    /// Status searched when none is given.
    pub default_status: Option<String>,
}

/// Raw request tracker settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTrackerSettings {
    /// Window length in ticks.
    pub window: Option<u64>,
}

/// Raw output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutputSettings {
    /// Results per page (0 disables paging).
    pub page_size: Option<usize>,
    /// Output format.
    pub format: Option<OutputFormat>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
