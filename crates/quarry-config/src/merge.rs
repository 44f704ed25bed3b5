//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and checking values that TOML types alone cannot rule out.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, IndexSettings, OutputSettings, SearchSettings, TrackerSettings,
    parse::{
        RawConfig, RawIndexSettings, RawOutputSettings, RawSearchSettings, RawTrackerSettings,
    },
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - `stop_words`: the closest file that sets the key wins; entries are split on spaces
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut index = IndexSettings::default();
    let mut search = SearchSettings::default();
    let mut tracker = TrackerSettings::default();
    let mut output = OutputSettings::default();

    // Lowest precedence first so closer files overwrite
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref v) = raw.index {
            apply_raw_index(&mut index, v);
        }
        if let Some(ref v) = raw.search {
            apply_raw_search(&mut search, v, &parsed.path)?;
        }
        if let Some(ref v) = raw.tracker {
            apply_raw_tracker(&mut tracker, v);
        }
        if let Some(ref v) = raw.output {
            apply_raw_output(&mut output, v);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        index,
        search,
        tracker,
        output,
        config_root,
    })
}

/// Applies raw index settings to result.
fn apply_raw_index(result: &mut IndexSettings, raw: &RawIndexSettings) {
    if let Some(ref entries) = raw.stop_words {
        result.stop_words = split_stop_words(entries);
    }
    if let Some(ref v) = raw.stop_word_language {
        result.stop_word_language = Some(v.clone());
    }
}

/// Flattens stop word entries, each of which may hold several space-separated words.
fn split_stop_words(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.split(' '))
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Applies raw search settings to result.
fn apply_raw_search(
    result: &mut SearchSettings,
    raw: &RawSearchSettings,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.max_results {
        result.max_results = v;
    }
    if let Some(v) = raw.relevance_epsilon {
        if !v.is_finite() || v < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "search.relevance_epsilon".into(),
                path: path.to_path_buf(),
                message: format!("expected a finite non-negative number, got {v}"),
            });
        }
        result.relevance_epsilon = v;
    }
    if let Some(ref v) = raw.default_status {
        result.default_status = v.clone();
    }
    Ok(())
}

/// Applies raw tracker settings to result.
fn apply_raw_tracker(result: &mut TrackerSettings, raw: &RawTrackerSettings) {
    if let Some(v) = raw.window {
        result.window = v;
    }
}

/// Applies raw output settings to result.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.page_size {
        result.page_size = v;
    }
    if let Some(v) = raw.format {
        result.format = v;
    }
}
