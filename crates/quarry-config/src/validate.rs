//! Configuration validation.
//!
//! Reports settings that load without error but will not behave the way the user expects.

use std::fmt;

use quarry_index::{DocumentStatus, StopWordLanguage};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `search.max_results` is zero, so every search returns nothing.
    ZeroMaxResults,
    /// `tracker.window` is zero; the tracker keeps one request instead.
    ZeroWindow,
    /// `index.stop_word_language` names a language without a stop word list.
    UnknownStopWordLanguage {
        /// Configured language.
        language: String,
    },
    /// `search.default_status` is not a document status.
    UnknownDefaultStatus {
        /// Configured status.
        status: String,
    },
    /// A stop word contains control characters and will be rejected by the index.
    InvalidStopWord {
        /// Offending word.
        word: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxResults => write!(f, "search.max_results is 0; searches return nothing"),
            Self::ZeroWindow => {
                write!(f, "tracker.window is 0; only the latest request is tracked")
            }
            Self::UnknownStopWordLanguage { language } => {
                write!(f, "no built-in stop words for language '{language}'")
            }
            Self::UnknownDefaultStatus { status } => {
                write!(f, "unknown document status '{status}' in search.default_status")
            }
            Self::InvalidStopWord { word } => {
                write!(f, "stop word {word:?} contains control characters")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.search.max_results == 0 {
        warnings.push(ConfigWarning::ZeroMaxResults);
    }
    if config.tracker.window == 0 {
        warnings.push(ConfigWarning::ZeroWindow);
    }
    if let Some(ref language) = config.index.stop_word_language
        && language.parse::<StopWordLanguage>().is_err()
    {
        warnings.push(ConfigWarning::UnknownStopWordLanguage {
            language: language.clone(),
        });
    }
    if config.search.default_status.parse::<DocumentStatus>().is_err() {
        warnings.push(ConfigWarning::UnknownDefaultStatus {
            status: config.search.default_status.clone(),
        });
    }
    warnings.extend(
        config
            .index
            .stop_words
            .iter()
            .filter(|word| word.bytes().any(|b| b < b' '))
            .map(|word| ConfigWarning::InvalidStopWord { word: word.clone() }),
    );

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_clean() {
        assert!(validate_config(&Config::default()).is_empty());
    }

    #[test]
    fn test_zero_limits_warn() {
        let mut config = Config::default();
        config.search.max_results = 0;
        config.tracker.window = 0;
        assert_eq!(
            validate_config(&config),
            vec![ConfigWarning::ZeroMaxResults, ConfigWarning::ZeroWindow]
        );
    }

    #[test]
    fn test_language_and_status_checked_case_insensitively() {
        let mut config = Config::default();
        config.index.stop_word_language = Some("Russian".into());
        config.search.default_status = "BANNED".into();
        assert!(validate_config(&config).is_empty());

        config.index.stop_word_language = Some("klingon".into());
        config.search.default_status = "archived".into();
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 2);
        assert_eq!(
            warnings[0].to_string(),
            "no built-in stop words for language 'klingon'"
        );
        assert!(warnings[1].to_string().contains("'archived'"));
    }

    #[test]
    fn test_status_ordinal_accepted() {
        let mut config = Config::default();
        config.search.default_status = "2".into();
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_padded_language_accepted_and_loadable() {
        let mut config = Config::default();
        config.index.stop_word_language = Some(" en ".into());
        assert!(validate_config(&config).is_empty());
        assert_eq!(" en ".parse(), Ok(StopWordLanguage::English));
    }

    #[test]
    fn test_warnings_agree_with_parsers() {
        for language in ["english", "FR", "de", "ru ", "xx", "", "eng"] {
            let mut config = Config::default();
            config.index.stop_word_language = Some(language.into());
            let warned = !validate_config(&config).is_empty();
            assert_eq!(warned, language.parse::<StopWordLanguage>().is_err(), "{language:?}");
        }
        for status in ["actual", "Removed", "3", " 1", "4", "archived"] {
            let mut config = Config::default();
            config.search.default_status = status.into();
            let warned = !validate_config(&config).is_empty();
            assert_eq!(warned, status.parse::<DocumentStatus>().is_err(), "{status:?}");
        }
    }

    #[test]
    fn test_control_character_stop_word() {
        let mut config = Config::default();
        config.index.stop_words = vec!["и".into(), "bad\u{1}".into()];
        assert_eq!(
            validate_config(&config),
            vec![ConfigWarning::InvalidStopWord {
                word: "bad\u{1}".into()
            }]
        );
    }
}
