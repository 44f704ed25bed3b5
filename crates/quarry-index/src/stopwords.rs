//! Stop word sets.
//!
//! A [`StopWords`] set is fixed when the index is built. Words are matched
//! exactly: no case folding or other normalization is applied, so the set
//! must contain the same spelling that appears in documents and queries.
//!
//! Besides caller-supplied words, a set can be seeded with one of the
//! built-in language lists from the `stop-words` crate (Stopwords ISO).

use std::{collections::BTreeSet, str::FromStr};

use quarry_query::{StopWordFilter, is_valid_text, split_words};
use stop_words::LANGUAGE;

use crate::IndexError;

/// Built-in stop word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopWordLanguage {
    /// English.
    English,
    /// French.
    French,
    /// German.
    German,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Russian.
    Russian,
    /// Spanish.
    Spanish,
}

impl StopWordLanguage {
    /// Returns the word list for this language.
    fn words(self) -> &'static [&'static str] {
        let language = match self {
            Self::English => LANGUAGE::English,
            Self::French => LANGUAGE::French,
            Self::German => LANGUAGE::German,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Russian => LANGUAGE::Russian,
            Self::Spanish => LANGUAGE::Spanish,
        };
        stop_words::get(language)
    }
}

impl FromStr for StopWordLanguage {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "french" | "fr" => Ok(Self::French),
            "german" | "de" => Ok(Self::German),
            "italian" | "it" => Ok(Self::Italian),
            "portuguese" | "pt" => Ok(Self::Portuguese),
            "russian" | "ru" => Ok(Self::Russian),
            "spanish" | "es" => Ok(Self::Spanish),
            _ => Err(IndexError::InvalidLanguage(s.to_string())),
        }
    }
}

/// An immutable set of words excluded from indexing and from queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    /// The words, kept sorted for deterministic iteration.
    words: BTreeSet<String>,
}

impl StopWords {
    /// Creates an empty stop word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a collection of words.
    ///
    /// Empty strings are skipped. Fails if any word contains a control
    /// character.
    pub fn from_words<I, S>(words: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if !is_valid_text(word) {
                return Err(IndexError::InvalidStopWord {
                    word: word.to_string(),
                });
            }
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }
        Ok(Self { words: set })
    }

    /// Builds a set from one line of space-separated words.
    pub fn from_text(text: &str) -> Result<Self, IndexError> {
        if !is_valid_text(text) {
            return Err(IndexError::InvalidStopWord {
                word: text.to_string(),
            });
        }
        Self::from_words(split_words(text))
    }

    /// Adds the built-in list for `language` to this set.
    pub fn with_language(mut self, language: StopWordLanguage) -> Self {
        self.words
            .extend(language.words().iter().map(|word| (*word).to_string()));
        self
    }

    /// Checks if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stop words are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the stop words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl StopWordFilter for StopWords {
    fn is_stop_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_splits_on_spaces() {
        let sw = StopWords::from_text("и в  на").unwrap();
        assert_eq!(sw.len(), 3);
        assert!(sw.contains("и"));
        assert!(sw.contains("в"));
        assert!(sw.contains("на"));
    }

    #[test]
    fn from_words_skips_empty() {
        let sw = StopWords::from_words(["", "the", ""]).unwrap();
        assert_eq!(sw.iter().collect::<Vec<_>>(), vec!["the"]);
    }

    #[test]
    fn matching_is_exact() {
        let sw = StopWords::from_words(["the"]).unwrap();
        assert!(sw.contains("the"));
        assert!(!sw.contains("The"));
        assert!(!sw.contains("the,"));
    }

    #[test]
    fn control_characters_rejected() {
        let err = StopWords::from_words(["ok", "bad\u{3}"]).unwrap_err();
        assert_eq!(
            err,
            IndexError::InvalidStopWord {
                word: "bad\u{3}".into()
            }
        );
        assert!(StopWords::from_text("a\tb").is_err());
    }

    #[test]
    fn empty_set() {
        let sw = StopWords::new();
        assert!(sw.is_empty());
        assert!(!sw.contains(""));
    }

    #[test]
    fn english_language_list() {
        let sw = StopWords::new().with_language(StopWordLanguage::English);
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert!(!sw.contains("kubernetes"));
    }

    #[test]
    fn language_list_extends_custom_words() {
        let sw = StopWords::from_words(["quarry"])
            .unwrap()
            .with_language(StopWordLanguage::Russian);
        assert!(sw.contains("quarry"));
        assert!(sw.contains("и"));
    }

    #[test]
    fn parses_language_names() {
        assert_eq!("English".parse(), Ok(StopWordLanguage::English));
        assert_eq!("ru".parse(), Ok(StopWordLanguage::Russian));
        assert_eq!(
            "klingon".parse::<StopWordLanguage>(),
            Err(IndexError::InvalidLanguage("klingon".into()))
        );
    }
}
