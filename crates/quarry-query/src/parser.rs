//! Query parser.
//!
//! Turns raw query text into a [`Query`] of plus and minus terms.
//!
//! # Grammar
//!
//! ```text
//! query → word*            (words separated by spaces)
//! word  → "-" TERM         minus term
//!       | TERM             plus term
//! ```
//!
//! Stop words are removed before a word is classified, so a stop word written
//! with a leading `-` is still treated as a minus term.

use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

use crate::{
    ast::Query,
    error::QueryError,
    lexer::{is_valid_text, split_words},
};

/// A source of stop words consulted while parsing.
pub trait StopWordFilter {
    /// Returns true if `word` should be ignored.
    fn is_stop_word(&self, word: &str) -> bool;
}

impl<S: BuildHasher> StopWordFilter for HashSet<String, S> {
    fn is_stop_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl StopWordFilter for BTreeSet<String> {
    fn is_stop_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<T: StopWordFilter + ?Sized> StopWordFilter for &T {
    fn is_stop_word(&self, word: &str) -> bool {
        (**self).is_stop_word(word)
    }
}

/// Classification of a single query word.
#[derive(Debug, PartialEq, Eq)]
enum QueryWord<'a> {
    /// A required term.
    Plus(&'a str),
    /// An excluded term, without its leading `-`.
    Minus(&'a str),
}

/// Classifies one non-empty word.
fn parse_word(word: &str) -> Result<QueryWord<'_>, QueryError> {
    match word.strip_prefix('-') {
        None => Ok(QueryWord::Plus(word)),
        Some("") => Err(QueryError::DanglingMinus),
        Some(rest) if rest.starts_with('-') => Err(QueryError::MalformedMinus {
            word: word.to_string(),
        }),
        Some(rest) => Ok(QueryWord::Minus(rest)),
    }
}

/// Parses a raw query string.
///
/// Returns [`QueryError::Empty`] for an empty string and
/// [`QueryError::InvalidText`] if the text holds control characters. A query
/// made only of spaces or stop words parses to an empty [`Query`].
pub fn parse<'a, S>(raw: &'a str, stop_words: &S) -> Result<Query<'a>, QueryError>
where
    S: StopWordFilter + ?Sized,
{
    if raw.is_empty() {
        return Err(QueryError::Empty);
    }
    if !is_valid_text(raw) {
        return Err(QueryError::InvalidText);
    }

    let mut query = Query::default();
    for word in split_words(raw).filter(|w| !stop_words.is_stop_word(w)) {
        match parse_word(word)? {
            QueryWord::Plus(term) => {
                query.plus.insert(term);
            }
            QueryWord::Minus(term) => {
                query.minus.insert(term);
            }
        }
    }

    Ok(query)
}
