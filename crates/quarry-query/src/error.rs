//! Error types for query parsing.

use thiserror::Error;

/// Errors produced while parsing a raw query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The raw query was the empty string.
    #[error("query is empty")]
    Empty,

    /// The raw query contains a control character.
    #[error("query contains control characters")]
    InvalidText,

    /// A query word starts with two consecutive minus signs.
    #[error("malformed minus word '{word}': more than one leading '-'")]
    MalformedMinus {
        /// The offending word, as written.
        word: String,
    },

    /// A query word is a lone minus sign.
    #[error("dangling '-' with no word after it")]
    DanglingMinus,
}

impl QueryError {
    /// Returns a suggestion for fixing the error, if one applies.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some("Provide at least one word to search for"),
            Self::InvalidText => Some("Remove tabs, newlines and other control characters"),
            Self::MalformedMinus { .. } => Some("Use a single '-' to exclude a word, e.g. '-collar'"),
            Self::DanglingMinus => Some("Attach the '-' directly to the word to exclude"),
        }
    }
}
