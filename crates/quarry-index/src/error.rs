//! Error types for the quarry-index crate.

use quarry_query::QueryError;
use thiserror::Error;

use crate::DocumentId;

/// Errors that can occur when building or querying the index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A document id was negative.
    #[error("document id {id} is negative")]
    InvalidId {
        /// The rejected id.
        id: DocumentId,
    },

    /// A document with this id is already indexed.
    #[error("document id {id} is already indexed")]
    DuplicateId {
        /// The rejected id.
        id: DocumentId,
    },

    /// Document text contains control characters.
    #[error("text of document {id} contains control characters")]
    InvalidText {
        /// Id of the rejected document.
        id: DocumentId,
    },

    /// A document was supplied without any ratings.
    #[error("document {id} has no ratings")]
    EmptyRatings {
        /// Id of the rejected document.
        id: DocumentId,
    },

    /// A stop word contains control characters.
    #[error("stop word {word:?} contains control characters")]
    InvalidStopWord {
        /// The rejected stop word.
        word: String,
    },

    /// Unsupported stop word language.
    #[error("unsupported stop word language: {0}")]
    InvalidLanguage(String),

    /// An insertion-order position was outside the indexed documents.
    #[error("document position {index} is out of range (document count {count})")]
    OutOfRange {
        /// The requested position.
        index: i64,
        /// Number of indexed documents.
        count: usize,
    },

    /// A document id is not present in the index.
    #[error("document {id} is not indexed")]
    UnknownDocument {
        /// The requested id.
        id: DocumentId,
    },

    /// The raw query could not be parsed.
    #[error(transparent)]
    Query(#[from] QueryError),
}
