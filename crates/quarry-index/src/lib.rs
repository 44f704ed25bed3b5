//! In-memory TF-IDF search index for quarry.
//!
//! This crate provides the search core:
//! - Document indexing with per-word term frequencies and stop word removal
//! - Ranked retrieval with plus/minus queries and caller-supplied filters
//! - Per-document query matching
//! - A sliding-window tracker of queries that returned nothing
//!
//! # Example
//!
//! ```
//! use quarry_index::{DocumentStatus, SearchIndex};
//!
//! let mut index = SearchIndex::from_stop_words_text("and with").unwrap();
//! index
//!     .add_document(0, "white cat with a collar", DocumentStatus::Actual, &[8, -3])
//!     .unwrap();
//! index
//!     .add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])
//!     .unwrap();
//! index
//!     .add_document(2, "groomed dog", DocumentStatus::Actual, &[5])
//!     .unwrap();
//!
//! let results = index.find_top_documents("fluffy cat -collar").unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].id, 1);
//! ```

#![warn(missing_docs)]

mod document;
mod error;
mod index;
mod params;
mod ranking;
mod stopwords;
mod tracker;

pub use document::{Document, DocumentId, DocumentStatus};
pub use error::IndexError;
pub use index::SearchIndex;
pub use params::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON, SearchParams};
pub use quarry_query::{Query, QueryError, parse as parse_query};
pub use stopwords::{StopWordLanguage, StopWords};
pub use tracker::{DEFAULT_WINDOW, RequestQueue, RequestTracker};
