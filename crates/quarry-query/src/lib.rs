//! Query parsing for quarry search.
//!
//! Queries are plain whitespace-separated words with a single prefix operator:
//!
//! - **Plus terms**: `cat` - words whose documents contribute relevance
//! - **Minus terms**: `-collar` - words whose documents are removed from results
//!
//! Stop words are dropped before classification, duplicate terms collapse, and
//! text containing ASCII control characters is rejected outright.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use quarry_query::parse;
//!
//! let stop_words: BTreeSet<String> = ["and".to_string()].into();
//! let query = parse("fluffy and cat -collar", &stop_words).unwrap();
//! assert!(query.plus.contains("fluffy"));
//! assert!(query.minus.contains("collar"));
//! assert!(!query.plus.contains("and"));
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::Query;
pub use error::QueryError;
pub use lexer::{is_valid_text, split_words};
pub use parser::{StopWordFilter, parse};
