//! Corpus input: reading the line-oriented format and building an index from it.
//!
//! The input is:
//!
//! ```text
//! <stop words separated by spaces>
//! <document count N>
//! <document 0 text>
//! <k> <rating 1> ... <rating k>
//! ... (N text/ratings pairs)
//! <query>
//! ...
//! ```
//!
//! Documents get consecutive ids starting at 0. Blank lines after the documents are skipped.

use std::{io, io::BufRead, path::PathBuf};

use quarry_config::IndexSettings;
use quarry_index::{
    DocumentId, DocumentStatus, IndexError, SearchIndex, SearchParams, StopWordLanguage,
    StopWords,
};
use thiserror::Error;

/// A source of input lines without their terminators.
pub trait LineSource {
    /// Returns the next line, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Errors raised while reading a corpus or indexing it.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The corpus file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The input ended before a required line.
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// 1-based line number that is missing.
        line: usize,
        /// What the line should have held.
        expected: &'static str,
    },

    /// A count or rating is not a number.
    #[error("line {line}: expected {expected}, found {found:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// What was expected.
        expected: &'static str,
        /// Offending token.
        found: String,
    },

    /// A ratings line holds a different number of ratings than it declares.
    #[error("line {line}: ratings line declares {declared} ratings but lists {found}")]
    RatingCount {
        /// 1-based line number.
        line: usize,
        /// Count given by the first number.
        declared: usize,
        /// Ratings actually present.
        found: usize,
    },

    /// The stop words could not be assembled.
    #[error("invalid stop words: {0}")]
    StopWords(#[source] IndexError),

    /// The index rejected a document.
    #[error("line {line}: {source}")]
    Index {
        /// 1-based line number of the document text.
        line: usize,
        /// Index error.
        source: IndexError,
    },
}

/// One document as read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusDocument {
    /// 1-based line number of the text.
    pub line: usize,
    /// Document text.
    pub text: String,
    /// User ratings.
    pub ratings: Vec<i32>,
}

/// A parsed corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// The stop word line, verbatim.
    pub stop_words: String,
    /// Documents in input order.
    pub documents: Vec<CorpusDocument>,
    /// Non-empty lines after the documents.
    pub queries: Vec<String>,
}

/// Line source that remembers how many lines it has handed out.
struct Numbered<'a, S: ?Sized> {
    /// Underlying source.
    source: &'a mut S,
    /// Number of the last line returned.
    line: usize,
}

impl<S: LineSource + ?Sized> Numbered<'_, S> {
    /// Returns the next line or fails with `expected` as the description.
    fn require(&mut self, expected: &'static str) -> Result<String, DriverError> {
        match self.advance()? {
            Some(line) => Ok(line),
            None => Err(DriverError::UnexpectedEof {
                line: self.line + 1,
                expected,
            }),
        }
    }

    /// Returns the next line, if any.
    fn advance(&mut self) -> Result<Option<String>, DriverError> {
        let line = self.source.next_line()?;
        if line.is_some() {
            self.line += 1;
        }
        Ok(line)
    }
}

/// Reads a full corpus from `source`.
pub fn read_corpus<S: LineSource + ?Sized>(source: &mut S) -> Result<Corpus, DriverError> {
    let mut lines = Numbered { source, line: 0 };

    let stop_words = lines.require("stop words")?;
    let count_line = lines.require("document count")?;
    let count = parse_count(&count_line, lines.line)?;

    let mut documents = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let text = lines.require("document text")?;
        let line = lines.line;
        let ratings_line = lines.require("ratings")?;
        let ratings = parse_ratings(&ratings_line, lines.line)?;
        documents.push(CorpusDocument {
            line,
            text,
            ratings,
        });
    }

    let mut queries = Vec::new();
    while let Some(line) = lines.advance()? {
        if !line.trim().is_empty() {
            queries.push(line);
        }
    }

    Ok(Corpus {
        stop_words,
        documents,
        queries,
    })
}

/// Parses the document count line.
fn parse_count(text: &str, line: usize) -> Result<usize, DriverError> {
    let trimmed = text.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .filter(|n| DocumentId::try_from(*n).is_ok())
        .ok_or_else(|| DriverError::InvalidNumber {
            line,
            expected: "document count",
            found: trimmed.to_string(),
        })
}

/// Parses a `k r1 .. rk` ratings line.
fn parse_ratings(text: &str, line: usize) -> Result<Vec<i32>, DriverError> {
    let mut tokens = text.split_whitespace();
    let declared = tokens
        .next()
        .ok_or(DriverError::InvalidNumber {
            line,
            expected: "rating count",
            found: String::new(),
        })
        .and_then(|token| {
            token.parse::<usize>().map_err(|_| DriverError::InvalidNumber {
                line,
                expected: "rating count",
                found: token.to_string(),
            })
        })?;

    let ratings = tokens
        .map(|token| {
            token.parse::<i32>().map_err(|_| DriverError::InvalidNumber {
                line,
                expected: "rating",
                found: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ratings.len() != declared {
        return Err(DriverError::RatingCount {
            line,
            declared,
            found: ratings.len(),
        });
    }
    Ok(ratings)
}

/// Assembles the stop word set from the corpus line and the configured settings.
pub fn stop_words(line: &str, settings: &IndexSettings) -> Result<StopWords, DriverError> {
    let words = line
        .split(' ')
        .chain(settings.stop_words.iter().map(String::as_str));
    let mut set = StopWords::from_words(words).map_err(DriverError::StopWords)?;
    if let Some(ref name) = settings.stop_word_language {
        let language: StopWordLanguage = name.parse().map_err(DriverError::StopWords)?;
        set = set.with_language(language);
    }
    Ok(set)
}

/// Indexes every corpus document with consecutive ids starting at 0.
pub fn build_index(
    corpus: &Corpus,
    settings: &IndexSettings,
    params: SearchParams,
    status: DocumentStatus,
) -> Result<SearchIndex, DriverError> {
    let mut index = SearchIndex::new(stop_words(&corpus.stop_words, settings)?).with_params(params);
    for (id, doc) in (0..).zip(&corpus.documents) {
        index
            .add_document(id, &doc.text, status, &doc.ratings)
            .map_err(|source| DriverError::Index {
                line: doc.line,
                source,
            })?;
    }
    Ok(index)
}
