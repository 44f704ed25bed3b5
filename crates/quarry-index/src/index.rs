//! The inverted index and document table.

use std::collections::BTreeMap;

use quarry_query::{is_valid_text, split_words};

use crate::{
    DocumentId, DocumentStatus, IndexError, SearchParams, StopWords,
    document::{DocumentRecord, average_rating},
};

/// In-memory document index with TF-IDF ranking.
///
/// Documents are added once and never modified or removed. For every
/// non-stop word the index keeps, per document, the word's term frequency:
/// its share of the document's words after stop word removal.
///
/// The index is single-writer: [`SearchIndex::add_document`] takes
/// `&mut self`, while every query takes `&self`.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    /// Words excluded from documents and queries.
    pub(crate) stop_words: StopWords,
    /// Word -> document -> term frequency.
    pub(crate) word_to_document_freqs: BTreeMap<String, BTreeMap<DocumentId, f64>>,
    /// Document -> word -> term frequency.
    document_to_word_freqs: BTreeMap<DocumentId, BTreeMap<String, f64>>,
    /// Status and rating of each indexed document.
    pub(crate) documents: BTreeMap<DocumentId, DocumentRecord>,
    /// Document ids in insertion order.
    document_ids: Vec<DocumentId>,
    /// Result cap and tie tolerance.
    pub(crate) params: SearchParams,
}

impl SearchIndex {
    /// Creates an empty index with the given stop words and default parameters.
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            ..Self::default()
        }
    }

    /// Creates an empty index from a collection of stop words.
    ///
    /// Fails with [`IndexError::InvalidStopWord`] if a word contains a control
    /// character.
    pub fn from_stop_words<I, S>(words: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(StopWords::from_words(words)?))
    }

    /// Creates an empty index from one line of space-separated stop words.
    pub fn from_stop_words_text(text: &str) -> Result<Self, IndexError> {
        Ok(Self::new(StopWords::from_text(text)?))
    }

    /// Replaces the ranking parameters.
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the ranking parameters.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Returns the stop words.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Indexes a document.
    ///
    /// All validation happens before the index is touched, so a failed call
    /// leaves it unchanged. Errors, in the order they are checked:
    ///
    /// - [`IndexError::InvalidId`] if `id` is negative
    /// - [`IndexError::DuplicateId`] if `id` is already indexed
    /// - [`IndexError::InvalidText`] if `text` contains a control character
    /// - [`IndexError::EmptyRatings`] if `ratings` is empty
    ///
    /// A document whose text is empty after stop word removal is recorded
    /// with no words: it counts toward the document total but matches no
    /// query.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<(), IndexError> {
        if id < 0 {
            return Err(IndexError::InvalidId { id });
        }
        if self.documents.contains_key(&id) {
            return Err(IndexError::DuplicateId { id });
        }
        if !is_valid_text(text) {
            return Err(IndexError::InvalidText { id });
        }
        let rating = average_rating(ratings).ok_or(IndexError::EmptyRatings { id })?;

        let words = self.split_into_words_no_stop(text);
        let mut word_freqs: BTreeMap<String, f64> = BTreeMap::new();
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *word_freqs.entry(word.to_string()).or_insert(0.0) += inv_word_count;
            }
        }

        for (word, tf) in &word_freqs {
            self.word_to_document_freqs
                .entry(word.clone())
                .or_default()
                .insert(id, *tf);
        }

        tracing::debug!(id, %status, rating, words = word_freqs.len(), "document indexed");

        self.document_to_word_freqs.insert(id, word_freqs);
        self.documents.insert(id, DocumentRecord { status, rating });
        self.document_ids.push(id);
        Ok(())
    }

    /// Returns the number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Returns the id of the document inserted at position `index`.
    ///
    /// Fails with [`IndexError::OutOfRange`] if `index` is negative or not
    /// below the document count.
    pub fn document_id(&self, index: i64) -> Result<DocumentId, IndexError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.document_ids.get(i).copied())
            .ok_or(IndexError::OutOfRange {
                index,
                count: self.document_ids.len(),
            })
    }

    /// Iterates over document ids in insertion order.
    pub fn document_ids(&self) -> impl ExactSizeIterator<Item = DocumentId> + '_ {
        self.document_ids.iter().copied()
    }

    /// Returns the term frequencies of one document, or `None` if it is not indexed.
    pub fn word_frequencies(&self, id: DocumentId) -> Option<&BTreeMap<String, f64>> {
        self.document_to_word_freqs.get(&id)
    }

    /// Returns the status and rating of a document.
    pub fn document_info(&self, id: DocumentId) -> Option<(DocumentStatus, i32)> {
        self.documents
            .get(&id)
            .map(|record| (record.status, record.rating))
    }

    /// Splits text into words, dropping stop words.
    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Vec<&'t str> {
        split_words(text)
            .filter(|word| !self.stop_words.contains(word))
            .collect()
    }
}
