//! TF-IDF ranking and document matching.
//!
//! Relevance of a document for a query is the sum, over the query's plus
//! terms found in the document, of `tf * idf` where
//! `idf = ln(document_count / documents_containing_term)`. Any document that
//! contains a minus term is dropped, whether or not it passed the caller's
//! predicate.

use std::collections::BTreeMap;

use quarry_query::{Query, parse};

use crate::{Document, DocumentId, DocumentStatus, IndexError, SearchIndex};

impl SearchIndex {
    /// Finds the best `Actual` documents for a raw query.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>, IndexError> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    /// Finds the best documents with the given status for a raw query.
    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>, IndexError> {
        self.find_top_documents_with(raw_query, |_, document_status, _| {
            document_status == status
        })
    }

    /// Finds the best documents accepted by `predicate` for a raw query.
    ///
    /// The predicate receives each candidate's id, status and rating. Results
    /// are sorted by descending relevance; relevances closer than
    /// [`SearchParams::relevance_epsilon`](crate::SearchParams) are ordered by
    /// descending rating instead. At most
    /// [`SearchParams::max_results`](crate::SearchParams) documents are
    /// returned.
    pub fn find_top_documents_with<P>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>, IndexError>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let query = parse(raw_query, &self.stop_words)?;
        let mut results = self.find_all_documents(&query, predicate);
        order_by_relevance(&mut results, self.params.relevance_epsilon);
        results.truncate(self.params.max_results);

        tracing::trace!(
            query = %query.to_query_string(),
            results = results.len(),
            "search finished"
        );
        Ok(results)
    }

    /// Reports which plus terms of a query occur in one document.
    ///
    /// Terms are returned in lexicographic order together with the document's
    /// status. If the document contains any minus term the term list is
    /// empty. Fails with [`IndexError::UnknownDocument`] if `id` is not
    /// indexed.
    pub fn match_document<'q>(
        &self,
        raw_query: &'q str,
        id: DocumentId,
    ) -> Result<(Vec<&'q str>, DocumentStatus), IndexError> {
        let query = parse(raw_query, &self.stop_words)?;
        let record = self
            .documents
            .get(&id)
            .ok_or(IndexError::UnknownDocument { id })?;

        if query.minus.iter().any(|term| self.contains_term(term, id)) {
            return Ok((Vec::new(), record.status));
        }

        let matched = query
            .plus
            .iter()
            .copied()
            .filter(|term| self.contains_term(term, id))
            .collect();
        Ok((matched, record.status))
    }

    /// Computes the inverse document frequency of an indexed term.
    ///
    /// Returns `None` for a term that occurs in no document.
    pub fn inverse_document_frequency(&self, term: &str) -> Option<f64> {
        let postings = self.word_to_document_freqs.get(term)?;
        Some(idf(self.document_count(), postings.len()))
    }

    /// Returns true if document `id` contains `term`.
    fn contains_term(&self, term: &str, id: DocumentId) -> bool {
        self.word_to_document_freqs
            .get(term)
            .is_some_and(|postings| postings.contains_key(&id))
    }

    /// Scores every document matching the query, unsorted and uncapped.
    fn find_all_documents<P>(&self, query: &Query<'_>, predicate: P) -> Vec<Document>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let mut document_to_relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();

        for term in &query.plus {
            let Some(postings) = self.word_to_document_freqs.get(*term) else {
                continue;
            };
            let term_idf = idf(self.document_count(), postings.len());
            for (&id, &tf) in postings {
                let Some(record) = self.documents.get(&id) else {
                    continue;
                };
                if predicate(id, record.status, record.rating) {
                    *document_to_relevance.entry(id).or_insert(0.0) += tf * term_idf;
                }
            }
        }

        for term in &query.minus {
            let Some(postings) = self.word_to_document_freqs.get(*term) else {
                continue;
            };
            for id in postings.keys() {
                document_to_relevance.remove(id);
            }
        }

        document_to_relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.documents.get(&id).map(|record| Document {
                    id,
                    relevance,
                    rating: record.rating,
                })
            })
            .collect()
    }
}

/// Natural-log IDF for a term found in `containing` of `total` documents.
fn idf(total: usize, containing: usize) -> f64 {
    (total as f64 / containing as f64).ln()
}

/// Sorts results by descending relevance, breaking near-ties by rating.
///
/// Results are first put in strict descending relevance order. Each result is
/// then moved up past neighbours whose relevance is within `epsilon` of its
/// own and which it outranks by rating (ties by ascending id). It stops at the
/// first neighbour that is further away or rated at least as high, so every
/// adjacent pair ends up either at least `epsilon` apart in relevance or
/// ordered by rating.
fn order_by_relevance(results: &mut [Document], epsilon: f64) {
    results.sort_by(|a, b| {
        b.relevance
            .total_cmp(&a.relevance)
            .then_with(|| b.rating.cmp(&a.rating))
            .then_with(|| a.id.cmp(&b.id))
    });

    for i in 1..results.len() {
        let mut j = i;
        while j > 0 && outranks_near_tie(&results[j], &results[j - 1], epsilon) {
            results.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Returns true if `lower` should sit above its neighbour `upper`.
fn outranks_near_tie(lower: &Document, upper: &Document, epsilon: f64) -> bool {
    (upper.relevance - lower.relevance).abs() < epsilon
        && lower
            .rating
            .cmp(&upper.rating)
            .then_with(|| upper.id.cmp(&lower.id))
            .is_gt()
}
