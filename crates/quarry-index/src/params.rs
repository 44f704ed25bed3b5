//! Parameter types for ranking.

/// Default cap on the number of documents a search returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Default tolerance under which two relevance values count as equal.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Parameters controlling how ranked results are cut and ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Maximum documents returned by one search. Default: 5.
    pub max_results: usize,
    /// Relevance differences below this are resolved by rating. Default: 1e-6.
    pub relevance_epsilon: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
        }
    }
}

impl SearchParams {
    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the relevance tolerance.
    pub fn with_relevance_epsilon(mut self, relevance_epsilon: f64) -> Self {
        self.relevance_epsilon = relevance_epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = SearchParams::default();
        assert_eq!(params.max_results, 5);
        assert!((params.relevance_epsilon - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn builders_override() {
        let params = SearchParams::default()
            .with_max_results(10)
            .with_relevance_epsilon(0.01);
        assert_eq!(params.max_results, 10);
        assert!((params.relevance_epsilon - 0.01).abs() < f64::EPSILON);
    }
}
