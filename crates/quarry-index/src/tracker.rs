//! Sliding-window tracking of queries that found nothing.
//!
//! Every recorded query advances a logical clock by one tick. The tracker
//! remembers the outcome of the queries in the last `window` ticks (a day of
//! minutes, 1440, by default) and how many of them returned no documents.

use std::collections::VecDeque;

use crate::{Document, DocumentId, DocumentStatus, IndexError, SearchIndex};

/// Default window length in ticks.
pub const DEFAULT_WINDOW: u64 = 1440;

/// One remembered query outcome.
#[derive(Debug, Clone, Copy)]
struct QueryResult {
    /// Tick at which the query was recorded.
    tick: u64,
    /// Whether the query returned no documents.
    empty: bool,
}

/// Fixed-window counter of no-result queries.
///
/// Knows nothing about ranking: it only consumes result counts.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    /// Outcomes inside the window, oldest first.
    requests: VecDeque<QueryResult>,
    /// Window length in ticks.
    window: u64,
    /// Tick of the most recent query.
    current_tick: u64,
    /// Number of entries in `requests` with `empty` set.
    no_result_requests: usize,
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }
}

impl RequestTracker {
    /// Creates a tracker with the default 1440-tick window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with a custom window length.
    ///
    /// A zero window is treated as one tick.
    pub fn with_window(window: u64) -> Self {
        Self {
            requests: VecDeque::new(),
            window: window.max(1),
            current_tick: 0,
            no_result_requests: 0,
        }
    }

    /// Records the outcome of one query and advances the clock.
    ///
    /// At most one expired entry is evicted per call: the clock moves one
    /// tick per query, so at most one entry can fall out of the window.
    pub fn record(&mut self, result_count: usize) {
        self.current_tick += 1;

        if let Some(oldest) = self.requests.front().copied()
            && self.current_tick - oldest.tick >= self.window
        {
            self.requests.pop_front();
            if oldest.empty {
                self.no_result_requests -= 1;
            }
            tracing::debug!(tick = oldest.tick, empty = oldest.empty, "request evicted");
        }

        let empty = result_count == 0;
        self.requests.push_back(QueryResult {
            tick: self.current_tick,
            empty,
        });
        if empty {
            self.no_result_requests += 1;
        }
    }

    /// Returns how many queries in the window returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    /// Returns the number of queries currently in the window.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if no queries have been recorded.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Returns the window length in ticks.
    pub fn window(&self) -> u64 {
        self.window
    }
}

/// Runs searches against an index and tracks which ones found nothing.
///
/// Queries that fail to parse are not recorded.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    /// Index queried by every request.
    index: &'a SearchIndex,
    /// Outcome window.
    tracker: RequestTracker,
}

impl<'a> RequestQueue<'a> {
    /// Creates a queue over `index` with the default window.
    pub fn new(index: &'a SearchIndex) -> Self {
        Self::with_tracker(index, RequestTracker::new())
    }

    /// Creates a queue over `index` remembering the last `window` requests.
    pub fn with_window(index: &'a SearchIndex, window: u64) -> Self {
        Self::with_tracker(index, RequestTracker::with_window(window))
    }

    /// Creates a queue over `index` with an explicit tracker.
    pub fn with_tracker(index: &'a SearchIndex, tracker: RequestTracker) -> Self {
        Self { index, tracker }
    }

    /// Searches `Actual` documents and records the outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>, IndexError> {
        let results = self.index.find_top_documents(raw_query)?;
        self.tracker.record(results.len());
        Ok(results)
    }

    /// Searches documents with `status` and records the outcome.
    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>, IndexError> {
        let results = self.index.find_top_documents_by_status(raw_query, status)?;
        self.tracker.record(results.len());
        Ok(results)
    }

    /// Searches documents accepted by `predicate` and records the outcome.
    pub fn add_find_request_with<P>(
        &mut self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>, IndexError>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        let results = self.index.find_top_documents_with(raw_query, predicate)?;
        self.tracker.record(results.len());
        Ok(results)
    }

    /// Returns how many queries in the window returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.tracker.no_result_requests()
    }

    /// Returns the underlying tracker.
    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }
}
