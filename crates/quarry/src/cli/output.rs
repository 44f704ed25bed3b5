//! Rendering and JSON serialization for CLI output.
//!
//! Every writer takes the sink as a parameter so commands can print to stdout while tests
//! render into a buffer.

use std::{
    io::{self, Write},
    num::NonZeroUsize,
};

use quarry_config::OutputFormat;
use quarry_index::{Document, DocumentId, DocumentStatus};
use serde::Serialize;

use crate::cli::page::Paginator;

/// Line printed between pages of text output.
const PAGE_BREAK: &str = "Page break";

/// Ranked results for one query.
#[derive(Debug, Serialize)]
pub struct QueryResults<'q> {
    /// The query as given.
    pub query: &'q str,
    /// Number of documents returned.
    pub total_matches: usize,
    /// Documents in rank order.
    pub results: Vec<Document>,
}

impl<'q> QueryResults<'q> {
    /// Wraps the ranked documents for `query`.
    pub fn new(query: &'q str, results: Vec<Document>) -> Self {
        Self {
            query,
            total_matches: results.len(),
            results,
        }
    }
}

/// Query words found in one document.
#[derive(Debug, Serialize)]
pub struct MatchReport<'q> {
    /// Document the query was matched against.
    pub document_id: DocumentId,
    /// The document's status.
    pub status: DocumentStatus,
    /// Matched plus words in lexicographic order; empty if a minus word matched.
    pub words: Vec<&'q str>,
}

/// Match reports for one query.
#[derive(Debug, Serialize)]
pub struct QueryMatches<'q> {
    /// The query as given.
    pub query: &'q str,
    /// One report per matched document.
    pub matches: Vec<MatchReport<'q>>,
}

/// Request tracker summary.
#[derive(Debug, Serialize)]
pub struct RequestStats {
    /// Queries run.
    pub requests: usize,
    /// Queries still inside the window.
    pub in_window: usize,
    /// Queries inside the window that found nothing.
    pub no_result_requests: usize,
    /// Window length in requests.
    pub window: u64,
}

/// JSON envelope for per-query output.
#[derive(Serialize)]
struct JsonQueries<'a, T> {
    /// Results grouped by query.
    queries: &'a [T],
}

/// Writes `value` as pretty JSON followed by a newline.
fn write_json<W: Write + ?Sized, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Writes ranked results for each query.
///
/// Text output is split into pages of `page_size` documents when given.
pub fn write_search<W: Write + ?Sized>(
    out: &mut W,
    queries: &[QueryResults<'_>],
    format: OutputFormat,
    page_size: Option<NonZeroUsize>,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &JsonQueries { queries });
    }

    for query in queries {
        writeln!(out, "Results for \"{}\":", query.query)?;
        match page_size {
            Some(size) => {
                let pages = Paginator::new(&query.results, size);
                for (n, page) in pages.iter().enumerate() {
                    if n > 0 {
                        writeln!(out, "{PAGE_BREAK}")?;
                    }
                    write_documents(out, page)?;
                }
            }
            None => write_documents(out, &query.results)?,
        }
    }
    Ok(())
}

/// Writes one line per document.
fn write_documents<W: Write + ?Sized>(out: &mut W, documents: &[Document]) -> io::Result<()> {
    for document in documents {
        writeln!(out, "{document}")?;
    }
    Ok(())
}

/// Writes match reports for each query.
pub fn write_matches<W: Write + ?Sized>(
    out: &mut W,
    queries: &[QueryMatches<'_>],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &JsonQueries { queries });
    }

    for query in queries {
        writeln!(out, "Matches for \"{}\":", query.query)?;
        for report in &query.matches {
            write!(
                out,
                "{{ document_id = {}, status = {}, words =",
                report.document_id,
                report.status.ordinal()
            )?;
            for word in &report.words {
                write!(out, " {word}")?;
            }
            writeln!(out, "}}")?;
        }
    }
    Ok(())
}

/// Writes the request tracker summary.
pub fn write_stats<W: Write + ?Sized>(
    out: &mut W,
    stats: &RequestStats,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, stats);
    }
    writeln!(out, "Total empty requests: {}", stats.no_result_requests)?;
    writeln!(
        out,
        "Requests in window: {} of {} (window {})",
        stats.in_window, stats.requests, stats.window
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: DocumentId, relevance: f64, rating: i32) -> Document {
        Document {
            id,
            relevance,
            rating,
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn search_text_without_pages() {
        let queries = [QueryResults::new("cat", vec![doc(1, 0.5, 5), doc(0, 0.25, -1)])];
        let text = render(|out| write_search(out, &queries, OutputFormat::Text, None));
        assert_eq!(
            text,
            "Results for \"cat\":\n\
             { document_id = 1, relevance = 0.5, rating = 5 }\n\
             { document_id = 0, relevance = 0.25, rating = -1 }\n"
        );
    }

    #[test]
    fn search_text_with_page_breaks() {
        let queries = [QueryResults::new(
            "dog",
            vec![doc(1, 0.3, 1), doc(2, 0.2, 1), doc(3, 0.1, 1)],
        )];
        let text = render(|out| write_search(out, &queries, OutputFormat::Text, NonZeroUsize::new(2)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], PAGE_BREAK);
        assert!(lines[4].starts_with("{ document_id = 3,"));
    }

    #[test]
    fn search_json() {
        let queries = [QueryResults::new("cat", vec![doc(4, 1.5, 2)])];
        let text = render(|out| write_search(out, &queries, OutputFormat::Json, None));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["queries"][0]["query"], "cat");
        assert_eq!(value["queries"][0]["total_matches"], 1);
        assert_eq!(value["queries"][0]["results"][0]["id"], 4);
        assert_eq!(value["queries"][0]["results"][0]["rating"], 2);
    }

    #[test]
    fn match_text_lists_words() {
        let queries = [QueryMatches {
            query: "fluffy cat -collar",
            matches: vec![
                MatchReport {
                    document_id: 0,
                    status: DocumentStatus::Actual,
                    words: vec![],
                },
                MatchReport {
                    document_id: 1,
                    status: DocumentStatus::Banned,
                    words: vec!["cat", "fluffy"],
                },
            ],
        }];
        let text = render(|out| write_matches(out, &queries, OutputFormat::Text));
        assert_eq!(
            text,
            "Matches for \"fluffy cat -collar\":\n\
             { document_id = 0, status = 0, words =}\n\
             { document_id = 1, status = 2, words = cat fluffy}\n"
        );
    }

    #[test]
    fn match_json_uses_status_names() {
        let queries = [QueryMatches {
            query: "cat",
            matches: vec![MatchReport {
                document_id: 3,
                status: DocumentStatus::Removed,
                words: vec!["cat"],
            }],
        }];
        let text = render(|out| write_matches(out, &queries, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["queries"][0]["matches"][0]["status"], "removed");
        assert_eq!(value["queries"][0]["matches"][0]["words"][0], "cat");
    }

    #[test]
    fn stats_text() {
        let stats = RequestStats {
            requests: 1442,
            in_window: 1440,
            no_result_requests: 1437,
            window: 1440,
        };
        let text = render(|out| write_stats(out, &stats, OutputFormat::Text));
        assert!(text.starts_with("Total empty requests: 1437\n"));
        assert!(text.contains("1440 of 1442"));
    }
}
