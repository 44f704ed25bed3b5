//! Integration tests for quarry-index.
//!
//! Exercises the public API end to end: indexing, ranking, matching and
//! request tracking over the same small corpus.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use quarry_index::{
    DocumentId, DocumentStatus, IndexError, QueryError, RequestQueue, RequestTracker, SearchIndex,
};

/// Builds the reference corpus with stop words "и в на".
fn corpus() -> SearchIndex {
    let mut index = SearchIndex::from_stop_words(["и", "в", "на"]).unwrap();
    index
        .add_document(
            0,
            "белый кот и модный ошейник",
            DocumentStatus::Actual,
            &[8, -3],
        )
        .unwrap();
    index
        .add_document(
            1,
            "пушистый кот пушистый хвост",
            DocumentStatus::Actual,
            &[7, 2, 7],
        )
        .unwrap();
    index
        .add_document(
            2,
            "ухоженный пёс выразительные глаза",
            DocumentStatus::Actual,
            &[5, -12, 2, 1],
        )
        .unwrap();
    index
        .add_document(3, "ухоженный скворец евгений", DocumentStatus::Banned, &[9])
        .unwrap();
    index
}

/// Extracts result ids.
fn ids(index: &SearchIndex, query: &str) -> Vec<DocumentId> {
    index
        .find_top_documents(query)
        .unwrap()
        .iter()
        .map(|doc| doc.id)
        .collect()
}

mod indexing {
    use super::*;

    #[test]
    fn count_grows_by_one_per_document() {
        let mut index = SearchIndex::default();
        for id in 0..10 {
            index
                .add_document(id, "слово", DocumentStatus::Actual, &[1])
                .unwrap();
            assert_eq!(index.document_count(), id as usize + 1);
        }
    }

    #[test]
    fn failed_add_leaves_search_results_unchanged() {
        let mut index = corpus();
        let before = index.find_top_documents("пушистый ухоженный кот").unwrap();

        let err = index
            .add_document(1, "ухоженный кот", DocumentStatus::Actual, &[10])
            .unwrap_err();
        assert_eq!(err, IndexError::DuplicateId { id: 1 });

        let after = index.find_top_documents("пушистый ухоженный кот").unwrap();
        assert_eq!(before, after);
        assert_eq!(index.document_count(), 4);
    }

    #[test]
    fn term_frequencies_sum_to_one() {
        let index = corpus();
        for id in index.document_ids() {
            let total: f64 = index.word_frequencies(id).unwrap().values().sum();
            assert!((total - 1.0).abs() < 1e-9, "document {id} sums to {total}");
        }
    }

    #[test]
    fn document_id_lookup() {
        let index = corpus();
        assert_eq!(index.document_id(3), Ok(3));
        assert_eq!(
            index.document_id(4),
            Err(IndexError::OutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn stop_word_constructor_rejects_control_characters() {
        assert!(matches!(
            SearchIndex::from_stop_words(["и", "в\u{2}"]),
            Err(IndexError::InvalidStopWord { .. })
        ));
    }
}

mod ranking {
    use super::*;

    #[test]
    fn reference_query_orders_actual_documents() {
        assert_eq!(ids(&corpus(), "пушистый ухоженный кот"), vec![1, 0, 2]);
    }

    #[test]
    fn reference_query_banned_status() {
        let results = corpus()
            .find_top_documents_by_status("пушистый ухоженный кот", DocumentStatus::Banned)
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 3);
        assert_eq!(results[0].rating, 9);
    }

    #[test]
    fn results_are_ordered() {
        let results = corpus()
            .find_top_documents_with("пушистый ухоженный кот глаза", |_, _, _| true)
            .unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].relevance + 1e-6 >= pair[1].relevance);
        }
    }

    #[test]
    fn minus_word_beats_always_true_predicate() {
        let index = corpus();
        let results = index
            .find_top_documents_with("кот -пушистый", |_, _, _| true)
            .unwrap();
        assert!(results.iter().all(|doc| doc.id != 1));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn query_made_of_minus_word_only() {
        let results = corpus()
            .find_top_documents_with("-кот", |_, _, _| true)
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn removed_and_irrelevant_statuses() {
        let mut index = SearchIndex::default();
        index
            .add_document(0, "кот", DocumentStatus::Removed, &[1])
            .unwrap();
        index
            .add_document(1, "кот", DocumentStatus::Irrelevant, &[1])
            .unwrap();
        index
            .add_document(2, "пёс", DocumentStatus::Actual, &[1])
            .unwrap();

        assert!(index.find_top_documents("кот").unwrap().is_empty());
        let removed = index
            .find_top_documents_by_status("кот", DocumentStatus::Removed)
            .unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, 0);
    }

    #[test]
    fn errors_surface_query_kind() {
        let index = corpus();
        assert_eq!(
            index.find_top_documents(""),
            Err(IndexError::Query(QueryError::Empty))
        );
        assert_eq!(
            index.find_top_documents("кот -"),
            Err(IndexError::Query(QueryError::DanglingMinus))
        );
    }
}

mod matching {
    use super::*;

    #[test]
    fn all_documents_against_one_query() {
        let index = corpus();
        let query = "пушистый ухоженный кот -ошейник";
        let mut rows = Vec::new();
        for id in index.document_ids() {
            let (words, status) = index.match_document(query, id).unwrap();
            rows.push((id, words, status));
        }
        assert_eq!(
            rows,
            vec![
                (0, vec![], DocumentStatus::Actual),
                (1, vec!["кот", "пушистый"], DocumentStatus::Actual),
                (2, vec!["ухоженный"], DocumentStatus::Actual),
                (3, vec!["ухоженный"], DocumentStatus::Banned),
            ]
        );
    }

    #[test]
    fn unknown_document() {
        assert_eq!(
            corpus().match_document("кот", 7),
            Err(IndexError::UnknownDocument { id: 7 })
        );
    }
}

mod tracking {
    use super::*;

    #[test]
    fn no_result_count_over_stream() {
        let index = corpus();
        let mut queue = RequestQueue::with_tracker(&index, RequestTracker::with_window(3));
        queue.add_find_request("жираф").unwrap();
        queue.add_find_request("кот").unwrap();
        queue.add_find_request("слон").unwrap();
        assert_eq!(queue.no_result_requests(), 2);

        queue.add_find_request("кот").unwrap();
        assert_eq!(queue.no_result_requests(), 1);
        queue.add_find_request("кот").unwrap();
        assert_eq!(queue.no_result_requests(), 1);
        queue.add_find_request("кот").unwrap();
        assert_eq!(queue.no_result_requests(), 0);
    }
}
