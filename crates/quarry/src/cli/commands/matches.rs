//! Implementation of `quarry match`.

use std::process::ExitCode;

use quarry_index::{DocumentId, IndexError, SearchIndex};

use super::{emit, output_format, report_query_error};
use crate::cli::{
    args::MatchCommand,
    context::{CommandContext, queries_or_corpus},
    output::{MatchReport, QueryMatches, write_matches},
};

/// Reports, for every query, which of its words each document contains.
pub fn run(ctx: &CommandContext, cmd: &MatchCommand) -> ExitCode {
    let corpus = match ctx.load_corpus(&cmd.corpus, ctx.search_params(None)) {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };
    let queries = queries_or_corpus(&cmd.queries, &corpus);
    let ids: Vec<DocumentId> = match cmd.id {
        Some(id) => vec![id],
        None => corpus.index.document_ids().collect(),
    };

    let mut failed = false;
    let mut reports = Vec::with_capacity(queries.len());
    for query in &queries {
        match match_all(&corpus.index, query, &ids) {
            Ok(matches) => reports.push(QueryMatches { query, matches }),
            Err(e) => {
                report_query_error(query, &e);
                failed = true;
            }
        }
    }

    let format = output_format(ctx, &cmd.output);
    if let Err(code) = emit(|out| write_matches(out, &reports, format)) {
        return code;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Matches `query` against each document in `ids`.
fn match_all<'q>(
    index: &SearchIndex,
    query: &'q str,
    ids: &[DocumentId],
) -> Result<Vec<MatchReport<'q>>, IndexError> {
    ids.iter()
        .map(|&document_id| {
            let (words, status) = index.match_document(query, document_id)?;
            Ok(MatchReport {
                document_id,
                status,
                words,
            })
        })
        .collect()
}
