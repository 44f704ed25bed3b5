//! Implementation of `quarry search`.

use std::{num::NonZeroUsize, process::ExitCode};

use super::{emit, output_format, report_query_error};
use crate::cli::{
    args::SearchCommand,
    context::{CommandContext, queries_or_corpus},
    output::{QueryResults, write_search},
};

/// Ranks the corpus for every query and prints the top documents.
///
/// A query that fails to parse is reported on stderr; the remaining queries still run and
/// the command exits with failure.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let status = match cmd.filter_status {
        Some(status) => status,
        None => match ctx.default_status() {
            Ok(status) => status,
            Err(code) => return code,
        },
    };
    let corpus = match ctx.load_corpus(&cmd.corpus, ctx.search_params(cmd.max_results)) {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };
    let queries = queries_or_corpus(&cmd.queries, &corpus);

    let mut failed = false;
    let mut results = Vec::with_capacity(queries.len());
    for query in &queries {
        match corpus.index.find_top_documents_by_status(query, status) {
            Ok(documents) => results.push(QueryResults::new(query, documents)),
            Err(e) => {
                report_query_error(query, &e);
                failed = true;
            }
        }
    }

    let page_size = NonZeroUsize::new(cmd.page_size.unwrap_or(ctx.config.output.page_size));
    let format = output_format(ctx, &cmd.output);
    if let Err(code) = emit(|out| write_search(out, &results, format, page_size)) {
        return code;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
