//! Implementation of `quarry stats`.

use std::process::ExitCode;

use quarry_index::RequestQueue;

use super::{emit, output_format, report_query_error};
use crate::cli::{
    args::StatsCommand,
    context::{CommandContext, queries_or_corpus},
    output::{RequestStats, write_stats},
};

/// Runs every query through a request queue and reports how many found nothing.
pub fn run(ctx: &CommandContext, cmd: &StatsCommand) -> ExitCode {
    let status = match ctx.default_status() {
        Ok(status) => status,
        Err(code) => return code,
    };
    let corpus = match ctx.load_corpus(&cmd.corpus, ctx.search_params(None)) {
        Ok(corpus) => corpus,
        Err(code) => return code,
    };
    let queries = queries_or_corpus(&cmd.queries, &corpus);
    let window = cmd.window.unwrap_or(ctx.config.tracker.window);

    let mut queue = RequestQueue::with_window(&corpus.index, window);
    let mut requests = 0;
    let mut failed = false;
    for query in &queries {
        match queue.add_find_request_by_status(query, status) {
            Ok(_) => requests += 1,
            Err(e) => {
                report_query_error(query, &e);
                failed = true;
            }
        }
    }

    let stats = RequestStats {
        requests,
        in_window: queue.tracker().len(),
        no_result_requests: queue.no_result_requests(),
        window: queue.tracker().window(),
    };
    let format = output_format(ctx, &cmd.output);
    if let Err(code) = emit(|out| write_stats(out, &stats, format)) {
        return code;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
