//! Command implementations and dispatch.

pub mod config;
pub mod init;
pub mod matches;
pub mod search;
pub mod stats;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use quarry_config::OutputFormat;
use quarry_index::IndexError;

use super::{
    args::{Commands, OutputArgs},
    context::CommandContext,
};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Match(cmd) => matches::run(ctx, &cmd),
        Commands::Stats(cmd) => stats::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
    }
}

/// Output format from the flags, falling back to the configured one.
fn output_format(ctx: &CommandContext, args: &OutputArgs) -> OutputFormat {
    if args.json {
        OutputFormat::Json
    } else {
        ctx.config.output.format
    }
}

/// Runs `render` against a locked stdout and reports write failures.
fn emit(render: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> Result<(), ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out).and_then(|()| out.flush()).map_err(|e| {
        eprintln!("error: failed to write output: {e}");
        ExitCode::FAILURE
    })
}

/// Prints a failed query with a fix-it hint when the parser offers one.
fn report_query_error(query: &str, error: &IndexError) {
    eprintln!("error: query {query:?}: {error}");
    if let IndexError::Query(e) = error
        && let Some(hint) = e.suggestion()
    {
        eprintln!("hint: {hint}");
    }
}
