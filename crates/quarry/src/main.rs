//! quarry: an in-memory TF-IDF search engine driven from the command line.
//!
//! quarry reads a corpus (stop words, documents with ratings, and optionally queries) from a
//! file or standard input, indexes it in memory, and answers ranked searches, per-document
//! match reports, and empty-result statistics.

#![warn(missing_docs)]

mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{
    args::{Cli, Commands},
    commands,
    context::CommandContext,
};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "QUARRY_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}

/// Installs the stderr log subscriber.
///
/// `QUARRY_LOG` wins when set; otherwise `-v` selects debug and `-vv` trace.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
