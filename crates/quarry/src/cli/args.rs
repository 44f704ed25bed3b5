//! Clap argument definitions for the `quarry` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use quarry_index::DocumentStatus;

/// Parses a document status name or ordinal.
fn parse_status(s: &str) -> Result<DocumentStatus, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "quarry")]
#[command(about = "In-memory TF-IDF search over a corpus of rated documents")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace); QUARRY_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the corpus comes from and how its documents are labelled.
#[derive(Args, Debug, Clone, Default)]
pub struct CorpusArgs {
    /// Corpus file; standard input when omitted
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Status given to every loaded document [default: actual]
    #[arg(long, value_parser = parse_status)]
    pub status: Option<DocumentStatus>,
}

/// Shared output flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `quarry search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Queries; when omitted, the lines after the corpus are used
    pub queries: Vec<String>,

    #[command(flatten)]
    /// Corpus source.
    pub corpus: CorpusArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    /// Only search documents with this status [default: from config]
    #[arg(long, value_parser = parse_status)]
    pub filter_status: Option<DocumentStatus>,

    /// Maximum results per query [default: 5]
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Results per page, 0 to disable paging [default: 0]
    #[arg(short = 'p', long)]
    pub page_size: Option<usize>,
}

/// Arguments for `quarry match`.
#[derive(Args, Debug, Clone)]
pub struct MatchCommand {
    /// Queries; when omitted, the lines after the corpus are used
    pub queries: Vec<String>,

    #[command(flatten)]
    /// Corpus source.
    pub corpus: CorpusArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    /// Only report this document instead of every document
    #[arg(long)]
    pub id: Option<i32>,
}

/// Arguments for `quarry stats`.
#[derive(Args, Debug, Clone)]
pub struct StatsCommand {
    /// Queries; when omitted, the lines after the corpus are used
    pub queries: Vec<String>,

    #[command(flatten)]
    /// Corpus source.
    pub corpus: CorpusArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    /// Number of recent requests remembered [default: 1440]
    #[arg(short = 'w', long)]
    pub window: Option<u64>,
}

/// Arguments for `quarry init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.quarry.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `quarry` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank documents for each query
    Search(SearchCommand),

    /// Report which query words each document contains
    Match(MatchCommand),

    /// Count queries that found nothing within the request window
    Stats(StatsCommand),

    /// Show effective configuration and report problems
    Config,

    /// Create a commented .quarry.toml in the current directory
    Init(InitCommand),
}
