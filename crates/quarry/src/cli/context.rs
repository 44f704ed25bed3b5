//! Shared context for running CLI commands.

use std::{
    env, fs,
    io::{self, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

use quarry_config::Config;
use quarry_index::{DocumentStatus, SearchIndex, SearchParams};

use crate::cli::{
    args::CorpusArgs,
    driver::{Corpus, DriverError, build_index, read_corpus},
};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

/// A corpus read from the input together with the index built from it.
pub struct LoadedCorpus {
    /// Queries that followed the documents in the input.
    pub queries: Vec<String>,
    /// Index over the corpus documents.
    pub index: SearchIndex,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Ranking parameters from the config, with an optional result cap override.
    pub fn search_params(&self, max_results: Option<usize>) -> SearchParams {
        let search = &self.config.search;
        SearchParams::default()
            .with_max_results(max_results.unwrap_or(search.max_results))
            .with_relevance_epsilon(search.relevance_epsilon)
    }

    /// Status searched when the command line does not pick one.
    pub fn default_status(&self) -> Result<DocumentStatus, ExitCode> {
        self.config.search.default_status.parse().map_err(|e| {
            eprintln!("error: search.default_status: {e}");
            ExitCode::FAILURE
        })
    }

    /// Reads the corpus named by `args` and indexes it with `params`.
    pub fn load_corpus(
        &self,
        args: &CorpusArgs,
        params: SearchParams,
    ) -> Result<LoadedCorpus, ExitCode> {
        for warning in self.config.validate() {
            tracing::warn!("{warning}");
        }
        let corpus = match args.input {
            Some(ref path) => self.read_corpus_file(path),
            None => read_corpus(&mut io::stdin().lock()),
        }
        .map_err(report_driver_error)?;

        let status = args.status.unwrap_or_default();
        let index = build_index(&corpus, &self.config.index, params, status)
            .map_err(report_driver_error)?;
        tracing::debug!(
            documents = index.document_count(),
            queries = corpus.queries.len(),
            %status,
            "corpus loaded"
        );

        let Corpus { queries, .. } = corpus;
        Ok(LoadedCorpus { queries, index })
    }

    /// Reads a corpus file, resolving relative paths against the working directory.
    fn read_corpus_file(&self, path: &Path) -> Result<Corpus, DriverError> {
        let path = self.cwd.join(path);
        let file = fs::File::open(&path).map_err(|source| DriverError::Open {
            path: path.clone(),
            source,
        })?;
        read_corpus(&mut BufReader::new(file))
    }
}

/// Picks the queries to run: command line first, then the ones from the input.
pub fn queries_or_corpus(cli_queries: &[String], corpus: &LoadedCorpus) -> Vec<String> {
    if cli_queries.is_empty() {
        corpus.queries.clone()
    } else {
        cli_queries.to_vec()
    }
}

/// Prints a driver error and converts it to a failure exit code.
fn report_driver_error(e: DriverError) -> ExitCode {
    eprintln!("error: {e}");
    ExitCode::FAILURE
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
