// src/config.rs
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

/// Sample text analyzed when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "data/book.txt";

#[derive(Parser, Debug)]
#[command(name = "line-stats")]
#[command(about = "Prints per-line and whole-text statistics for a text file.", long_about = None)]
pub struct Cli {
    /// Text file to analyze
    #[arg(short, long, env = "LINE_STATS_FILE", default_value = DEFAULT_INPUT_PATH)]
    pub path: PathBuf,

    /// Worker threads for the analysis (defaults to one per core)
    #[arg(short, long, env = "LINE_STATS_JOBS")]
    pub jobs: Option<NonZeroUsize>,
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub jobs: Option<NonZeroUsize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
            jobs: None,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.path,
            jobs: cli.jobs,
        }
    }
}

impl Config {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    /// Thread pool sized by `jobs`, or rayon's default when unset.
    pub fn thread_pool(&self) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(jobs) = self.jobs {
            builder = builder.num_threads(jobs.get());
        }
        builder.build()
    }
}
