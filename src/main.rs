// src/main.rs
use std::io;
use std::process::ExitCode;

use anyhow::Result;
use log::{debug, info};

use line_stats::{Config, analyze, report, source, success};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let config = Config::from_args();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<()> {
    info!("Reading file: {}", config.path.display());
    let doc = source::read_document(&config.path).await?;
    debug!("Loaded {} lines", doc.len());

    let pool = config.thread_pool()?;
    debug!("Analyzing with {} worker threads", pool.current_num_threads());
    let report = tokio::task::spawn_blocking(move || pool.install(|| analyze(&doc))).await?;

    report::render(&report, &mut io::stdout().lock())?;
    success!("Analyzed {}", config.path.display());
    Ok(())
}
