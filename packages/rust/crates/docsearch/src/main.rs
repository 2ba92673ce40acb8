//! docsearch CLI: look up cheats, links and glossary entries.
//!
//! Search roots come from `DOCSEARCH_PATH`. `DOCSEARCH_COLORED` and
//! `DOCSEARCH_MCOLORED` force colored output and matched-term highlighting.
//!
//! Logging: set `RUST_LOG=docsearch=debug` to trace topic loading on stderr.

mod cli;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsearch::{Docsearch, EnvSnapshot, SearchConfig};

use crate::cli::Cli;

/// Exit status when `DOCSEARCH_PATH` is missing (`-1` as a process status).
const CONFIG_ERROR_STATUS: u8 = 255;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docsearch=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match SearchConfig::from_sources(cli.into(), EnvSnapshot::capture()) {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            return ExitCode::from(CONFIG_ERROR_STATUS);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: SearchConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    Docsearch::new(config)
        .execute(&mut out)
        .context("failed to write results")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
