//! CRPT client CLI
//!
//! Submits one registration document through the rate-limited submitter and
//! prints the raw API response.
//!
//! Set RUST_LOG=debug (or pass --verbose) for detailed logging.

mod args;
mod sample;
mod settings;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use crpt_core::DocumentSubmitter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = settings::load_config(&cli)?;
    let document = match &cli.document {
        Some(path) => settings::load_document(path)?,
        None => sample::sample_document(),
    };

    let submitter = DocumentSubmitter::with_config(config)?;
    let result = submitter.submit(&document, &cli.signature).await;
    submitter.shutdown();

    let response = result.with_context(|| format!("Failed to submit document '{}'", document.doc_id))?;
    println!("Response: {}", response);
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
