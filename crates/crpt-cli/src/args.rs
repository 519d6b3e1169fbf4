//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "crpt")]
#[command(about = "Submit a registration document to the CRPT API under a rate limit")]
#[command(
    long_about = r#"Submit a registration document to the CRPT API under a rate limit

USAGE:
  crpt                                   # Submit the built-in sample document
  crpt --document doc.json               # Submit a document from a JSON file
  crpt --window 1m --limit 10            # Override the rate limit
  crpt --config crpt.json                # Load submitter settings from a file

Settings are layered: defaults, then --config, then flags and environment."#
)]
#[command(version)]
pub struct Cli {
    /// JSON document to submit (a built-in sample is used when omitted)
    #[arg(long)]
    pub document: Option<PathBuf>,

    /// Opaque signature passed through unmodified
    #[arg(long, env = "CRPT_SIGNATURE", default_value = "signature")]
    pub signature: String,

    /// Rate limit window, e.g. "1m", "30s", "500ms"
    #[arg(long, value_parser = parse_duration)]
    pub window: Option<Duration>,

    /// Maximum submissions per window
    #[arg(long)]
    pub limit: Option<u32>,

    /// Registration API endpoint URL
    #[arg(long, env = "CRPT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// JSON file with submitter settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Send the signature inside the JSON body instead of the Signature header
    #[arg(long)]
    pub signature_in_body: bool,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

fn parse_duration(value: &str) -> Result<Duration, String> {
    humantime_serde::re::humantime::parse_duration(value).map_err(|e| e.to_string())
}
