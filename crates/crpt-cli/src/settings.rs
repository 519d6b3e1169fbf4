//! Submitter settings: defaults, then the config file, then flags

use crate::args::Cli;
use anyhow::{Context, Result};
use crpt_core::{Document, SignaturePlacement, SubmitterConfig};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build the submitter configuration for this invocation
pub fn load_config(cli: &Cli) -> Result<SubmitterConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => SubmitterConfig::default(),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(window) = cli.window {
        config.rate_limit.window = window;
    }
    if let Some(limit) = cli.limit {
        config.rate_limit.request_limit = limit;
    }
    if cli.signature_in_body {
        config.signature_placement = SignaturePlacement::Body;
    }

    config.validate()?;
    Ok(config)
}

/// Read a document from a JSON file
pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document file: {}", path.display()))?;
    let document = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse document file: {}", path.display()))?;
    debug!("Loaded document from {}", path.display());
    Ok(document)
}

fn read_config_file(path: &Path) -> Result<SubmitterConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    debug!("Loaded submitter config from {}", path.display());
    Ok(config)
}
