use std::fs;

use anyhow::{Context, Result, bail};
use tracing::info;

use clima_source::VariableSource;

use crate::cli::FetchArgs;
use crate::{config, convert};

/// Fetch the raw archive response for the configured location.
pub fn run(args: FetchArgs) -> Result<()> {
    let config = config::load(&args.config)?;
    let location = config
        .location
        .ok_or_else(|| anyhow::anyhow!("no location: set [location] in {}", args.config.display()))?;

    let source = convert::build_source(&config.source, &config.stats);
    let url = source.build_request(&location);
    info!(source = source.describe(), %location, "requesting daily series");

    let response = reqwest::blocking::get(&url)
        .with_context(|| format!("request failed: {url}"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("archive responded with status {status}");
    }
    let body = response.text().context("failed to read response body")?;

    fs::write(&args.output, &body)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        bytes = body.len(),
        "raw response saved"
    );

    Ok(())
}
