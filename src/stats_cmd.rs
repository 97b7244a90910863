use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use clima_aggregate::{aggregate, to_json};
use clima_source::VariableSource;

use crate::cli::StatsArgs;
use crate::{config, convert};

/// Aggregate a fetched response into day-of-year statistics.
pub fn run(args: StatsArgs) -> Result<()> {
    let config = config::load(&args.config)?;
    let source = convert::build_source(&config.source, &config.stats);

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let series = source
        .extract_series(&raw)
        .context("failed to extract daily series from response")?;
    info!(
        source = source.describe(),
        n_days = series.len(),
        "daily series extracted"
    );

    let aggregate_config = convert::build_aggregate_config(&config.stats);
    let selected_year = args.year.or(config.stats.selected_year);
    let stats = aggregate(
        series.labels(),
        series.values(),
        selected_year,
        &aggregate_config,
    )
    .context("aggregation failed")?;
    info!(
        n_years = stats.histogram_years.len(),
        selected_year = ?selected_year,
        "statistics computed"
    );

    let json = to_json(&stats)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "statistics written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
