//! Bridges TOML configuration to the library crates' config types.

use clima_aggregate::AggregateConfig;
use clima_calendar::start_of_year_label;
use clima_source::OpenMeteoArchive;

use crate::config::{SourceToml, StatsToml};

/// Builds the archive source; the fetch window starts at the epoch year.
pub fn build_source(source: &SourceToml, stats: &StatsToml) -> OpenMeteoArchive {
    OpenMeteoArchive::new(
        source.base_url.clone(),
        source.timezone.clone(),
        source.variable.clone(),
        start_of_year_label(stats.epoch_year),
        source.end_date.clone(),
    )
}

/// Builds the aggregation config from the `[stats]` section.
pub fn build_aggregate_config(stats: &StatsToml) -> AggregateConfig {
    AggregateConfig {
        epoch_year: stats.epoch_year,
        extremity_rank: stats.extremity_rank,
    }
}
