//! Validation and orchestration of the two aggregation passes.

use tracing::debug;

use clima_calendar::{SLOTS_PER_YEAR, slot_labels, start_of_year_label};

use crate::config::AggregateConfig;
use crate::error::AggregateError;
use crate::histogram::count_extremes;
use crate::result::DayOfYearStats;
use crate::samples::collect_slot_samples;
use crate::summary::summarize_slots;

/// Aggregates a raw daily series into day-of-year statistics.
///
/// `labels` and `values` are the parallel sequences supplied by the data
/// source: contiguous daily ISO date labels starting at January 1 of
/// `config.epoch_year`, and one reading per day. Leap-day entries are
/// tolerated and skipped. `selected_year` picks one year for extraction;
/// a year outside the covered range yields an empty extraction rather than
/// an error.
///
/// The result is a pure function of the inputs: repeated invocation with
/// identical arguments returns identical data.
///
/// # Errors
///
/// Returns [`AggregateError::LengthMismatch`] if the sequences differ in
/// length, [`AggregateError::InvalidSeriesLength`] if fewer than 365
/// non-leap entries are present, and [`AggregateError::MisalignedEpoch`] if
/// the series does not start at January 1 of the epoch year.
pub fn aggregate(
    labels: &[String],
    values: &[f64],
    selected_year: Option<i32>,
    config: &AggregateConfig,
) -> Result<DayOfYearStats, AggregateError> {
    validate(labels, values, config.epoch_year)?;

    let canonical = slot_labels();

    // Pass 1: file every aligned reading under its slot.
    let mut samples = collect_slot_samples(
        labels,
        values,
        &canonical,
        selected_year,
        config.epoch_year,
    );
    let summary = summarize_slots(&mut samples.values, config.extremity_rank);
    debug!(
        n_entries = labels.len(),
        n_selected = samples.selected.len(),
        "slot samples collected"
    );

    // Pass 2: thresholds are complete, tally the per-year excess counts.
    let histogram = count_extremes(labels, values, &canonical, &summary, config.epoch_year);
    debug!(n_years = histogram.years.len(), "extremity histogram built");

    Ok(DayOfYearStats {
        labels_per_day: canonical,
        min_per_day: summary.min,
        max_per_day: summary.max,
        average_per_day: summary.average,
        selected_year_values: samples.selected,
        histogram_years: histogram.years,
        histogram_low: histogram.low,
        histogram_high: histogram.high,
    })
}

/// Fails fast on structural invariant violations.
fn validate(labels: &[String], values: &[f64], epoch_year: i32) -> Result<(), AggregateError> {
    if labels.len() != values.len() {
        return Err(AggregateError::LengthMismatch {
            labels: labels.len(),
            values: values.len(),
        });
    }

    // Leap-day entries are skipped during alignment, so only non-leap
    // entries count towards the one-full-year minimum.
    let leap_entries = labels
        .iter()
        .filter(|l| l.get(5..10) == Some("02-29"))
        .count();
    let aligned = labels.len() - leap_entries;
    if aligned < SLOTS_PER_YEAR {
        return Err(AggregateError::InvalidSeriesLength {
            got: aligned,
            min: SLOTS_PER_YEAR,
        });
    }

    let expected = start_of_year_label(epoch_year);
    let got = labels[0].get(..10).unwrap_or(labels[0].as_str());
    if got != expected {
        return Err(AggregateError::MisalignedEpoch {
            expected,
            got: got.to_string(),
        });
    }

    Ok(())
}
