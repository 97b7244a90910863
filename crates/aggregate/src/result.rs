//! Aggregation result and its JSON form.

use serde::Serialize;

use crate::error::AggregateError;

/// Day-of-year statistics derived from a multi-year daily series.
///
/// Plain data for a presentation layer: the four `*_per_day` arrays and the
/// selected-year values index by day-of-year slot (0 = January 1), the
/// `histogram_*` arrays index by year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOfYearStats {
    /// Canonical `MM-DD` label of each slot.
    pub labels_per_day: Vec<String>,
    /// Historical minimum per slot.
    pub min_per_day: Vec<f64>,
    /// Historical maximum per slot.
    pub max_per_day: Vec<f64>,
    /// Historical mean per slot.
    pub average_per_day: Vec<f64>,
    /// The selected year's values in slot order; empty when the selected
    /// year is absent from the series.
    pub selected_year_values: Vec<f64>,
    /// Calendar year of each histogram bin.
    pub histogram_years: Vec<i32>,
    /// Cold-excess count per year, always <= 0.
    pub histogram_low: Vec<i64>,
    /// Hot-excess count per year, always >= 0.
    pub histogram_high: Vec<i64>,
}

/// Serializes the result to pretty-printed JSON.
pub fn to_json(stats: &DayOfYearStats) -> Result<String, AggregateError> {
    serde_json::to_string_pretty(stats).map_err(|e| AggregateError::Serialization {
        reason: e.to_string(),
    })
}
