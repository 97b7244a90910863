//! Pass 2: per-year extremity counts.

use crate::summary::SlotSummary;
use crate::walk::SlotWalk;

/// Per-year counts of days outside the slot extremity thresholds.
///
/// `low` holds negative counts (one decrement per unusually cold day) and
/// `high` positive counts (one increment per unusually hot day), so the two
/// series can be drawn on either side of a shared axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct YearHistogram {
    /// Calendar year of each histogram bin.
    pub years: Vec<i32>,
    /// Cold-excess count per year, always <= 0.
    pub low: Vec<i64>,
    /// Hot-excess count per year, always >= 0.
    pub high: Vec<i64>,
}

/// Re-walks the entire series and tallies, per year, the days strictly
/// below the slot's low threshold and strictly above its high threshold.
///
/// Bins are created as the walk reaches each year, so the histogram spans
/// exactly the years the series covers, including a trailing partial year.
pub(crate) fn count_extremes(
    labels: &[String],
    values: &[f64],
    slot_labels: &[String],
    summary: &SlotSummary,
    epoch_year: i32,
) -> YearHistogram {
    let mut histogram = YearHistogram {
        years: Vec::new(),
        low: Vec::new(),
        high: Vec::new(),
    };

    for step in SlotWalk::new(labels, slot_labels) {
        if step.year_offset == histogram.years.len() {
            histogram.years.push(epoch_year + step.year_offset as i32);
            histogram.low.push(0);
            histogram.high.push(0);
        }

        let value = values[step.index];
        if value < summary.low_threshold[step.slot] {
            histogram.low[step.year_offset] -= 1;
        }
        if value > summary.high_threshold[step.slot] {
            histogram.high[step.year_offset] += 1;
        }
    }

    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_calendar::{SLOTS_PER_YEAR, noleap_labels, slot_labels};
    use crate::summary::summarize_slots;

    /// Ten flat years except one hot day and two cold days in year 3.
    fn flat_series_with_outliers() -> (Vec<String>, Vec<f64>) {
        let labels = noleap_labels(2000, 10 * 365);
        let mut values = vec![10.0; labels.len()];
        values[3 * 365] = 50.0; // Jan 1, 2003: hot
        values[3 * 365 + 1] = -50.0; // Jan 2, 2003: cold
        values[3 * 365 + 2] = -50.0; // Jan 3, 2003: cold
        (labels, values)
    }

    #[test]
    fn outliers_counted_in_their_year() {
        let canonical = slot_labels();
        let (labels, values) = flat_series_with_outliers();

        let mut slots: Vec<Vec<f64>> = vec![Vec::new(); SLOTS_PER_YEAR];
        for (i, &v) in values.iter().enumerate() {
            slots[i % SLOTS_PER_YEAR].push(v);
        }
        let summary = summarize_slots(&mut slots, 4);
        let histogram = count_extremes(&labels, &values, &canonical, &summary, 2000);

        assert_eq!(histogram.years.len(), 10);
        assert_eq!(histogram.years[0], 2000);
        assert_eq!(histogram.years[9], 2009);

        assert_eq!(histogram.high[3], 1);
        assert_eq!(histogram.low[3], -2);
        for y in (0..10).filter(|&y| y != 3) {
            assert_eq!(histogram.low[y], 0, "year offset {y}");
            assert_eq!(histogram.high[y], 0, "year offset {y}");
        }
    }

    #[test]
    fn sign_convention_holds() {
        let canonical = slot_labels();
        let (labels, values) = flat_series_with_outliers();

        let mut slots: Vec<Vec<f64>> = vec![Vec::new(); SLOTS_PER_YEAR];
        for (i, &v) in values.iter().enumerate() {
            slots[i % SLOTS_PER_YEAR].push(v);
        }
        let summary = summarize_slots(&mut slots, 4);
        let histogram = count_extremes(&labels, &values, &canonical, &summary, 2000);

        assert!(histogram.low.iter().all(|&c| c <= 0));
        assert!(histogram.high.iter().all(|&c| c >= 0));
    }

    #[test]
    fn partial_trailing_year_gets_a_bin() {
        let canonical = slot_labels();
        let labels = noleap_labels(2000, 365 + 100);
        let values = vec![10.0; labels.len()];

        let mut slots: Vec<Vec<f64>> = vec![Vec::new(); SLOTS_PER_YEAR];
        for (i, &v) in values.iter().enumerate() {
            slots[i % SLOTS_PER_YEAR].push(v);
        }
        let summary = summarize_slots(&mut slots, 4);
        let histogram = count_extremes(&labels, &values, &canonical, &summary, 2000);

        assert_eq!(histogram.years, vec![2000, 2001]);
    }
}
