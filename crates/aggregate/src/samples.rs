//! Pass 1: per-slot sample collection.

use clima_calendar::SLOTS_PER_YEAR;

use crate::walk::SlotWalk;

/// Per-slot samples gathered by the first pass over the series.
#[derive(Debug, Clone)]
pub(crate) struct SlotSamples {
    /// One sample list per slot; one entry per observed year.
    pub values: Vec<Vec<f64>>,
    /// Values of the selected year, in slot order; empty when the selected
    /// year is absent from the series.
    pub selected: Vec<f64>,
}

/// Walks the whole series once, filing each non-leap-day value under its
/// day-of-year slot and extracting the selected year's values on the way.
pub(crate) fn collect_slot_samples(
    labels: &[String],
    values: &[f64],
    slot_labels: &[String],
    selected_year: Option<i32>,
    epoch_year: i32,
) -> SlotSamples {
    let mut slots: Vec<Vec<f64>> = vec![Vec::new(); SLOTS_PER_YEAR];
    let mut selected = Vec::new();

    for step in SlotWalk::new(labels, slot_labels) {
        let value = values[step.index];
        if selected_year == Some(epoch_year + step.year_offset as i32) {
            selected.push(value);
        }
        slots[step.slot].push(value);
    }

    SlotSamples {
        values: slots,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_calendar::{gregorian_labels, noleap_labels, slot_labels};

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn one_sample_per_year_per_slot() {
        let canonical = slot_labels();
        let labels = noleap_labels(2001, 3 * 365);
        let values = ramp(labels.len());

        let samples = collect_slot_samples(&labels, &values, &canonical, None, 2001);

        assert_eq!(samples.values.len(), SLOTS_PER_YEAR);
        for (i, slot) in samples.values.iter().enumerate() {
            assert_eq!(slot.len(), 3, "slot {i} sample count");
            assert_eq!(slot[0], i as f64);
            assert_eq!(slot[1], (i + 365) as f64);
            assert_eq!(slot[2], (i + 730) as f64);
        }
        assert!(samples.selected.is_empty());
    }

    #[test]
    fn selected_year_extracted_in_slot_order() {
        let canonical = slot_labels();
        let labels = noleap_labels(2001, 3 * 365);
        let values = ramp(labels.len());

        let samples = collect_slot_samples(&labels, &values, &canonical, Some(2002), 2001);

        assert_eq!(samples.selected.len(), 365);
        assert_eq!(samples.selected[0], 365.0);
        assert_eq!(samples.selected[364], 729.0);
    }

    #[test]
    fn selected_epoch_year_is_extracted() {
        let canonical = slot_labels();
        let labels = noleap_labels(2001, 2 * 365);
        let values = ramp(labels.len());

        let samples = collect_slot_samples(&labels, &values, &canonical, Some(2001), 2001);

        assert_eq!(samples.selected.len(), 365);
        assert_eq!(samples.selected[0], 0.0);
    }

    #[test]
    fn selected_year_out_of_range_yields_empty() {
        let canonical = slot_labels();
        let labels = noleap_labels(2001, 365);
        let values = ramp(labels.len());

        let samples = collect_slot_samples(&labels, &values, &canonical, Some(1990), 2001);
        assert!(samples.selected.is_empty());
    }

    #[test]
    fn leap_day_value_never_sampled() {
        let canonical = slot_labels();
        // 2000 is a leap year; mark its 02-29 value with a sentinel.
        let labels = gregorian_labels(2000, 366);
        let mut values = ramp(labels.len());
        values[59] = 9999.0;

        let samples = collect_slot_samples(&labels, &values, &canonical, None, 2000);

        for slot in &samples.values {
            assert_eq!(slot.len(), 1);
            assert_ne!(slot[0], 9999.0);
        }
        // Slot 59 (03-01) holds the actual Mar 1 reading.
        assert_eq!(samples.values[59][0], 60.0);
    }
}
