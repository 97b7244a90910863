//! Per-slot order statistics and extremity thresholds.

use clima_stats::{mean, rank_high, rank_low, sort_ascending};

/// Per-slot statistics derived from the sorted sample lists.
#[derive(Debug, Clone)]
pub(crate) struct SlotSummary {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
    pub average: Vec<f64>,
    /// Low extremity threshold: the `rank`-th smallest sample.
    pub low_threshold: Vec<f64>,
    /// High extremity threshold: the `rank`-th largest sample.
    pub high_threshold: Vec<f64>,
}

/// Sorts every slot's samples ascending in place and reduces them to
/// min/max/mean plus the rank-based thresholds.
///
/// Threshold indices clamp into the available range, so slots with fewer
/// than `2 * rank` samples produce defined (possibly crossing) thresholds
/// instead of reading out of bounds.
///
/// # Panics
///
/// Panics if any slot has no samples; callers guarantee at least one full
/// year of aligned entries.
pub(crate) fn summarize_slots(slots: &mut [Vec<f64>], extremity_rank: usize) -> SlotSummary {
    let n = slots.len();
    let mut summary = SlotSummary {
        min: Vec::with_capacity(n),
        max: Vec::with_capacity(n),
        average: Vec::with_capacity(n),
        low_threshold: Vec::with_capacity(n),
        high_threshold: Vec::with_capacity(n),
    };

    for samples in slots.iter_mut() {
        sort_ascending(samples);
        summary.min.push(samples[0]);
        summary.max.push(samples[samples.len() - 1]);
        summary.average.push(mean(samples));
        summary.low_threshold.push(rank_low(samples, extremity_rank));
        summary.high_threshold.push(rank_high(samples, extremity_rank));
    }

    summary
}
