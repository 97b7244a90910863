//! Date-label sequence generation.
//!
//! Produces contiguous `YYYY-MM-DD` label runs starting at January 1 of a
//! given year, either on the 365-day no-leap calendar or on the real
//! Gregorian calendar (with `02-29` entries in leap years). Used to build
//! synthetic daily series.

use crate::leap::is_leap_year;
use crate::slot::{DAYS_PER_MONTH, SLOTS_PER_YEAR, Slot};

/// Generates `n_days` contiguous no-leap labels starting at `start_year`-01-01.
///
/// Year boundaries are handled automatically (`12-31` wraps to `01-01` of the
/// following year); no label is ever `02-29`.
pub fn noleap_labels(start_year: i32, n_days: usize) -> Vec<String> {
    let mut labels = Vec::with_capacity(n_days);
    let mut year = start_year;
    let mut slot = 0usize;
    for _ in 0..n_days {
        // Slot indices stay in range by construction.
        let day = Slot::new(slot).expect("slot cursor wraps below 365");
        labels.push(format!("{year:04}-{}", day.label()));
        slot += 1;
        if slot == SLOTS_PER_YEAR {
            slot = 0;
            year += 1;
        }
    }
    labels
}

/// Generates `n_days` contiguous Gregorian labels starting at `start_year`-01-01.
///
/// Unlike [`noleap_labels`], leap years contain a `02-29` entry.
pub fn gregorian_labels(start_year: i32, n_days: usize) -> Vec<String> {
    let mut labels = Vec::with_capacity(n_days);
    let mut year = start_year;
    let mut month = 1u8;
    let mut day = 1u8;
    for _ in 0..n_days {
        labels.push(format!("{year:04}-{month:02}-{day:02}"));
        let month_len = if month == 2 && is_leap_year(year) {
            29
        } else {
            DAYS_PER_MONTH[(month - 1) as usize]
        };
        day += 1;
        if day > month_len {
            day = 1;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
    }
    labels
}
