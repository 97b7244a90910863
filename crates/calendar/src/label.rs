//! ISO date-label parsing.
//!
//! Daily series carry one label per entry in `YYYY-MM-DD` form, sometimes
//! with a trailing time part (`YYYY-MM-DDThh:mm`). Only the first ten
//! characters are significant.

use crate::error::CalendarError;

/// Length of the date portion of a label (`YYYY-MM-DD`).
const DATE_LEN: usize = 10;

/// Validates the date portion of a label and returns it as a `&str` slice.
///
/// Labels longer than ten characters (e.g. with a time suffix) are truncated;
/// the extra characters are not inspected.
fn date_part(label: &str) -> Result<&str, CalendarError> {
    let invalid = |reason: &str| CalendarError::InvalidLabel {
        label: label.to_string(),
        reason: reason.to_string(),
    };

    let date = label.get(..DATE_LEN).ok_or_else(|| invalid("shorter than YYYY-MM-DD"))?;
    let bytes = date.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid("missing '-' separators"));
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != 4 && i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid("non-digit in date fields"));
    }
    Ok(date)
}

/// Returns the `MM-DD` suffix of a date label.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidLabel`] if the label is shorter than
/// `YYYY-MM-DD` or its date fields are malformed.
pub fn month_day_suffix(label: &str) -> Result<&str, CalendarError> {
    Ok(&date_part(label)?[5..])
}

/// Returns the year of a date label as an integer.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidLabel`] if the label is shorter than
/// `YYYY-MM-DD` or its date fields are malformed.
pub fn year_of(label: &str) -> Result<i32, CalendarError> {
    let date = date_part(label)?;
    date[..4].parse().map_err(|_| CalendarError::InvalidLabel {
        label: label.to_string(),
        reason: "unparseable year".to_string(),
    })
}

/// Returns the `YYYY-01-01` label for January 1 of the given year.
pub fn start_of_year_label(year: i32) -> String {
    format!("{year:04}-01-01")
}
