//! Error types for the clima-calendar crate.

/// Error type for all fallible operations in the clima-calendar crate.
///
/// Covers validation failures for day-of-year slot indices, month and
/// day-within-month values, and malformed date labels.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a slot index is outside the valid range 0..=364.
    #[error("invalid slot index: {index} (must be 0..=364)")]
    InvalidSlot {
        /// The invalid slot index that was provided.
        index: usize,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a date label cannot be parsed as `YYYY-MM-DD`.
    #[error("invalid date label '{label}': {reason}")]
    InvalidLabel {
        /// The offending label.
        label: String,
        /// Description of what made the label unparseable.
        reason: String,
    },
}
