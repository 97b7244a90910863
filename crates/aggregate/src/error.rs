//! Error types for the clima-aggregate crate.

/// Error type for all fallible operations in the clima-aggregate crate.
///
/// Structural invariant violations fail fast: continuing past any of them
/// would silently corrupt every slot statistic downstream. An out-of-range
/// year selection is deliberately not represented here; it degrades to an
/// empty extraction instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    /// Returned when the label and value sequences differ in length.
    #[error("label/value length mismatch: {labels} labels vs {values} values")]
    LengthMismatch {
        /// Number of labels provided.
        labels: usize,
        /// Number of values provided.
        values: usize,
    },

    /// Returned when the series carries fewer than one full year of
    /// non-leap-day entries, making slot alignment impossible.
    #[error("series too short: {got} non-leap entries (need at least {min})")]
    InvalidSeriesLength {
        /// Number of non-leap-day entries found.
        got: usize,
        /// Minimum required number of entries.
        min: usize,
    },

    /// Returned when the first label is not January 1 of the epoch year.
    #[error("misaligned epoch: series starts at '{got}', expected '{expected}'")]
    MisalignedEpoch {
        /// The label the series was expected to start with.
        expected: String,
        /// The label the series actually starts with.
        got: String,
    },

    /// Returned when the result cannot be serialized to JSON.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying serialization failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length_mismatch() {
        let err = AggregateError::LengthMismatch {
            labels: 730,
            values: 729,
        };
        assert_eq!(
            err.to_string(),
            "label/value length mismatch: 730 labels vs 729 values"
        );
    }

    #[test]
    fn display_invalid_series_length() {
        let err = AggregateError::InvalidSeriesLength { got: 100, min: 365 };
        assert_eq!(
            err.to_string(),
            "series too short: 100 non-leap entries (need at least 365)"
        );
    }

    #[test]
    fn display_misaligned_epoch() {
        let err = AggregateError::MisalignedEpoch {
            expected: "1959-01-01".to_string(),
            got: "1959-06-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "misaligned epoch: series starts at '1959-06-01', expected '1959-01-01'"
        );
    }

    #[test]
    fn display_serialization() {
        let err = AggregateError::Serialization {
            reason: "key must be a string".to_string(),
        };
        assert_eq!(err.to_string(), "serialization error: key must be a string");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<AggregateError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<AggregateError>();
    }
}
