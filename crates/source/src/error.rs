//! Error types for the clima-source crate.

/// Error type for all fallible operations in the clima-source crate.
///
/// Covers malformed response bodies, missing or null fields, and
/// label/value misalignment in extracted series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// Returned when the raw response body is not parseable JSON.
    #[error("unparseable response: {reason}")]
    Parse {
        /// Description of the underlying parse failure.
        reason: String,
    },

    /// Returned when an expected field is absent from the response.
    #[error("field '{name}' not found in response")]
    MissingField {
        /// Dotted path of the missing field.
        name: String,
    },

    /// Returned when a daily reading is null or not numeric.
    #[error("null or non-numeric reading in '{field}' at index {index}")]
    NullValue {
        /// Name of the daily variable field.
        field: String,
        /// Index of the offending reading.
        index: usize,
    },

    /// Returned when the extracted label and value sequences differ in length.
    #[error("series length mismatch: {labels} labels vs {values} values")]
    LengthMismatch {
        /// Number of extracted labels.
        labels: usize,
        /// Number of extracted values.
        values: usize,
    },
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Parse {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse() {
        let err = SourceError::Parse {
            reason: "expected value at line 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unparseable response: expected value at line 1"
        );
    }

    #[test]
    fn display_missing_field() {
        let err = SourceError::MissingField {
            name: "daily.time".to_string(),
        };
        assert_eq!(err.to_string(), "field 'daily.time' not found in response");
    }

    #[test]
    fn display_null_value() {
        let err = SourceError::NullValue {
            field: "temperature_2m_min".to_string(),
            index: 12,
        };
        assert_eq!(
            err.to_string(),
            "null or non-numeric reading in 'temperature_2m_min' at index 12"
        );
    }

    #[test]
    fn display_length_mismatch() {
        let err = SourceError::LengthMismatch {
            labels: 365,
            values: 364,
        };
        assert_eq!(
            err.to_string(),
            "series length mismatch: 365 labels vs 364 values"
        );
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SourceError = json_err.into();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<SourceError>();
    }
}
