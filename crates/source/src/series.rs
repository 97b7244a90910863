//! Aligned daily series container.

use crate::error::SourceError;

/// A daily series: one ISO date label and one numeric reading per day.
///
/// The two sequences are guaranteed equal in length; ordering and
/// contiguity come from the upstream source and are validated later by the
/// aggregation's structural checks.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl DailySeries {
    /// Creates a new `DailySeries` from parallel label and value sequences.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::LengthMismatch`] if the sequences differ in
    /// length.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self, SourceError> {
        if labels.len() != values.len() {
            return Err(SourceError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    /// Returns the date labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the daily readings.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of daily entries.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the series contains no entries.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Consumes self and returns the label and value vectors.
    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.labels, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let series = DailySeries::new(
            vec!["2000-01-01".to_string(), "2000-01-02".to_string()],
            vec![1.5, -0.5],
        )
        .unwrap();
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.labels()[1], "2000-01-02");
        assert_eq!(series.values()[1], -0.5);
    }

    #[test]
    fn new_length_mismatch() {
        let err = DailySeries::new(vec!["2000-01-01".to_string()], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            SourceError::LengthMismatch {
                labels: 1,
                values: 2,
            }
        );
    }

    #[test]
    fn empty_series() {
        let series = DailySeries::new(vec![], vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn into_parts_roundtrip() {
        let labels = vec!["2000-01-01".to_string()];
        let values = vec![3.25];
        let series = DailySeries::new(labels.clone(), values.clone()).unwrap();
        assert_eq!(series.into_parts(), (labels, values));
    }
}
