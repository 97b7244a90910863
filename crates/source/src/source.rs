//! The data-source capability.

use crate::error::SourceError;
use crate::location::Location;
use crate::series::DailySeries;

/// One upstream daily variable at one location.
///
/// Implementations own the upstream API shape: they know how to phrase the
/// request for a location and how to pull the aligned label/value sequences
/// out of a raw response body. They never perform the request themselves,
/// which keeps the aggregation pipeline independent of any transport.
pub trait VariableSource {
    /// Human-readable description of the variable, for logs and display.
    fn describe(&self) -> &str;

    /// Builds the full request URL for the given location.
    fn build_request(&self, location: &Location) -> String;

    /// Extracts the daily series from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the body is unparseable, an expected
    /// field is missing, a reading is null, or the extracted sequences are
    /// misaligned.
    fn extract_series(&self, raw: &str) -> Result<DailySeries, SourceError>;
}
