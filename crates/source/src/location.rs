//! Geographic location of a series.

use serde::Deserialize;

/// A point location identified by WGS84 coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Optional display name for logs and output.
    #[serde(default)]
    pub name: Option<String>,
}

impl Location {
    /// Creates a new `Location` without a display name.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({}, {})", self.latitude, self.longitude),
            None => write!(f, "({}, {})", self.latitude, self.longitude),
        }
    }
}
