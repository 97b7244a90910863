//! Open-meteo historical weather archive source.

use serde_json::Value;

use crate::error::SourceError;
use crate::location::Location;
use crate::series::DailySeries;
use crate::source::VariableSource;

/// Default archive endpoint.
pub const DEFAULT_BASE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Default daily variable.
pub const DEFAULT_VARIABLE: &str = "temperature_2m_min";

/// Length of the date portion of a time label (`YYYY-MM-DD`).
const DATE_LEN: usize = 10;

/// The open-meteo historical weather archive, one daily variable.
///
/// Serves daily series from 1959 onwards. Responses carry the date labels
/// under `daily.time` and the readings under `daily.{variable}`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenMeteoArchive {
    base_url: String,
    timezone: String,
    variable: String,
    start_date: String,
    end_date: String,
    description: String,
}

impl OpenMeteoArchive {
    /// Creates an archive source for one daily variable over a fixed window.
    pub fn new(
        base_url: impl Into<String>,
        timezone: impl Into<String>,
        variable: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        let variable = variable.into();
        let description = format!("open-meteo archive: daily {variable}");
        Self {
            base_url: base_url.into(),
            timezone: timezone.into(),
            variable,
            start_date: start_date.into(),
            end_date: end_date.into(),
            description,
        }
    }

    /// Returns the daily variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    fn string_array(daily: &Value, field: &str) -> Result<Vec<String>, SourceError> {
        let array = daily
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| SourceError::MissingField {
                name: format!("daily.{field}"),
            })?;
        array
            .iter()
            .enumerate()
            .map(|(index, v)| {
                let s = v.as_str().ok_or_else(|| SourceError::NullValue {
                    field: field.to_string(),
                    index,
                })?;
                // Hourly-resolution labels carry a time part; only the date
                // portion is significant.
                Ok(s.get(..DATE_LEN).unwrap_or(s).to_string())
            })
            .collect()
    }

    fn number_array(daily: &Value, field: &str) -> Result<Vec<f64>, SourceError> {
        let array = daily
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| SourceError::MissingField {
                name: format!("daily.{field}"),
            })?;
        array
            .iter()
            .enumerate()
            .map(|(index, v)| {
                v.as_f64().ok_or_else(|| SourceError::NullValue {
                    field: field.to_string(),
                    index,
                })
            })
            .collect()
    }
}

impl VariableSource for OpenMeteoArchive {
    fn describe(&self) -> &str {
        &self.description
    }

    fn build_request(&self, location: &Location) -> String {
        format!(
            "{}?timezone={}&latitude={}&longitude={}&start_date={}&end_date={}&daily={}",
            self.base_url,
            self.timezone,
            location.latitude,
            location.longitude,
            self.start_date,
            self.end_date,
            self.variable,
        )
    }

    fn extract_series(&self, raw: &str) -> Result<DailySeries, SourceError> {
        let body: Value = serde_json::from_str(raw)?;
        let daily = body.get("daily").ok_or_else(|| SourceError::MissingField {
            name: "daily".to_string(),
        })?;

        let labels = Self::string_array(daily, "time")?;
        let values = Self::number_array(daily, &self.variable)?;
        DailySeries::new(labels, values)
    }
}
