//! # clima-source
//!
//! Data-source capability for daily climate series.
//!
//! A [`VariableSource`] describes one upstream variable at one location: it
//! can label itself for display, build the request that fetches its raw
//! data, and extract an aligned [`DailySeries`] from a raw response body.
//! The capability performs no network I/O; the caller owns the transport.
//!
//! One concrete source ships with the crate: [`OpenMeteoArchive`], the
//! open-meteo historical weather archive serving daily series from 1959
//! onwards.

mod error;
mod location;
mod open_meteo;
mod series;
mod source;
mod years;

pub use error::SourceError;
pub use location::Location;
pub use open_meteo::{DEFAULT_BASE_URL, DEFAULT_VARIABLE, OpenMeteoArchive};
pub use series::DailySeries;
pub use source::VariableSource;
pub use years::year_list;
