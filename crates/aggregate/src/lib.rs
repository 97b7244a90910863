//! # clima-aggregate
//!
//! Day-of-year aggregation of multi-decade daily temperature series.
//!
//! A raw daily series (ISO date labels plus one reading per day) is aligned
//! against the 365-slot reference calendar and reduced in two named passes:
//!
//! 1. **Slot-sample collection** — every non-leap-day reading is filed under
//!    its day-of-year slot, giving each slot one sample per observed year;
//!    per-slot minimum, maximum, mean, and rank-based extremity thresholds
//!    are derived from the sorted samples.
//! 2. **Extremity histogram** — the series is walked a second time, counting
//!    per year how many days fall strictly below the low threshold or
//!    strictly above the high threshold of their slot.
//!
//! The two passes are deliberately separate stages: the histogram depends on
//! thresholds that are only known once the first pass has seen the complete
//! history.
//!
//! ## Quick Start
//!
//! ```ignore
//! use clima_aggregate::{AggregateConfig, aggregate};
//! use clima_calendar::noleap_labels;
//!
//! let labels = noleap_labels(1959, 3 * 365);
//! let values: Vec<f64> = (0..labels.len()).map(|i| (i % 30) as f64).collect();
//! let config = AggregateConfig::default();
//! let stats = aggregate(&labels, &values, Some(1960), &config)?;
//! assert_eq!(stats.min_per_day.len(), 365);
//! # Ok::<(), clima_aggregate::AggregateError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `aggregate` | Validation and orchestration of the two passes |
//! | `walk` | Leap-skipping cursor walk shared by both passes |
//! | `samples` | Pass 1: per-slot sample collection |
//! | `summary` | Per-slot order statistics and thresholds |
//! | `histogram` | Pass 2: per-year extremity counts |
//! | `result` | The aggregation result and its JSON form |
//! | `config` | Tunable parameters and policy defaults |
//! | `error` | Error types |

mod aggregate;
mod config;
mod error;
mod histogram;
mod result;
mod samples;
mod summary;
mod walk;

pub use aggregate::aggregate;
pub use config::{AggregateConfig, DEFAULT_EPOCH_YEAR, EXTREMITY_RANK};
pub use error::AggregateError;
pub use result::{DayOfYearStats, to_json};
