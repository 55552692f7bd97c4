//! Core data structures for time series analysis.

mod multivariate;
mod time_series;

pub use multivariate::MultivariateSeries;
pub use time_series::{TimeSeries, TimeSeriesBuilder};
