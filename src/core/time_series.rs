//! TimeSeries data structure for representing temporal data.

use crate::error::{AnalysisError, Result};
use std::collections::HashMap;

/// A univariate time series as handed to analysis functions by the query
/// layer.
///
/// Timestamps are epoch milliseconds and are not required to be sorted at
/// input; `sort_by_time` establishes ascending order in place. Every series
/// carries an attribute mapping (arbitrary string tags) and an opaque join
/// key that correlates results back to this series across a query.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    join_key: String,
    timestamps: Vec<i64>,
    values: Vec<f64>,
    attributes: HashMap<String, String>,
}

/// Builder for constructing TimeSeries.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesBuilder {
    join_key: String,
    timestamps: Vec<i64>,
    values: Vec<f64>,
    attributes: HashMap<String, String>,
}

impl TimeSeriesBuilder {
    pub fn new(join_key: impl Into<String>) -> Self {
        Self {
            join_key: join_key.into(),
            ..Self::default()
        }
    }

    /// Append a single data point.
    pub fn point(mut self, timestamp: i64, value: f64) -> Self {
        self.timestamps.push(timestamp);
        self.values.push(value);
        self
    }

    /// Append data points from an iterator of (timestamp, value) pairs.
    pub fn points(mut self, points: impl IntoIterator<Item = (i64, f64)>) -> Self {
        for (timestamp, value) in points {
            self.timestamps.push(timestamp);
            self.values.push(value);
        }
        self
    }

    /// Set an attribute tag.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<TimeSeries> {
        TimeSeries::new(self.join_key, self.timestamps, self.values, self.attributes)
    }
}

impl TimeSeries {
    /// Create a new TimeSeries from parallel timestamp/value sequences.
    ///
    /// The sequences must have equal length.
    pub fn new(
        join_key: impl Into<String>,
        timestamps: Vec<i64>,
        values: Vec<f64>,
        attributes: HashMap<String, String>,
    ) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(AnalysisError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }

        Ok(Self {
            join_key: join_key.into(),
            timestamps,
            values,
            attributes,
        })
    }

    /// Start a builder for a series with the given join key.
    pub fn builder(join_key: impl Into<String>) -> TimeSeriesBuilder {
        TimeSeriesBuilder::new(join_key)
    }

    /// Get the number of data points.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series has no data points.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get the opaque join key identifying this series.
    pub fn join_key(&self) -> &str {
        &self.join_key
    }

    /// Get timestamps (epoch milliseconds).
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Get values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over (timestamp, value) pairs in storage order.
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Get the attribute mapping.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Look up a single attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    /// Set an attribute tag.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Sort the series in place, ascending by timestamp.
    ///
    /// Values are permuted in tandem; points with equal timestamps keep
    /// their relative order.
    pub fn sort_by_time(&mut self) {
        let mut points: Vec<(i64, f64)> = self.points().collect();
        points.sort_by_key(|&(timestamp, _)| timestamp);

        for (i, (timestamp, value)) in points.into_iter().enumerate() {
            self.timestamps[i] = timestamp;
            self.values[i] = value;
        }
    }
}
