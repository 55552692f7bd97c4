//! Multivariate time series with strictly increasing timestamps.

use crate::error::{AnalysisError, Result};

/// An ordered sequence of (timestamp, value-vector) points.
///
/// Timestamps are strictly increasing; the vector width is fixed at
/// construction. The multivariate aligner builds dimension-1 instances from
/// univariate series, but the type itself is dimension-generic.
#[derive(Debug, Clone, PartialEq)]
pub struct MultivariateSeries {
    dimension: usize,
    timestamps: Vec<i64>,
    values: Vec<Vec<f64>>,
}

impl MultivariateSeries {
    /// Create an empty series with the given vector width.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            timestamps: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append a point.
    ///
    /// The timestamp must be greater than the last one and the row must
    /// match the series dimension.
    pub fn add(&mut self, timestamp: i64, row: Vec<f64>) -> Result<()> {
        if row.len() != self.dimension {
            return Err(AnalysisError::DimensionMismatch {
                expected: self.dimension,
                got: row.len(),
            });
        }
        if let Some(&last) = self.timestamps.last() {
            if timestamp <= last {
                return Err(AnalysisError::TimestampError(format!(
                    "timestamps must be strictly increasing: {timestamp} follows {last}"
                )));
            }
        }

        self.push_row(timestamp, row);
        Ok(())
    }

    /// Append a point whose invariants the caller has already established.
    pub(crate) fn push_row(&mut self, timestamp: i64, row: Vec<f64>) {
        debug_assert_eq!(row.len(), self.dimension);
        debug_assert!(self.timestamps.last().is_none_or(|&last| timestamp > last));

        self.timestamps.push(timestamp);
        self.values.push(row);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get the vector width.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get timestamps (epoch milliseconds, strictly increasing).
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Get the value vector at the given point index.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.values[index]
    }
}
