//! Box-plot outlier analysis.

use super::{AnalysisFunction, FunctionDescriptor, FunctionKind, ResultSink};
use crate::core::TimeSeries;
use crate::utils::percentile;

/// Multiplier applied to the interquartile range.
const IQR_MULTIPLIER: f64 = 1.5;

/// Detects outliers using the box-plot rule.
///
/// A series gets a `true` verdict when any value exceeds
/// `(q3 - q1) * 1.5 + q3`, where `q1`/`q3` are the 25th/75th percentiles.
/// Only the upper tail is checked. The function takes no arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outlier;

impl Outlier {
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisFunction for Outlier {
    fn descriptor(&self) -> FunctionDescriptor {
        FunctionDescriptor::new("outlier", FunctionKind::Analysis)
    }

    fn execute(&self, series: &[TimeSeries], sink: &ResultSink) {
        for ts in series {
            // An empty series reports no outlier.
            if ts.is_empty() {
                sink.add(self.descriptor(), false, None);
                continue;
            }

            let values = ts.values();
            let q1 = percentile(values, 0.25);
            let q3 = percentile(values, 0.75);
            let threshold = (q3 - q1) * IQR_MULTIPLIER + q3;

            // Scan in original order; the first exceedance decides.
            let found = values.iter().any(|&value| value > threshold);
            sink.add(self.descriptor(), found, None);
        }
    }
}
