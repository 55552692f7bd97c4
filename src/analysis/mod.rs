//! Query-time analysis functions over time series.
//!
//! An analysis function is configured once from query-argument tokens and
//! then executed against batches of resolved series, appending boolean
//! verdicts to a shared [`ResultSink`]. Configured instances are immutable
//! and safe to share across threads.
//!
//! # Example
//!
//! ```
//! use anofox_analysis::analysis::{AnalysisFunction, Outlier, ResultSink};
//! use anofox_analysis::core::TimeSeries;
//!
//! let series = TimeSeries::builder("cpu.load")
//!     .points([(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0), (5, 5.0), (6, 100.0)])
//!     .build()
//!     .unwrap();
//!
//! let sink = ResultSink::new();
//! Outlier::new().execute(std::slice::from_ref(&series), &sink);
//!
//! assert!(sink.results()[0].verdict());
//! ```

mod align;
mod outlier;
mod partition;
mod similarity;
mod sink;

pub use align::build_multivariate;
pub use outlier::Outlier;
pub use partition::{partition, FieldMatchSpec};
pub use similarity::FastDtw;
pub use sink::{AnalysisResult, ResultSink};

use crate::core::TimeSeries;

/// Category of a query function.
///
/// The query layer groups functions into aggregations (series to scalar),
/// analyses (series to boolean verdict) and transformations (series to
/// series); this crate ships analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Aggregation,
    Analysis,
    Transformation,
}

impl FunctionKind {
    /// Stable lowercase tag, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::Aggregation => "aggregation",
            FunctionKind::Analysis => "analysis",
            FunctionKind::Transformation => "transformation",
        }
    }
}

/// Stable identity of a function: the short name it is invoked by from a
/// query string, plus its category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDescriptor {
    query_name: &'static str,
    kind: FunctionKind,
}

impl FunctionDescriptor {
    pub const fn new(query_name: &'static str, kind: FunctionKind) -> Self {
        Self { query_name, kind }
    }

    pub fn query_name(&self) -> &'static str {
        self.query_name
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }
}

/// Common interface for all analysis functions.
///
/// This trait is object-safe and can be used with `Box<dyn AnalysisFunction>`.
/// Implementations parse their configuration in an inherent constructor
/// returning `Result<Self>`; once built they are read-only, so one instance
/// may serve concurrent query evaluations.
pub trait AnalysisFunction: Send + Sync {
    /// The function's stable identity.
    fn descriptor(&self) -> FunctionDescriptor;

    /// Diagnostic echo of the resolved configuration, for tooling only.
    fn arguments(&self) -> Vec<String> {
        Vec::new()
    }

    /// Evaluate one batch of series, appending zero or more verdicts to the
    /// sink.
    fn execute(&self, series: &[TimeSeries], sink: &ResultSink);
}

/// Type alias for boxed analysis-function trait objects.
pub type BoxedAnalysis = Box<dyn AnalysisFunction>;
