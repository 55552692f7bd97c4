//! # anofox-analysis
//!
//! Query-time analysis functions for time series.
//!
//! Provides the pluggable boolean analyses evaluated by a time-series query
//! engine against resolved series: box-plot outlier detection and pairwise
//! DTW similarity classification, along with the shared execution contract
//! (configure once, execute per batch) and the append-only result sink the
//! query layer consumes.

pub mod analysis;
pub mod core;
pub mod dtw;
pub mod error;
pub mod utils;

pub use error::{AnalysisError, Result};

pub mod prelude {
    pub use crate::analysis::{
        AnalysisFunction, AnalysisResult, FastDtw, FieldMatchSpec, FunctionDescriptor,
        FunctionKind, Outlier, ResultSink,
    };
    pub use crate::core::{MultivariateSeries, TimeSeries};
    pub use crate::dtw::{DistanceMetric, WarpInfo, WarpingEngine, WindowedDtw};
    pub use crate::error::{AnalysisError, Result};
}
