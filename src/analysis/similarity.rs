//! Pairwise similarity analysis based on dynamic time warping.

use super::{
    build_multivariate, partition, AnalysisFunction, FieldMatchSpec, FunctionDescriptor,
    FunctionKind, ResultSink,
};
use crate::core::TimeSeries;
use crate::dtw::{DistanceMetric, WarpingEngine, WindowedDtw};
use crate::error::{AnalysisError, Result};
use std::fmt;

/// Classifies pairs of series as similar or dissimilar by their normalized
/// warping cost.
///
/// Configured from three argument tokens: a field filter splitting the batch
/// into two comparison groups (`compare(field=value;...)`), the warping
/// search radius, and the maximum normalized warping cost that still counts
/// as similar. Every left×right pair produces one result keyed by the left
/// series' join key.
pub struct FastDtw {
    fields: FieldMatchSpec,
    search_radius: usize,
    max_normalized_warping_cost: f64,
    metric: DistanceMetric,
    engine: Box<dyn WarpingEngine>,
}

impl FastDtw {
    /// Build the analysis from its query-argument tokens.
    ///
    /// A missing argument, a malformed numeric literal or a malformed field
    /// filter aborts configuration.
    pub fn from_args(args: &[&str]) -> Result<Self> {
        if args.len() < 3 {
            return Err(AnalysisError::MissingArguments {
                expected: 3,
                got: args.len(),
            });
        }

        let fields = FieldMatchSpec::parse(args[0])?;

        let search_radius = args[1].parse::<usize>().map_err(|_| {
            AnalysisError::InvalidArgument(format!(
                "search radius must be a non-negative integer, got '{}'",
                args[1]
            ))
        })?;

        let max_normalized_warping_cost = args[2].parse::<f64>().map_err(|_| {
            AnalysisError::InvalidArgument(format!(
                "max warping cost must be a number, got '{}'",
                args[2]
            ))
        })?;
        if max_normalized_warping_cost < 0.0 {
            return Err(AnalysisError::InvalidArgument(format!(
                "max warping cost must be non-negative, got '{}'",
                args[2]
            )));
        }

        Ok(Self {
            fields,
            search_radius,
            max_normalized_warping_cost,
            // Not configurable through arguments.
            metric: DistanceMetric::default(),
            engine: Box::new(WindowedDtw::new()),
        })
    }

    /// Replace the warping-cost engine.
    pub fn with_engine(mut self, engine: Box<dyn WarpingEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// The configured field filter.
    pub fn fields(&self) -> &FieldMatchSpec {
        &self.fields
    }

    /// The configured search radius.
    pub fn search_radius(&self) -> usize {
        self.search_radius
    }

    /// The configured similarity threshold.
    pub fn max_normalized_warping_cost(&self) -> f64 {
        self.max_normalized_warping_cost
    }
}

impl fmt::Debug for FastDtw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastDtw")
            .field("fields", &self.fields)
            .field("search_radius", &self.search_radius)
            .field(
                "max_normalized_warping_cost",
                &self.max_normalized_warping_cost,
            )
            .field("metric", &self.metric)
            .finish_non_exhaustive()
    }
}

impl AnalysisFunction for FastDtw {
    fn descriptor(&self) -> FunctionDescriptor {
        FunctionDescriptor::new("fastdtw", FunctionKind::Analysis)
    }

    fn arguments(&self) -> Vec<String> {
        vec![
            format!("search radius={}", self.search_radius),
            format!("max warping cost={}", self.max_normalized_warping_cost),
            format!("distance function={}", self.metric.name()),
        ]
    }

    fn execute(&self, series: &[TimeSeries], sink: &ResultSink) {
        let (left_side, right_side) = partition(series, &self.fields);

        for left in &left_side {
            let compare = build_multivariate(left);

            for right in &right_side {
                let with = build_multivariate(right);

                let info =
                    self.engine
                        .warp_info(&compare, &with, self.search_radius, self.metric);
                sink.add(
                    self.descriptor(),
                    info.normalized_distance() <= self.max_normalized_warping_cost,
                    Some(left.join_key().to_string()),
                );
            }
        }
    }
}
