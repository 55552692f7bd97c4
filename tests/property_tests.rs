//! Property-based tests for the analysis layer.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series data.

use anofox_analysis::analysis::{
    build_multivariate, partition, AnalysisFunction, FastDtw, FieldMatchSpec, ResultSink,
};
use anofox_analysis::core::TimeSeries;
use anofox_analysis::dtw::{DistanceMetric, WarpingEngine, WindowedDtw};
use anofox_analysis::utils::percentile;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeSet;

/// Create a series with sequential timestamps and the given attribute.
fn make_series(key: &str, env: &str, values: &[f64]) -> TimeSeries {
    TimeSeries::builder(key)
        .points(values.iter().enumerate().map(|(i, &v)| (i as i64, v)))
        .attribute("env", env)
        .build()
        .unwrap()
}

/// Strategy for a batch of series labelled with one of three environments.
fn labelled_batch_strategy() -> impl Strategy<Value = Vec<TimeSeries>> {
    prop::collection::vec((0..3usize, prop::collection::vec(-100.0..100.0f64, 1..8)), 0..12)
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (env_idx, values))| {
                    let env = ["prod", "staging", "dev"][env_idx];
                    make_series(&format!("series-{i}"), env, &values)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn percentile_is_permutation_invariant(
        values in prop::collection::vec(-1e6..1e6f64, 1..60),
        seed in any::<u64>(),
        p in 0.0..=1.0f64,
    ) {
        let mut shuffled = values.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

        // Identical multisets sort to identical sequences, so the results
        // match exactly.
        prop_assert_eq!(percentile(&values, p), percentile(&shuffled, p));
    }

    #[test]
    fn percentile_lies_within_the_sample_range(
        values in prop::collection::vec(-1e6..1e6f64, 1..60),
        p in 0.0..=1.0f64,
    ) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let estimate = percentile(&values, p);

        prop_assert!(estimate >= min && estimate <= max);
    }

    #[test]
    fn partition_is_total_and_disjoint(batch in labelled_batch_strategy()) {
        let spec = FieldMatchSpec::parse("env=prod").unwrap();
        let (left, right) = partition(&batch, &spec);

        prop_assert_eq!(left.len() + right.len(), batch.len());

        let mut seen = BTreeSet::new();
        for ts in left.iter().chain(right.iter()) {
            prop_assert!(seen.insert(ts.join_key().to_string()));
        }
    }

    #[test]
    fn partition_preserves_input_order(batch in labelled_batch_strategy()) {
        let spec = FieldMatchSpec::parse("env=prod").unwrap();
        let (left, right) = partition(&batch, &spec);

        for group in [&left, &right] {
            let positions: Vec<usize> = group
                .iter()
                .map(|ts| {
                    batch
                        .iter()
                        .position(|s| s.join_key() == ts.join_key())
                        .unwrap()
                })
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            prop_assert_eq!(positions, sorted);
        }
    }

    #[test]
    fn aligner_emits_strictly_increasing_distinct_timestamps(
        points in prop::collection::vec((0..20i64, -100.0..100.0f64), 0..40),
    ) {
        let ts = TimeSeries::builder("k").points(points.clone()).build().unwrap();
        let aligned = build_multivariate(&ts);

        let distinct: BTreeSet<i64> = points.iter().map(|&(t, _)| t).collect();
        prop_assert_eq!(aligned.len(), distinct.len());
        prop_assert!(aligned
            .timestamps()
            .windows(2)
            .all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn aligner_means_stay_within_the_value_range(
        points in prop::collection::vec((0..10i64, -100.0..100.0f64), 1..40),
    ) {
        let ts = TimeSeries::builder("k").points(points.clone()).build().unwrap();
        let aligned = build_multivariate(&ts);

        let min = points.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
        let max = points.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);
        for i in 0..aligned.len() {
            let value = aligned.row(i)[0];
            prop_assert!(value >= min - 1e-9 && value <= max + 1e-9);
        }
    }

    #[test]
    fn similarity_emits_exactly_the_cross_product(batch in labelled_batch_strategy()) {
        let spec = FieldMatchSpec::parse("env=prod").unwrap();
        let (left, right) = partition(&batch, &spec);
        let expected = left.len() * right.len();

        let analysis = FastDtw::from_args(&["env=prod", "2", "0.4"]).unwrap();
        let sink = ResultSink::new();
        analysis.execute(&batch, &sink);

        prop_assert_eq!(sink.len(), expected);

        let left_keys: BTreeSet<&str> = left.iter().map(|ts| ts.join_key()).collect();
        let results = sink.into_results();
        for result in &results {
            prop_assert!(left_keys.contains(result.key().unwrap()));
        }
    }

    #[test]
    fn dtw_cost_of_identical_series_is_zero(
        values in prop::collection::vec(-100.0..100.0f64, 1..30),
        radius in 0..8usize,
    ) {
        let aligned = build_multivariate(&make_series("k", "prod", &values));
        let info =
            WindowedDtw::new().warp_info(&aligned, &aligned, radius, DistanceMetric::Euclidean);

        prop_assert!(info.distance().abs() < 1e-9);
        prop_assert!(info.normalized_distance().abs() < 1e-9);
    }

    #[test]
    fn dtw_cost_is_non_negative(
        a in prop::collection::vec(-100.0..100.0f64, 1..20),
        b in prop::collection::vec(-100.0..100.0f64, 1..20),
        radius in 0..8usize,
    ) {
        let left = build_multivariate(&make_series("a", "prod", &a));
        let right = build_multivariate(&make_series("b", "staging", &b));
        let info = WindowedDtw::new().warp_info(&left, &right, radius, DistanceMetric::Euclidean);

        prop_assert!(info.distance() >= 0.0);
        prop_assert!(info.normalized_distance() >= 0.0);
    }
}
