//! Univariate-to-multivariate alignment.

use crate::core::{MultivariateSeries, TimeSeries};

/// Build a dimension-1 multivariate series from a univariate series.
///
/// Points are sorted ascending by timestamp on a copy; runs of equal
/// timestamps collapse into one point holding the arithmetic mean of the
/// run's values. The output timestamps are strictly increasing. An empty
/// input yields an empty series.
pub fn build_multivariate(series: &TimeSeries) -> MultivariateSeries {
    let mut aligned = MultivariateSeries::new(1);
    if series.is_empty() {
        return aligned;
    }

    let mut points: Vec<(i64, f64)> = series.points().collect();
    points.sort_by_key(|&(timestamp, _)| timestamp);

    let (mut current, mut sum) = points[0];
    let mut count = 1usize;

    for &(timestamp, value) in &points[1..] {
        if timestamp == current {
            sum += value;
            count += 1;
        } else {
            aligned.push_row(current, vec![sum / count as f64]);
            current = timestamp;
            sum = value;
            count = 1;
        }
    }
    aligned.push_row(current, vec![sum / count as f64]);

    aligned
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(points: &[(i64, f64)]) -> TimeSeries {
        TimeSeries::builder("k")
            .points(points.iter().copied())
            .build()
            .unwrap()
    }

    #[test]
    fn duplicate_timestamps_average() {
        let aligned = build_multivariate(&series(&[(1, 10.0), (1, 20.0), (2, 5.0)]));

        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned.timestamps(), &[1, 2]);
        assert_relative_eq!(aligned.row(0)[0], 15.0, epsilon = 1e-10);
        assert_relative_eq!(aligned.row(1)[0], 5.0, epsilon = 1e-10);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let aligned = build_multivariate(&series(&[]));
        assert!(aligned.is_empty());
        assert_eq!(aligned.dimension(), 1);
    }

    #[test]
    fn sorted_unique_input_is_unchanged() {
        let aligned = build_multivariate(&series(&[(1, 10.0), (2, 20.0), (3, 30.0)]));

        assert_eq!(aligned.timestamps(), &[1, 2, 3]);
        assert_relative_eq!(aligned.row(0)[0], 10.0, epsilon = 1e-10);
        assert_relative_eq!(aligned.row(1)[0], 20.0, epsilon = 1e-10);
        assert_relative_eq!(aligned.row(2)[0], 30.0, epsilon = 1e-10);
    }

    #[test]
    fn unsorted_input_is_sorted() {
        let aligned = build_multivariate(&series(&[(3, 30.0), (1, 10.0), (2, 20.0)]));

        assert_eq!(aligned.timestamps(), &[1, 2, 3]);
        assert_relative_eq!(aligned.row(0)[0], 10.0, epsilon = 1e-10);
    }

    #[test]
    fn run_longer_than_two_averages_all_values() {
        let aligned = build_multivariate(&series(&[(7, 1.0), (7, 2.0), (7, 6.0)]));

        assert_eq!(aligned.len(), 1);
        assert_relative_eq!(aligned.row(0)[0], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn trailing_duplicate_run_is_merged() {
        let aligned = build_multivariate(&series(&[(1, 5.0), (2, 10.0), (2, 30.0)]));

        assert_eq!(aligned.timestamps(), &[1, 2]);
        assert_relative_eq!(aligned.row(1)[0], 20.0, epsilon = 1e-10);
    }

    #[test]
    fn input_series_is_not_mutated() {
        let ts = series(&[(3, 30.0), (1, 10.0)]);
        build_multivariate(&ts);
        assert_eq!(ts.timestamps(), &[3, 1]);
    }
}
