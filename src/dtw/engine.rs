//! Warping-cost engine: trait boundary and the built-in windowed DTW.

use super::distance::{point_distance, DistanceMetric};
use crate::core::MultivariateSeries;

/// Outcome of one warping-cost computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpInfo {
    distance: f64,
    path_length: usize,
}

impl WarpInfo {
    pub fn new(distance: f64, path_length: usize) -> Self {
        Self {
            distance,
            path_length,
        }
    }

    /// Total warping cost along the optimal path.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of cells on the optimal path.
    pub fn path_length(&self) -> usize {
        self.path_length
    }

    /// Warping cost divided by path length, comparable across series of
    /// different lengths. Infinite when no path exists.
    pub fn normalized_distance(&self) -> f64 {
        if self.path_length == 0 {
            f64::INFINITY
        } else {
            self.distance / self.path_length as f64
        }
    }
}

/// Computes the warping cost between two aligned multivariate series.
///
/// The cost must be non-negative and monotonic in dissimilarity. Engines are
/// shared across threads by configured analysis functions.
pub trait WarpingEngine: Send + Sync {
    fn warp_info(
        &self,
        a: &MultivariateSeries,
        b: &MultivariateSeries,
        search_radius: usize,
        metric: DistanceMetric,
    ) -> WarpInfo;
}

/// DTW with a Sakoe-Chiba band constraint.
///
/// The band limits warping to within `search_radius` positions of the
/// diagonal, widened to at least the length difference so an alignment path
/// always exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowedDtw;

impl WindowedDtw {
    pub fn new() -> Self {
        Self
    }
}

impl WarpingEngine for WindowedDtw {
    fn warp_info(
        &self,
        a: &MultivariateSeries,
        b: &MultivariateSeries,
        search_radius: usize,
        metric: DistanceMetric,
    ) -> WarpInfo {
        if a.is_empty() || b.is_empty() {
            return WarpInfo::new(f64::INFINITY, 0);
        }

        let n = a.len();
        let m = b.len();

        // Ensure the window is at least |n - m|
        let window = search_radius.max(n.abs_diff(m));

        let mut dtw = vec![vec![f64::INFINITY; m + 1]; n + 1];
        dtw[0][0] = 0.0;

        for i in 1..=n {
            let j_start = 1.max(i.saturating_sub(window));
            let j_end = m.min(i + window);

            for j in j_start..=j_end {
                let cost = point_distance(metric, a.row(i - 1), b.row(j - 1));
                dtw[i][j] = cost + dtw[i - 1][j].min(dtw[i][j - 1]).min(dtw[i - 1][j - 1]);
            }
        }

        // Backtrack to count the optimal path. Cells outside the band hold
        // infinity, so the walk never leaves it.
        let mut i = n;
        let mut j = m;
        let mut path_length = 0;

        while i > 0 && j > 0 {
            path_length += 1;

            let diag = dtw[i - 1][j - 1];
            let left = dtw[i][j - 1];
            let up = dtw[i - 1][j];

            if diag <= left && diag <= up {
                i -= 1;
                j -= 1;
            } else if left < up {
                j -= 1;
            } else {
                i -= 1;
            }
        }

        WarpInfo::new(dtw[n][m], path_length)
    }
}
