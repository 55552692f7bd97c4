//! Dynamic Time Warping distance for aligned multivariate series.
//!
//! DTW is an alignment-tolerant distance measure between two ordered
//! sequences. The similarity analysis talks to the engine through the
//! [`WarpingEngine`] trait, so the built-in windowed implementation can be
//! swapped for another warping-cost backend.

mod distance;
mod engine;

pub use distance::{point_distance, DistanceMetric};
pub use engine::{WarpInfo, WarpingEngine, WindowedDtw};
