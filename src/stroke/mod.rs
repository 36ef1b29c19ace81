//! Per-segment stroke outlines with mitered, beveled and capped joins.
//!
//! The pipeline is [`build_segments`] to pair each segment with its
//! neighbours, then [`emit_polygon`] per segment, which calls
//! [`solve_join`] once for every neighbour-side corner.
//!
//! # Example
//!
//! ```
//! use strokegradient::path::SampledPoint;
//! use strokegradient::stroke::{build_segments, emit_polygon};
//! use strokegradient::Point2;
//!
//! let samples = vec![
//!     SampledPoint::new(Point2::new(0.0, 0.0), 0.0),
//!     SampledPoint::new(Point2::new(10.0, 0.0), 0.5),
//!     SampledPoint::new(Point2::new(10.0, 10.0), 1.0),
//! ];
//!
//! for segment in build_segments(&samples, false) {
//!     let polygon = emit_polygon(&segment, 1.0).unwrap();
//!     assert_eq!(polygon.len(), 4);
//! }
//! ```

mod join;
mod polygon;
mod segment;

pub use join::{solve_join, Join, JoinKind, JoinPoints, INNER_TRIM_RATIO, PARALLEL_TOLERANCE};
pub use polygon::{emit_polygon, StrokePolygon};
pub use segment::{build_segments, SegmentContext};
