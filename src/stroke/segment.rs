//! Splitting a sample sequence into overlapping segment contexts.

use crate::path::SampledPoint;
use num_traits::Float;

/// One path segment `start -> end` together with its neighbours.
///
/// `prev` and `next` are only `None` at the two ends of an open path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentContext<F> {
    /// Sample before `start`, if any.
    pub prev: Option<SampledPoint<F>>,
    /// First point of the segment.
    pub start: SampledPoint<F>,
    /// Last point of the segment.
    pub end: SampledPoint<F>,
    /// Sample after `end`, if any.
    pub next: Option<SampledPoint<F>>,
    /// Representative position of the segment, `(start.t + end.t) / 2`.
    pub t: F,
}

impl<F: Float> SegmentContext<F> {
    /// Creates a context and derives its representative `t`.
    pub fn new(
        prev: Option<SampledPoint<F>>,
        start: SampledPoint<F>,
        end: SampledPoint<F>,
        next: Option<SampledPoint<F>>,
    ) -> Self {
        let t = (start.t + end.t) / (F::one() + F::one());
        Self {
            prev,
            start,
            end,
            next,
            t,
        }
    }
}

/// Builds one [`SegmentContext`] per consecutive pair of samples.
///
/// For a closed path the first segment borrows the second-to-last sample as
/// its predecessor and the last segment borrows the second sample as its
/// successor, so the joins at the seam match up. The last sample of a closed
/// path is expected to duplicate the first.
///
/// # Example
///
/// ```
/// use strokegradient::path::SampledPoint;
/// use strokegradient::stroke::build_segments;
/// use strokegradient::Point2;
///
/// let samples = vec![
///     SampledPoint::new(Point2::new(0.0, 0.0), 0.0),
///     SampledPoint::new(Point2::new(5.0, 0.0), 0.5),
///     SampledPoint::new(Point2::new(10.0, 0.0), 1.0),
/// ];
///
/// let segments = build_segments(&samples, false);
/// assert_eq!(segments.len(), 2);
/// assert!(segments[0].prev.is_none());
/// assert_eq!(segments[0].t, 0.25);
/// ```
pub fn build_segments<F: Float>(points: &[SampledPoint<F>], closed: bool) -> Vec<SegmentContext<F>> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let before_start = if closed && n >= 3 { Some(points[n - 2]) } else { None };
    let after_end = if closed && n >= 3 { Some(points[1]) } else { None };

    (0..n - 1)
        .map(|i| {
            let prev = if i > 0 { Some(points[i - 1]) } else { before_start };
            let next = if i + 2 < n { Some(points[i + 2]) } else { after_end };
            SegmentContext::new(prev, points[i], points[i + 1], next)
        })
        .collect()
}
