//! Arc-length parameterized polyline.

use super::PathGeometry;
use crate::primitives::Point2;
use num_traits::Float;

/// A polyline that answers arc-length queries.
///
/// Cumulative chord lengths are computed once on construction, so
/// [`point_at_length`](PathGeometry::point_at_length) is a binary search.
///
/// # Example
///
/// ```
/// use strokegradient::path::{PathGeometry, Polyline};
/// use strokegradient::Point2;
///
/// let path = Polyline::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ]);
///
/// assert_eq!(path.total_length(), 20.0);
/// assert_eq!(path.point_at_length(15.0), Point2::new(10.0, 5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<F> {
    points: Vec<Point2<F>>,
    cumulative: Vec<F>,
}

impl<F: Float> Polyline<F> {
    /// Creates a polyline from its vertices.
    pub fn new(points: Vec<Point2<F>>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = F::zero();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total = total + points[i - 1].distance(*p);
            }
            cumulative.push(total);
        }

        Self { points, cumulative }
    }

    /// Returns the vertices.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polyline has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<F: Float> PathGeometry<F> for Polyline<F> {
    fn total_length(&self) -> F {
        self.cumulative.last().copied().unwrap_or_else(F::zero)
    }

    fn point_at_length(&self, length: F) -> Point2<F> {
        let Some(&first) = self.points.first() else {
            return Point2::origin();
        };
        if length <= F::zero() {
            return first;
        }

        // First vertex whose cumulative length reaches the query.
        let idx = self.cumulative.partition_point(|&c| c < length);
        if idx >= self.points.len() {
            return self.points[self.points.len() - 1];
        }
        if idx == 0 {
            return first;
        }

        let start = self.cumulative[idx - 1];
        let span = self.cumulative[idx] - start;
        if span <= F::zero() {
            return self.points[idx];
        }

        let local = (length - start) / span;
        self.points[idx - 1].lerp(self.points[idx], local)
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polyline<F> {
    fn from(points: Vec<Point2<F>>) -> Self {
        Self::new(points)
    }
}
