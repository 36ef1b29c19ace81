//! Stroke outline of a single path segment.

use super::join::solve_join;
use super::segment::SegmentContext;
use crate::error::{GradientError, Result};
use crate::polygon::Polygon;
use crate::primitives::{constant, orthogonal_unit, Point2, Vec2};
use num_traits::Float;

/// Closed outline of one path segment, tagged for coloring.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePolygon<F> {
    /// The outline, 4 to 8 vertices, implicitly closed.
    pub outline: Polygon<F>,
    /// Representative position of the segment along the path.
    pub t: F,
}

impl<F: Float> StrokePolygon<F> {
    /// Returns the outline vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.outline.vertices
    }

    /// Returns the number of outline vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    /// Returns true if the outline has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}

/// Builds the stroke outline for the segment `start -> end` of `ctx`.
///
/// The outline runs along the left ("upper") offset edge from start to end,
/// around the end, back along the right ("lower") edge and around the start.
/// Each corner comes from [`solve_join`] when a neighbour exists; open ends
/// get a square end at the sample itself.
///
/// Corner points are kept on their own half of the segment. When the stroke
/// is wider than the segment is long, an inner corner point can land behind
/// the opposite end, which would fold the outline over itself. Such a point
/// is replaced by the plain offset of its own sample. The neighbouring
/// segments still cover the inner corner.
///
/// # Errors
///
/// [`GradientError::DegenerateSegment`] if any two consecutive points of the
/// context coincide.
///
/// # Example
///
/// ```
/// use strokegradient::path::SampledPoint;
/// use strokegradient::stroke::{emit_polygon, SegmentContext};
/// use strokegradient::Point2;
///
/// let ctx = SegmentContext::new(
///     None,
///     SampledPoint::new(Point2::new(0.0, 0.0), 0.0),
///     SampledPoint::new(Point2::new(50.0, 0.0), 0.5),
///     None,
/// );
///
/// let polygon = emit_polygon(&ctx, 5.0).unwrap();
/// assert_eq!(polygon.len(), 4);
/// assert_eq!(polygon.outline.area(), 500.0);
/// ```
pub fn emit_polygon<F: Float>(ctx: &SegmentContext<F>, r: F) -> Result<StrokePolygon<F>> {
    let p1 = ctx.start.point;
    let p2 = ctx.end.point;
    let u12 = orthogonal_unit(p1, p2).ok_or(GradientError::DegenerateSegment)?;
    let offset = u12 * r;

    let halves = Halves::new(p1, p2);
    let mut vertices: Vec<Point2<F>> = Vec::with_capacity(8);

    // Start, upper side.
    match ctx.prev {
        Some(p0) => {
            let join = solve_join(p0.point, p1, p2, r)?;
            halves.extend_start(&mut vertices, join.outgoing_points(), p1 + offset);
        }
        None => vertices.push(p1 + offset),
    }

    // End, upper then lower side.
    match ctx.next {
        Some(p3) => {
            let upper = solve_join(p1, p2, p3.point, r)?;
            halves.extend_end(&mut vertices, upper.incoming_points(), p2 + offset);
            let lower = solve_join(p3.point, p2, p1, r)?;
            halves.extend_end(&mut vertices, lower.outgoing_points(), p2 - offset);
        }
        None => {
            vertices.push(p2 + offset);
            vertices.push(p2 - offset);
        }
    }

    // Start, lower side.
    match ctx.prev {
        Some(p0) => {
            let join = solve_join(p2, p1, p0.point, r)?;
            halves.extend_start(&mut vertices, join.incoming_points(), p1 - offset);
        }
        None => vertices.push(p1 - offset),
    }

    debug_assert!((4..=8).contains(&vertices.len()));

    Ok(StrokePolygon {
        outline: Polygon::new(vertices),
        t: ctx.t,
    })
}

/// Splits a segment at its midpoint, measured along its direction.
struct Halves<F> {
    start: Point2<F>,
    direction: Vec2<F>,
    length_squared: F,
}

impl<F: Float> Halves<F> {
    fn new(start: Point2<F>, end: Point2<F>) -> Self {
        let direction = end - start;
        Self {
            start,
            direction,
            length_squared: direction.magnitude_squared(),
        }
    }

    /// Projection onto the segment, 0 at its start and 1 at its end.
    fn position(&self, p: Point2<F>) -> F {
        (p - self.start).dot(self.direction) / self.length_squared
    }

    fn extend_start(&self, out: &mut Vec<Point2<F>>, points: &[Point2<F>], fallback: Point2<F>) {
        let half = constant::<F>(0.5);
        for &p in points {
            if self.position(p) > half {
                log::trace!("corner point past segment middle, using start offset");
                out.push(fallback);
            } else {
                out.push(p);
            }
        }
    }

    fn extend_end(&self, out: &mut Vec<Point2<F>>, points: &[Point2<F>], fallback: Point2<F>) {
        let half = constant::<F>(0.5);
        for &p in points {
            if self.position(p) < half {
                log::trace!("corner point before segment middle, using end offset");
                out.push(fallback);
            } else {
                out.push(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::SampledPoint;
    use approx::assert_relative_eq;

    fn s(x: f64, y: f64, t: f64) -> SampledPoint<f64> {
        SampledPoint::new(Point2::new(x, y), t)
    }

    #[test]
    fn test_isolated_segment_is_rectangle() {
        let ctx = SegmentContext::new(None, s(0.0, 0.0, 0.0), s(10.0, 0.0, 1.0), None);
        let polygon = emit_polygon(&ctx, 1.0).unwrap();

        assert_eq!(
            polygon.vertices(),
            &[
                Point2::new(0.0, 1.0),
                Point2::new(10.0, 1.0),
                Point2::new(10.0, -1.0),
                Point2::new(0.0, -1.0),
            ]
        );
        assert_eq!(polygon.t, 0.5);
    }

    #[test]
    fn test_straight_neighbours_keep_rectangle() {
        let ctx = SegmentContext::new(
            Some(s(-5.0, 0.0, 0.0)),
            s(0.0, 0.0, 0.25),
            s(5.0, 0.0, 0.5),
            Some(s(10.0, 0.0, 0.75)),
        );
        let polygon = emit_polygon(&ctx, 2.0).unwrap();

        assert_eq!(polygon.len(), 4);
        assert_eq!(
            polygon.vertices(),
            &[
                Point2::new(0.0, 2.0),
                Point2::new(5.0, 2.0),
                Point2::new(5.0, -2.0),
                Point2::new(0.0, -2.0),
            ]
        );
    }

    #[test]
    fn test_mitered_end() {
        // Left turn at the end: upper side is inner, lower side is outer.
        let ctx = SegmentContext::new(
            None,
            s(0.0, 0.0, 0.0),
            s(10.0, 0.0, 0.5),
            Some(s(10.0, 10.0, 1.0)),
        );
        let polygon = emit_polygon(&ctx, 1.0).unwrap();
        let v = polygon.vertices();

        assert_eq!(v.len(), 4);
        assert_relative_eq!(v[1].x, 9.0, epsilon = 1e-12);
        assert_relative_eq!(v[1].y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[2].x, 11.0, epsilon = 1e-12);
        assert_relative_eq!(v[2].y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beveled_end_adds_point() {
        // Sharp right turn: the upper side bevels.
        let ctx = SegmentContext::new(
            None,
            s(0.0, 0.0, 0.0),
            s(10.0, 0.0, 0.5),
            Some(s(0.0, -1.0, 1.0)),
        );
        let polygon = emit_polygon(&ctx, 1.0).unwrap();
        assert_eq!(polygon.len(), 5);
        assert!(polygon.outline.is_finite());
    }

    #[test]
    fn test_beveled_on_both_sides_of_zigzag() {
        // Hairpin turns at both ends bevel the outer side of each corner.
        let ctx = SegmentContext::new(
            Some(s(10.0, 1.0, 0.0)),
            s(0.0, 0.0, 0.3),
            s(10.0, 0.0, 0.6),
            Some(s(0.0, -1.0, 1.0)),
        );
        let polygon = emit_polygon(&ctx, 1.0).unwrap();

        assert!(polygon.len() >= 6 && polygon.len() <= 8);
        assert!(polygon.outline.is_finite());
    }

    #[test]
    fn test_reversal_becomes_square_cap() {
        let ctx = SegmentContext::new(
            None,
            s(0.0, 0.0, 0.0),
            s(10.0, 0.0, 0.5),
            Some(s(0.0, 0.0, 1.0)),
        );
        let polygon = emit_polygon(&ctx, 1.0).unwrap();

        assert_eq!(
            polygon.vertices(),
            &[
                Point2::new(0.0, 1.0),
                Point2::new(12.0, 1.0),
                Point2::new(12.0, -1.0),
                Point2::new(0.0, -1.0),
            ]
        );
    }

    #[test]
    fn test_reversal_at_start() {
        let ctx = SegmentContext::new(
            Some(s(10.0, 0.0, 0.0)),
            s(0.0, 0.0, 0.5),
            s(10.0, 0.0, 1.0),
            None,
        );
        let polygon = emit_polygon(&ctx, 1.0).unwrap();

        assert_eq!(
            polygon.vertices(),
            &[
                Point2::new(-2.0, 1.0),
                Point2::new(10.0, 1.0),
                Point2::new(10.0, -1.0),
                Point2::new(-2.0, -1.0),
            ]
        );
    }

    #[test]
    fn test_short_segment_before_inner_corner() {
        // The inner intersection (9, 1) lies behind the segment start, so the
        // upper end falls back to the end offset.
        let ctx = SegmentContext::new(
            None,
            s(9.75, 0.0, 0.0),
            s(10.0, 0.0, 0.5),
            Some(s(10.0, 0.25, 1.0)),
        );
        let polygon = emit_polygon(&ctx, 1.0).unwrap();
        let v = polygon.vertices();

        assert_eq!(v.len(), 4);
        assert_eq!(v[0], Point2::new(9.75, 1.0));
        assert_eq!(v[1], Point2::new(10.0, 1.0));
        assert_relative_eq!(v[2].x, 11.0, epsilon = 1e-12);
        assert_relative_eq!(v[2].y, -1.0, epsilon = 1e-12);
        assert_eq!(v[3], Point2::new(9.75, -1.0));
    }

    #[test]
    fn test_short_segment_after_inner_corner() {
        let ctx = SegmentContext::new(
            Some(s(9.75, 0.0, 0.0)),
            s(10.0, 0.0, 0.5),
            s(10.0, 0.25, 1.0),
            None,
        );
        let polygon = emit_polygon(&ctx, 1.0).unwrap();
        let v = polygon.vertices();

        assert_eq!(v.len(), 4);
        assert_eq!(v[0], Point2::new(9.0, 0.0));
        assert_eq!(v[1], Point2::new(9.0, 0.25));
        assert_eq!(v[2], Point2::new(11.0, 0.25));
        assert_relative_eq!(v[3].x, 11.0, epsilon = 1e-12);
        assert_relative_eq!(v[3].y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_segment_is_an_error() {
        let ctx = SegmentContext::new(None, s(1.0, 1.0, 0.0), s(1.0, 1.0, 1.0), None);
        assert_eq!(emit_polygon(&ctx, 1.0), Err(GradientError::DegenerateSegment));
    }
}
