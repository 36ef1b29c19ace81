//! Join geometry at the shared vertex of two consecutive segments.
//!
//! [`solve_join`] offsets the polyline `p0 -> p1 -> p2` to its left by the
//! half-width `r` and works out how the two offset edges meet at `p1`:
//!
//! - straight continuation: the offsets already meet
//! - 180 degree reversal: a square cap is synthesized beyond the cusp
//! - outer corner: a miter, beveled once it grows past `2r`
//! - inner corner: the raw intersection, pulled back toward the path when it
//!   overshoots too far behind the corner
//!
//! Calling it again with the triple reversed gives the other side.

use crate::error::{GradientError, Result};
use crate::primitives::{constant, line_intersection, orthogonal_unit, Point2};
use num_traits::Float;

/// Largest `|u01 x u12|` for which two unit normals count as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-6;

/// Inner corners whose offset intersection lies further back than this,
/// measured as a fraction of the incoming segment, are trimmed.
///
/// This is an empirical threshold. It keeps sharp inner turns from throwing
/// the join point far across the path. On its own it does not keep the
/// stroke polygon simple; [`emit_polygon`](super::emit_polygon) clamps
/// corner points to their half of the segment for that.
pub const INNER_TRIM_RATIO: f64 = -1.0;

/// How the two offset edges were joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// Miter point or inner intersection (3 points).
    Pointed,
    /// Miter cut off at the miter limit (5 points).
    Beveled,
    /// The path continues straight through the vertex (3 points).
    ParallelSame,
    /// The path turns back on itself; a square cap is synthesized (3 points).
    ParallelReversed,
    /// Inner corner clamped toward the path (3 points).
    InnerTrim,
}

/// Join outline points, always three or five of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoinPoints<F> {
    /// `[incoming, join, outgoing]`.
    Three([Point2<F>; 3]),
    /// `[incoming, incoming_cut, miter_cut, outgoing_cut, outgoing]`.
    Five([Point2<F>; 5]),
}

impl<F> JoinPoints<F> {
    /// Returns the points in order.
    #[inline]
    pub fn as_slice(&self) -> &[Point2<F>] {
        match self {
            JoinPoints::Three(points) => points,
            JoinPoints::Five(points) => points,
        }
    }

    /// Returns 3 or 5.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Result of [`solve_join`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Join<F> {
    /// Which branch produced the join.
    pub kind: JoinKind,
    /// The outline points around the vertex.
    pub points: JoinPoints<F>,
}

impl<F: Float> Join<F> {
    fn three(kind: JoinKind, points: [Point2<F>; 3]) -> Self {
        Self {
            kind,
            points: JoinPoints::Three(points),
        }
    }

    /// Returns the outline points in order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        self.points.as_slice()
    }

    /// The vertex-side points that close an outline along the incoming leg
    /// `p0 -> p1`, ordered from that leg toward the corner.
    pub fn incoming_points(&self) -> &[Point2<F>] {
        match (&self.points, self.kind) {
            (JoinPoints::Three(p), JoinKind::ParallelReversed) => &p[0..1],
            (JoinPoints::Three(p), _) => &p[1..2],
            (JoinPoints::Five(p), _) => &p[1..3],
        }
    }

    /// The vertex-side points that open an outline along the outgoing leg
    /// `p1 -> p2`, ordered from the corner toward that leg.
    pub fn outgoing_points(&self) -> &[Point2<F>] {
        match (&self.points, self.kind) {
            (JoinPoints::Three(p), JoinKind::ParallelReversed) => &p[2..3],
            (JoinPoints::Three(p), _) => &p[1..2],
            (JoinPoints::Five(p), _) => &p[2..4],
        }
    }
}

/// Computes the join on the left side of `p0 -> p1 -> p2` at offset `r`.
///
/// # Errors
///
/// [`GradientError::DegenerateSegment`] if `p0 == p1` or `p1 == p2`.
///
/// # Example
///
/// ```
/// use strokegradient::stroke::{solve_join, JoinKind};
/// use strokegradient::Point2;
///
/// // A right turn: the left side is the outer corner.
/// let join = solve_join(
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, -10.0),
///     1.0,
/// )
/// .unwrap();
///
/// assert_eq!(join.kind, JoinKind::Pointed);
/// assert_eq!(join.points()[1], Point2::new(11.0, 1.0));
/// ```
pub fn solve_join<F: Float>(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, r: F) -> Result<Join<F>> {
    let u01 = orthogonal_unit(p0, p1).ok_or(GradientError::DegenerateSegment)?;
    let u12 = orthogonal_unit(p1, p2).ok_or(GradientError::DegenerateSegment)?;

    let p0_padded = p0 + u01 * r;
    let p1_padded_left = p1 + u01 * r;
    let p1_padded_right = p1 + u12 * r;
    let p2_padded = p2 + u12 * r;
    let miter_limit = r + r;

    if u01.cross(u12).abs() <= constant(PARALLEL_TOLERANCE) {
        if u01.dot(u12) > F::zero() {
            return Ok(Join::three(
                JoinKind::ParallelSame,
                [p0_padded, p1_padded_right, p2_padded],
            ));
        }

        let direction = (p1 - p0)
            .normalize()
            .ok_or(GradientError::DegenerateSegment)?;
        let cap = direction * miter_limit;
        return Ok(Join::three(
            JoinKind::ParallelReversed,
            [p1_padded_left + cap, p1 + cap, p1_padded_right + cap],
        ));
    }

    let intersection = line_intersection(p0_padded, p1_padded_left, p1_padded_right, p2_padded)
        .ok_or(GradientError::DegenerateSegment)?;

    // Position of the intersection along p0_padded -> p1_padded_left.
    let along = p1_padded_left - p0_padded;
    let ratio = if along.x.abs() >= along.y.abs() {
        (intersection.x - p0_padded.x) / along.x
    } else {
        (intersection.y - p0_padded.y) / along.y
    };

    if ratio > F::one() {
        let miter = intersection - p1;
        if miter.magnitude() <= miter_limit {
            return Ok(Join::three(
                JoinKind::Pointed,
                [p0_padded, intersection, p2_padded],
            ));
        }

        log::trace!("beveling miter at ({:?}, {:?})", p1.x.to_f64(), p1.y.to_f64());
        let miter_direction = miter.normalize().ok_or(GradientError::DegenerateSegment)?;
        let cutting_point = p1 + miter_direction * miter_limit;
        let cutting_direction =
            orthogonal_unit(p1, cutting_point).ok_or(GradientError::DegenerateSegment)?;
        let cutting_far = cutting_point + cutting_direction;

        let incoming_cut = line_intersection(p0_padded, p1_padded_left, cutting_point, cutting_far)
            .ok_or(GradientError::DegenerateSegment)?;
        let outgoing_cut = line_intersection(p2_padded, p1_padded_right, cutting_point, cutting_far)
            .ok_or(GradientError::DegenerateSegment)?;

        return Ok(Join {
            kind: JoinKind::Beveled,
            points: JoinPoints::Five([
                p0_padded,
                incoming_cut,
                cutting_point,
                outgoing_cut,
                p2_padded,
            ]),
        });
    }

    if ratio < constant(INNER_TRIM_RATIO) {
        log::trace!("trimming inner corner at ratio {:?}", ratio.to_f64());
        let inward = (intersection - p1)
            .normalize()
            .ok_or(GradientError::DegenerateSegment)?;
        let trimmed = p0.midpoint(p2) + inward * r;
        return Ok(Join::three(
            JoinKind::InnerTrim,
            [p0_padded, trimmed, p2_padded],
        ));
    }

    Ok(Join::three(
        JoinKind::Pointed,
        [p0_padded, intersection, p2_padded],
    ))
}
