//! 2D infinite lines and the offset-edge helpers built on them.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// # Example
///
/// ```
/// use strokegradient::primitives::{Line2, Point2};
///
/// let horizontal: Line2<f64> = Line2::from_points(Point2::new(0.0, 1.0), Point2::new(4.0, 1.0));
/// let vertical = Line2::from_points(Point2::new(3.0, 0.0), Point2::new(3.0, 4.0));
/// assert_eq!(horizontal.intersection(&vertical), Some(Point2::new(3.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line.
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized).
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line passing through two points.
    #[inline]
    pub fn from_points(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self {
            origin: p1,
            direction: p2 - p1,
        }
    }

    /// Returns the point on the line at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Computes the intersection point with another line.
    ///
    /// Returns `None` when the lines are exactly parallel (or either has a
    /// zero direction).
    pub fn intersection(&self, other: &Self) -> Option<Point2<F>> {
        let denom = self.direction.y * other.direction.x - self.direction.x * other.direction.y;
        if denom == F::zero() {
            return None;
        }

        let d = self.origin - other.origin;
        let ua = (self.direction.x * -d.y - self.direction.y * -d.x) / denom;
        let hit = other.point_at(ua);
        if hit.is_finite() {
            Some(hit)
        } else {
            None
        }
    }
}

/// Computes the unit vector perpendicular to the line `p0 -> p1`.
///
/// The vector `(p0.y - p1.y, p1.x - p0.x)` is the direction rotated 90 degrees
/// counter-clockwise, so with y pointing up it lies on the left of travel.
/// Returns `None` when the points coincide.
#[inline]
pub fn orthogonal_unit<F: Float>(p0: Point2<F>, p1: Point2<F>) -> Option<Vec2<F>> {
    (p1 - p0).perpendicular().normalize()
}

/// Intersects the infinite lines through `a-b` and `c-d`.
///
/// Returns `None` if the lines are parallel.
#[inline]
pub fn line_intersection<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    d: Point2<F>,
) -> Option<Point2<F>> {
    Line2::from_points(a, b).intersection(&Line2::from_points(c, d))
}
