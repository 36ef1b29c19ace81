//! Closed outline type and the measurements the stroker's tests rely on.

use crate::primitives::Point2;
use num_traits::Float;

/// A closed outline; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// Outline vertices in drawing order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Wraps a vertex list.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Shoelace area over the closing edges. Counter-clockwise is positive.
    pub fn signed_area(&self) -> F {
        if self.vertices.len() < 3 {
            return F::zero();
        }

        let closing = self.vertices.iter().skip(1).chain(self.vertices.first());
        let twice = self
            .vertices
            .iter()
            .zip(closing)
            .fold(F::zero(), |acc, (a, b)| acc + a.to_vec().cross(b.to_vec()));

        twice / (F::one() + F::one())
    }

    /// Unsigned area.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Axis-aligned bounds as `(min, max)`, `None` without vertices.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let (first, rest) = self.vertices.split_first()?;

        Some(rest.iter().fold((*first, *first), |(lo, hi), v| {
            (
                Point2::new(lo.x.min(v.x), lo.y.min(v.y)),
                Point2::new(hi.x.max(v.x), hi.y.max(v.y)),
            )
        }))
    }

    /// Returns true if every vertex has finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|v| v.is_finite())
    }
}
