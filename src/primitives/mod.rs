//! Floating-point geometric primitives and operations.

mod line2;
mod point2;
mod vec2;

pub use line2::{line_intersection, orthogonal_unit, Line2};
pub use point2::Point2;
pub use vec2::Vec2;

use num_traits::Float;

/// Converts an `f64` constant into `F`.
///
/// Every constant used by this crate is representable in both `f32` and `f64`.
#[inline]
pub(crate) fn constant<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}
