//! Path geometry and arc-length sampling.
//!
//! The stroker never looks at a continuous path directly. It works on
//! [`SampledPoint`]s taken at evenly spaced arc lengths from any
//! [`PathGeometry`] implementation.
//!
//! # Example
//!
//! ```
//! use strokegradient::path::{sample_path, Polyline};
//! use strokegradient::Point2;
//!
//! let line = Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]);
//! let samples = sample_path(&line, 50.0).unwrap();
//!
//! let ts: Vec<f64> = samples.iter().map(|s| s.t).collect();
//! assert_eq!(ts, vec![0.0, 0.5, 1.0]);
//! ```

mod polyline;

pub use polyline::Polyline;

use crate::error::{GradientError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// A continuous path that can be queried by arc length.
pub trait PathGeometry<F: Float> {
    /// Total arc length of the path.
    fn total_length(&self) -> F;

    /// Point at arc length `length` from the start, clamped to the path.
    fn point_at_length(&self, length: F) -> Point2<F>;
}

impl<F: Float, P: PathGeometry<F> + ?Sized> PathGeometry<F> for &P {
    fn total_length(&self) -> F {
        (**self).total_length()
    }

    fn point_at_length(&self, length: F) -> Point2<F> {
        (**self).point_at_length(length)
    }
}

/// A point on a path tagged with its normalized arc-length position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint<F> {
    /// Location of the sample.
    pub point: Point2<F>,
    /// Position along the path in `[0, 1]`.
    pub t: F,
}

impl<F: Float> SampledPoint<F> {
    /// Creates a new sample.
    #[inline]
    pub fn new(point: Point2<F>, t: F) -> Self {
        Self { point, t }
    }
}

/// Samples `path` every `resolution` units of arc length.
///
/// Produces `ceil(length / resolution) + 1` evenly spaced samples; the first
/// is at the start of the path and the last exactly at its end.
///
/// # Errors
///
/// [`GradientError::InvalidParameter`] for a non-positive resolution and
/// [`GradientError::DegeneratePath`] for a path with no usable length.
pub fn sample_path<F, P>(path: &P, resolution: F) -> Result<Vec<SampledPoint<F>>>
where
    F: Float,
    P: PathGeometry<F> + ?Sized,
{
    if !(resolution > F::zero() && resolution.is_finite()) {
        return Err(GradientError::InvalidParameter {
            name: "resolution",
            value: resolution.to_f64().unwrap_or(f64::NAN),
        });
    }

    let length = path.total_length();
    if !(length > F::zero() && length.is_finite()) {
        return Err(GradientError::DegeneratePath);
    }

    let intervals = (length / resolution)
        .ceil()
        .to_usize()
        .ok_or(GradientError::DegeneratePath)?
        .max(1);
    let count = F::from(intervals).ok_or(GradientError::DegeneratePath)?;

    let mut samples = Vec::with_capacity(intervals + 1);
    for i in 0..=intervals {
        let t = if i == intervals {
            F::one()
        } else {
            F::from(i).ok_or(GradientError::DegeneratePath)? / count
        };
        let at = if i == intervals { length } else { length * t };
        samples.push(SampledPoint::new(path.point_at_length(at), t));
    }

    log::debug!(
        "sampled path of length {:?} into {} points",
        length.to_f64(),
        samples.len()
    );

    Ok(samples)
}
