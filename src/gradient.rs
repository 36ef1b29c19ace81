//! Gradient strokes: sampling, stroking and coloring a whole path.
//!
//! A gradient stroke replaces one stroked path with a run of small filled
//! polygons, one per sampled segment, each filled with `color(t)` where `t`
//! is the segment's position along the path.
//!
//! # Example
//!
//! ```
//! use strokegradient::gradient::{path_gradient, GradientOptions};
//! use strokegradient::path::Polyline;
//! use strokegradient::Point2;
//!
//! let path = Polyline::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(100.0, 0.0),
//!     Point2::new(100.0, 100.0),
//! ]);
//!
//! let options = GradientOptions::with_width(4.0).resolution(10.0).use_stroke(true);
//! let polygons = path_gradient(&path, |t| (t * 255.0) as u8, &options).unwrap();
//!
//! assert_eq!(polygons.len(), 20);
//! assert_eq!(polygons[0].fill, Some(6));
//! assert_eq!(polygons[0].stroke, polygons[0].fill);
//! ```

use crate::error::{GradientError, Result};
use crate::path::{sample_path, PathGeometry, SampledPoint};
use crate::primitives::constant;
use crate::stroke::{build_segments, emit_polygon, SegmentContext, StrokePolygon};
use num_traits::Float;

/// Options controlling how a gradient stroke is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientOptions<F> {
    /// Arc length between samples. Smaller gives smoother joins at higher cost.
    pub resolution: F,
    /// Total stroke width (not half-width).
    pub width: F,
    /// Add a hairline outline in the fill color to hide seams between polygons.
    pub use_stroke: bool,
    /// Leave polygons unfilled, showing only outlines. Debugging aid.
    pub temp_display: bool,
}

impl<F: Float> Default for GradientOptions<F> {
    fn default() -> Self {
        Self {
            resolution: F::one(),
            width: F::one(),
            use_stroke: false,
            temp_display: false,
        }
    }
}

impl<F: Float> GradientOptions<F> {
    /// Creates options with the given stroke width.
    pub fn with_width(width: F) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Sets the sampling resolution.
    pub fn resolution(mut self, resolution: F) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the stroke width.
    pub fn width(mut self, width: F) -> Self {
        self.width = width;
        self
    }

    /// Enables or disables the seam-hiding hairline.
    pub fn use_stroke(mut self, use_stroke: bool) -> Self {
        self.use_stroke = use_stroke;
        self
    }

    /// Enables or disables outline-only debug display.
    pub fn temp_display(mut self, temp_display: bool) -> Self {
        self.temp_display = temp_display;
        self
    }

    /// Half the stroke width, the offset of each outline edge.
    #[inline]
    pub fn half_width(&self) -> F {
        self.width / (F::one() + F::one())
    }

    /// Longest allowed miter, measured from the path vertex.
    #[inline]
    pub fn miter_limit(&self) -> F {
        self.width
    }

    /// Distance under which two samples are treated as the same point.
    #[inline]
    pub fn closed_epsilon(&self) -> F {
        self.resolution / constant(1000.0)
    }

    /// Checks that width and resolution are positive and finite.
    ///
    /// # Errors
    ///
    /// [`GradientError::InvalidParameter`] naming the first bad option.
    pub fn validate(&self) -> Result<()> {
        check_positive("width", self.width)?;
        check_positive("resolution", self.resolution)
    }
}

fn check_positive<F: Float>(name: &'static str, value: F) -> Result<()> {
    if value > F::zero() && value.is_finite() {
        Ok(())
    } else {
        Err(GradientError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

/// A stroke polygon with its presentation colors.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPolygon<F, C> {
    /// The outline and its position along the path.
    pub polygon: StrokePolygon<F>,
    /// Fill color, `None` under temp display.
    pub fill: Option<C>,
    /// Hairline color, `Some` only when the stroke is enabled.
    pub stroke: Option<C>,
}

/// Consumer of finished gradient polygons.
///
/// Implementations turn the outlines into their own drawing commands and
/// apply fill and hairline styles.
pub trait Renderer<F, C> {
    /// What rendering produces.
    type Output;

    /// Renders the polygons in path order.
    fn render(&mut self, polygons: Vec<GradientPolygon<F, C>>) -> Self::Output;
}

/// Collects polygons as they are rendered.
impl<F, C> Renderer<F, C> for Vec<GradientPolygon<F, C>> {
    type Output = ();

    fn render(&mut self, polygons: Vec<GradientPolygon<F, C>>) {
        self.extend(polygons);
    }
}

/// Returns true if the first and last sample coincide within `eps`.
pub fn is_path_closed<F: Float>(samples: &[SampledPoint<F>], eps: F) -> bool {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) if samples.len() > 2 => first.point.distance(last.point) < eps,
        _ => false,
    }
}

/// Drops samples that coincide with the previously kept one.
///
/// A zero-length segment has no direction, so it is removed before any
/// geometry runs. The neighbouring segments then meet directly.
fn drop_coincident<F: Float>(samples: &[SampledPoint<F>], eps: F) -> Vec<SampledPoint<F>> {
    let mut kept: Vec<SampledPoint<F>> = Vec::with_capacity(samples.len());
    for sample in samples {
        match kept.last() {
            Some(last) if last.point.distance(sample.point) < eps => {}
            _ => kept.push(*sample),
        }
    }

    let dropped = samples.len() - kept.len();
    if dropped > 0 {
        log::debug!("dropped {} coincident samples", dropped);
    }
    kept
}

#[cfg(feature = "parallel")]
fn emit_all<F: Float + Send + Sync>(
    segments: &[SegmentContext<F>],
    r: F,
) -> Result<Vec<StrokePolygon<F>>> {
    use rayon::prelude::*;

    segments.par_iter().map(|s| emit_polygon(s, r)).collect()
}

#[cfg(not(feature = "parallel"))]
fn emit_all<F: Float + Send + Sync>(
    segments: &[SegmentContext<F>],
    r: F,
) -> Result<Vec<StrokePolygon<F>>> {
    segments.iter().map(|s| emit_polygon(s, r)).collect()
}

/// Builds one stroke polygon per segment of an already sampled path.
///
/// Consecutive samples closer than [`GradientOptions::closed_epsilon`] are
/// merged. The path counts as closed when its first and last remaining
/// samples are that close, and the joins then wrap across the seam.
///
/// # Errors
///
/// [`GradientError::InvalidParameter`] for bad options and
/// [`GradientError::DegeneratePath`] if fewer than two distinct samples remain.
pub fn stroke_samples<F: Float + Send + Sync>(
    samples: &[SampledPoint<F>],
    options: &GradientOptions<F>,
) -> Result<Vec<StrokePolygon<F>>> {
    options.validate()?;

    let eps = options.closed_epsilon();
    let points = drop_coincident(samples, eps);
    if points.len() < 2 {
        return Err(GradientError::DegeneratePath);
    }

    let closed = is_path_closed(&points, eps);
    log::debug!(
        "stroking {} samples as {} path",
        points.len(),
        if closed { "closed" } else { "open" }
    );

    let segments = build_segments(&points, closed);
    emit_all(&segments, options.half_width())
}

/// Samples, strokes and colors `path`.
///
/// Every polygon is filled with `color(t)` unless temp display is on, and
/// also outlined in that color when `use_stroke` is set.
///
/// # Errors
///
/// See [`sample_path`] and [`stroke_samples`].
pub fn path_gradient<F, P, C, G>(
    path: &P,
    color: G,
    options: &GradientOptions<F>,
) -> Result<Vec<GradientPolygon<F, C>>>
where
    F: Float + Send + Sync,
    P: PathGeometry<F> + ?Sized,
    C: Clone,
    G: Fn(F) -> C,
{
    options.validate()?;
    let samples = sample_path(path, options.resolution)?;
    let polygons = stroke_samples(&samples, options)?;

    Ok(polygons
        .into_iter()
        .map(|polygon| {
            let shade = color(polygon.t);
            let stroke = options.use_stroke.then(|| shade.clone());
            let fill = (!options.temp_display).then_some(shade);
            GradientPolygon {
                polygon,
                fill,
                stroke,
            }
        })
        .collect())
}

/// Builds the gradient polygons for `path` and hands them to `renderer`.
///
/// # Errors
///
/// Geometry errors are returned before the renderer is called.
pub fn render_path_gradient<F, P, C, G, R>(
    path: &P,
    color: G,
    options: &GradientOptions<F>,
    renderer: &mut R,
) -> Result<R::Output>
where
    F: Float + Send + Sync,
    P: PathGeometry<F> + ?Sized,
    C: Clone,
    G: Fn(F) -> C,
    R: Renderer<F, C> + ?Sized,
{
    let polygons = path_gradient(path, color, options)?;
    Ok(renderer.render(polygons))
}
