//! strokegradient - Gradient strokes along 2D paths
//!
//! Vector formats can fill a shape with a linear or radial gradient, but not
//! color a stroke by how far along the path it is. This crate samples a path
//! at a fixed arc-length resolution, builds one small outline polygon per
//! sampled segment with mitered, beveled or capped joins, and colors each
//! polygon by its position `t` in `[0, 1]`.
//!
//! # Example
//!
//! ```
//! use strokegradient::{path_gradient, GradientOptions, Point2, Polyline};
//!
//! let path = Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]);
//! let options = GradientOptions::with_width(10.0).resolution(50.0);
//!
//! let polygons = path_gradient(&path, |t| t, &options).unwrap();
//! assert_eq!(polygons.len(), 2);
//! assert_eq!(polygons[1].fill, Some(0.75));
//! ```

pub mod error;
pub mod gradient;
pub mod io;
pub mod path;
pub mod polygon;
pub mod primitives;
pub mod stroke;

pub use error::{GradientError, Result};
pub use gradient::{
    path_gradient, render_path_gradient, stroke_samples, GradientOptions, GradientPolygon,
    Renderer,
};
pub use path::{sample_path, PathGeometry, Polyline, SampledPoint};
pub use primitives::{Line2, Point2, Vec2};
pub use stroke::{JoinKind, StrokePolygon};
