//! Error types for gradient stroke generation.

use crate::io::SvgParseError;
use thiserror::Error;

/// Errors that can occur while building gradient stroke polygons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    /// A configuration value is out of range.
    #[error("invalid {name}: {value} (must be positive and finite)")]
    InvalidParameter {
        /// Name of the offending option.
        name: &'static str,
        /// The rejected value, widened to `f64`.
        value: f64,
    },

    /// Two consecutive points coincide, so the segment has no direction.
    #[error("degenerate input: consecutive points coincide")]
    DegenerateSegment,

    /// The path has no usable length or fewer than two distinct samples.
    #[error("degenerate path: nothing to stroke")]
    DegeneratePath,

    /// SVG path data could not be parsed.
    #[error(transparent)]
    Svg(#[from] SvgParseError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GradientError>;
