//! Polygon type shared by the stroke emitter and the renderers.
//!
//! # Example
//!
//! ```
//! use strokegradient::polygon::Polygon;
//! use strokegradient::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert_eq!(square.area(), 4.0);
//! ```

mod core;

pub use self::core::Polygon;
