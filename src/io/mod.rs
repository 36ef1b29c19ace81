//! Reading paths from and writing gradient polygons to SVG.

mod svg;

pub use svg::{
    parse_svg_path, path_gradient_svg, polygon_to_svg_path, svg_path_to_polylines, SvgCommand,
    SvgOp, SvgParseError, SvgPath, SvgRenderer,
};
