//! SVG path data in and out.
//!
//! Parses the `d` attribute of an SVG path into commands, flattens those into
//! [`Polyline`]s that the sampler can walk, and writes gradient polygons back
//! out as `<path>` elements.
//!
//! # Supported Commands
//!
//! - `M`/`m` - Move to (absolute/relative)
//! - `L`/`l` - Line to
//! - `H`/`h` - Horizontal line to
//! - `V`/`v` - Vertical line to
//! - `C`/`c` - Cubic Bézier curve
//! - `S`/`s` - Smooth cubic Bézier
//! - `Q`/`q` - Quadratic Bézier curve
//! - `T`/`t` - Smooth quadratic Bézier
//! - `Z`/`z` - Close path
//!
//! Elliptical arcs (`A`/`a`) are rejected with
//! [`SvgParseError::UnsupportedCommand`].
//!
//! # Example
//!
//! ```
//! use strokegradient::gradient::GradientOptions;
//! use strokegradient::io::{path_gradient_svg, SvgRenderer};
//!
//! let options = GradientOptions::with_width(2.0).resolution(5.0).use_stroke(true);
//! let mut renderer = SvgRenderer::new(0.5);
//!
//! let elements = path_gradient_svg(
//!     "M 0 0 L 10 0 L 10 10",
//!     0.1,
//!     |t: f64| format!("hsl({:.0}, 80%, 50%)", t * 360.0),
//!     &options,
//!     &mut renderer,
//! )
//! .unwrap();
//!
//! assert_eq!(elements.len(), 4);
//! assert!(elements[0].starts_with("<path d=\"M "));
//! ```

use crate::error::Result;
use crate::gradient::{render_path_gradient, GradientOptions, GradientPolygon, Renderer};
use crate::path::{PathGeometry, Polyline};
use crate::primitives::{constant, Point2};
use num_traits::Float;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on the number of line segments a single curve flattens to.
const MAX_CURVE_SEGMENTS: usize = 1024;

/// Error type for SVG path parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SvgParseError {
    /// Unexpected character encountered.
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    /// Expected a number but found something else.
    #[error("expected number at position {0}")]
    ExpectedNumber(usize),
    /// Invalid number format.
    #[error("invalid number '{0}' at position {1}")]
    InvalidNumber(String, usize),
    /// Unexpected end of input.
    #[error("unexpected end of path data")]
    UnexpectedEnd,
    /// Unknown command character.
    #[error("unknown command '{0}' at position {1}")]
    UnknownCommand(char, usize),
    /// A valid SVG command this crate does not flatten.
    #[error("unsupported command '{0}' at position {1}")]
    UnsupportedCommand(char, usize),
}

/// Drawing operation of one SVG path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SvgOp<F> {
    /// Start a new subpath.
    MoveTo(Point2<F>),
    /// Straight line.
    LineTo(Point2<F>),
    /// Horizontal line to an x coordinate.
    HorizontalTo(F),
    /// Vertical line to a y coordinate.
    VerticalTo(F),
    /// Cubic Bézier: two control points and the end point.
    CubicTo(Point2<F>, Point2<F>, Point2<F>),
    /// Cubic Bézier whose first control point mirrors the previous one.
    SmoothCubicTo(Point2<F>, Point2<F>),
    /// Quadratic Bézier: control point and end point.
    QuadraticTo(Point2<F>, Point2<F>),
    /// Quadratic Bézier whose control point mirrors the previous one.
    SmoothQuadraticTo(Point2<F>),
    /// Close the current subpath.
    ClosePath,
}

/// An SVG path command: an operation and whether its coordinates are relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgCommand<F> {
    /// The operation.
    pub op: SvgOp<F>,
    /// True for lowercase commands, whose coordinates are relative to the
    /// current point.
    pub relative: bool,
}

/// A parsed SVG path consisting of multiple commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgPath<F> {
    /// The list of path commands.
    pub commands: Vec<SvgCommand<F>>,
}

impl<F: Float> SvgPath<F> {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Returns true if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Parses SVG path data into a list of commands.
///
/// Repeated coordinate groups after a command letter repeat the command;
/// extra pairs after a move-to are line-tos.
///
/// # Example
///
/// ```
/// use strokegradient::io::parse_svg_path;
///
/// let path = parse_svg_path::<f64>("M 0 0 L 10 0 L 10 10 Z").unwrap();
/// assert_eq!(path.len(), 4);
/// ```
pub fn parse_svg_path<F: Float + FromStr>(d: &str) -> std::result::Result<SvgPath<F>, SvgParseError> {
    PathDataParser::new(d).parse()
}

/// Flattens a parsed SVG path into one [`Polyline`] per subpath.
///
/// Curves are split into straight pieces using Wang's formula so that no
/// piece strays more than `tolerance` from the curve. A closed subpath ends
/// on its first point. Subpaths with fewer than two points are dropped.
///
/// # Example
///
/// ```
/// use strokegradient::io::{parse_svg_path, svg_path_to_polylines};
///
/// let path = parse_svg_path::<f64>("M 0 0 L 10 0 L 10 10 Z").unwrap();
/// let polylines = svg_path_to_polylines(&path, 0.1);
/// assert_eq!(polylines.len(), 1);
/// assert_eq!(polylines[0].len(), 4); // 3 points + closing point
/// ```
pub fn svg_path_to_polylines<F: Float>(path: &SvgPath<F>, tolerance: F) -> Vec<Polyline<F>> {
    let mut flattener = Flattener::new(tolerance);
    for command in &path.commands {
        flattener.apply(command);
    }
    flattener.finish()
}

/// Writes a closed outline as SVG path data: move-to, line-tos, close.
///
/// # Example
///
/// ```
/// use strokegradient::{Point2, io::polygon_to_svg_path};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// assert_eq!(polygon_to_svg_path(&points), "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn polygon_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", first.x, first.y);
    for p in rest {
        d.push_str(&format!(" L {} {}", p.x, p.y));
    }
    d.push_str(" Z");
    d
}

/// Renders gradient polygons as SVG `<path>` elements.
///
/// The hairline width is in screen pixels: the seam-hiding outline is drawn
/// with `vector-effect: non-scaling-stroke` so it stays thin under zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgRenderer<F> {
    /// Width of the seam-hiding outline, in pixels.
    pub hairline_width: F,
}

impl<F: Float + fmt::Display> SvgRenderer<F> {
    /// Creates a renderer with the given hairline width.
    pub fn new(hairline_width: F) -> Self {
        Self { hairline_width }
    }

    /// Formats a single polygon as a `<path>` element.
    pub fn element<C: fmt::Display>(&self, polygon: &GradientPolygon<F, C>) -> String {
        let mut style = match &polygon.fill {
            Some(fill) => format!("fill:{}", fill),
            None => "fill:none".to_string(),
        };
        if let Some(stroke) = &polygon.stroke {
            style.push_str(&format!(
                ";stroke:{};stroke-width:{}px;vector-effect:non-scaling-stroke",
                stroke, self.hairline_width
            ));
        }

        format!(
            "<path d=\"{}\" style=\"{}\"/>",
            polygon_to_svg_path(polygon.polygon.vertices()),
            style
        )
    }
}

impl<F: Float + fmt::Display> Default for SvgRenderer<F> {
    fn default() -> Self {
        Self::new(F::one())
    }
}

impl<F: Float + fmt::Display, C: fmt::Display> Renderer<F, C> for SvgRenderer<F> {
    type Output = Vec<String>;

    fn render(&mut self, polygons: Vec<GradientPolygon<F, C>>) -> Vec<String> {
        polygons.iter().map(|p| self.element(p)).collect()
    }
}

/// Builds gradient `<path>` elements for every subpath of SVG path data.
///
/// Curves are flattened with `tolerance` before sampling. Subpaths without
/// length are skipped.
///
/// # Errors
///
/// Parse errors, invalid options, or geometry errors from any subpath.
pub fn path_gradient_svg<F, C, G>(
    d: &str,
    tolerance: F,
    color: G,
    options: &GradientOptions<F>,
    renderer: &mut SvgRenderer<F>,
) -> Result<Vec<String>>
where
    F: Float + FromStr + fmt::Display + Send + Sync,
    C: Clone + fmt::Display,
    G: Fn(F) -> C,
{
    options.validate()?;
    let path = parse_svg_path(d)?;

    let mut elements = Vec::new();
    for polyline in svg_path_to_polylines(&path, tolerance) {
        if polyline.total_length() <= F::zero() {
            log::debug!("skipping zero-length subpath");
            continue;
        }
        elements.extend(render_path_gradient(&polyline, &color, options, renderer)?);
    }

    Ok(elements)
}

// ============================================================================
// Flattening
// ============================================================================

/// Walks commands, tracking the pen, and collects flattened subpaths.
struct Flattener<F> {
    tolerance: F,
    pen: Point2<F>,
    subpath_start: Point2<F>,
    current: Vec<Point2<F>>,
    finished: Vec<Polyline<F>>,
    // Control point to mirror for the next smooth curve, and whether it came
    // from a cubic (true) or a quadratic (false).
    last_control: Option<(Point2<F>, bool)>,
}

impl<F: Float> Flattener<F> {
    fn new(tolerance: F) -> Self {
        Self {
            tolerance,
            pen: Point2::origin(),
            subpath_start: Point2::origin(),
            current: Vec::new(),
            finished: Vec::new(),
            last_control: None,
        }
    }

    fn resolve(&self, p: Point2<F>, relative: bool) -> Point2<F> {
        if relative {
            self.pen + p.to_vec()
        } else {
            p
        }
    }

    fn mirrored_control(&self, cubic: bool) -> Point2<F> {
        match self.last_control {
            Some((control, was_cubic)) if was_cubic == cubic => self.pen + (self.pen - control),
            _ => self.pen,
        }
    }

    fn end_subpath(&mut self) {
        let points = std::mem::take(&mut self.current);
        if points.len() >= 2 {
            self.finished.push(Polyline::new(points));
        }
    }

    fn push(&mut self, p: Point2<F>) {
        if self.current.is_empty() {
            self.current.push(self.pen);
        }
        self.current.push(p);
        self.pen = p;
    }

    fn apply(&mut self, command: &SvgCommand<F>) {
        let rel = command.relative;
        let mut control = None;

        match command.op {
            SvgOp::MoveTo(p) => {
                self.end_subpath();
                self.pen = self.resolve(p, rel);
                self.subpath_start = self.pen;
            }
            SvgOp::LineTo(p) => {
                let p = self.resolve(p, rel);
                self.push(p);
            }
            SvgOp::HorizontalTo(x) => {
                let x = if rel { self.pen.x + x } else { x };
                self.push(Point2::new(x, self.pen.y));
            }
            SvgOp::VerticalTo(y) => {
                let y = if rel { self.pen.y + y } else { y };
                self.push(Point2::new(self.pen.x, y));
            }
            SvgOp::CubicTo(c1, c2, end) => {
                let (c1, c2, end) = (self.resolve(c1, rel), self.resolve(c2, rel), self.resolve(end, rel));
                self.cubic(c1, c2, end);
                control = Some((c2, true));
            }
            SvgOp::SmoothCubicTo(c2, end) => {
                let c1 = self.mirrored_control(true);
                let (c2, end) = (self.resolve(c2, rel), self.resolve(end, rel));
                self.cubic(c1, c2, end);
                control = Some((c2, true));
            }
            SvgOp::QuadraticTo(c, end) => {
                let (c, end) = (self.resolve(c, rel), self.resolve(end, rel));
                self.quadratic(c, end);
                control = Some((c, false));
            }
            SvgOp::SmoothQuadraticTo(end) => {
                let c = self.mirrored_control(false);
                let end = self.resolve(end, rel);
                self.quadratic(c, end);
                control = Some((c, false));
            }
            SvgOp::ClosePath => {
                if !self.current.is_empty() && self.pen != self.subpath_start {
                    self.current.push(self.subpath_start);
                }
                self.end_subpath();
                self.pen = self.subpath_start;
            }
        }

        self.last_control = control;
    }

    fn cubic(&mut self, c1: Point2<F>, c2: Point2<F>, end: Point2<F>) {
        let start = self.pen;
        let dd = (start.to_vec() - c1.to_vec() * constant(2.0) + c2.to_vec())
            .magnitude()
            .max((c1.to_vec() - c2.to_vec() * constant(2.0) + end.to_vec()).magnitude());
        let n = self.segment_count(dd * constant(0.75));

        for i in 1..=n {
            let t = constant::<F>(i as f64) / constant(n as f64);
            let mt = F::one() - t;
            let a = mt * mt * mt;
            let b = constant::<F>(3.0) * mt * mt * t;
            let c = constant::<F>(3.0) * mt * t * t;
            let e = t * t * t;
            let p = if i == n {
                end
            } else {
                Point2::new(
                    a * start.x + b * c1.x + c * c2.x + e * end.x,
                    a * start.y + b * c1.y + c * c2.y + e * end.y,
                )
            };
            self.push(p);
        }
    }

    fn quadratic(&mut self, c: Point2<F>, end: Point2<F>) {
        let start = self.pen;
        let dd = (start.to_vec() - c.to_vec() * constant(2.0) + end.to_vec()).magnitude();
        let n = self.segment_count(dd * constant(0.25));

        for i in 1..=n {
            let t = constant::<F>(i as f64) / constant(n as f64);
            let mt = F::one() - t;
            let p = if i == n {
                end
            } else {
                Point2::new(
                    mt * mt * start.x + constant::<F>(2.0) * mt * t * c.x + t * t * end.x,
                    mt * mt * start.y + constant::<F>(2.0) * mt * t * c.y + t * t * end.y,
                )
            };
            self.push(p);
        }
    }

    /// Wang's formula: `ceil(sqrt(k * |second difference| / tolerance))`.
    fn segment_count(&self, weighted: F) -> usize {
        if !(self.tolerance > F::zero()) {
            return MAX_CURVE_SEGMENTS;
        }
        (weighted / self.tolerance)
            .sqrt()
            .ceil()
            .to_usize()
            .unwrap_or(MAX_CURVE_SEGMENTS)
            .clamp(1, MAX_CURVE_SEGMENTS)
    }

    fn finish(mut self) -> Vec<Polyline<F>> {
        self.end_subpath();
        self.finished
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Cursor over path data.
struct PathDataParser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> PathDataParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn parse<F: Float + FromStr>(&mut self) -> std::result::Result<SvgPath<F>, SvgParseError> {
        let mut path = SvgPath::new();

        loop {
            self.skip_separators();
            let Some(c) = self.peek_char() else {
                break;
            };
            if !c.is_ascii_alphabetic() {
                return Err(SvgParseError::UnexpectedChar(c, self.pos));
            }
            let at = self.pos;
            self.pos += c.len_utf8();
            self.parse_command(c, at, &mut path.commands)?;
        }

        Ok(path)
    }

    fn parse_command<F: Float + FromStr>(
        &mut self,
        letter: char,
        at: usize,
        out: &mut Vec<SvgCommand<F>>,
    ) -> std::result::Result<(), SvgParseError> {
        let relative = letter.is_ascii_lowercase();
        let mut upper = letter.to_ascii_uppercase();

        match upper {
            'Z' => {
                out.push(SvgCommand {
                    op: SvgOp::ClosePath,
                    relative,
                });
                return Ok(());
            }
            'A' => return Err(SvgParseError::UnsupportedCommand(letter, at)),
            'M' | 'L' | 'H' | 'V' | 'C' | 'S' | 'Q' | 'T' => {}
            _ => return Err(SvgParseError::UnknownCommand(letter, at)),
        }

        loop {
            let op = match upper {
                'M' => SvgOp::MoveTo(self.parse_point()?),
                'L' => SvgOp::LineTo(self.parse_point()?),
                'H' => SvgOp::HorizontalTo(self.parse_number()?),
                'V' => SvgOp::VerticalTo(self.parse_number()?),
                'C' => SvgOp::CubicTo(self.parse_point()?, self.parse_point()?, self.parse_point()?),
                'S' => SvgOp::SmoothCubicTo(self.parse_point()?, self.parse_point()?),
                'Q' => SvgOp::QuadraticTo(self.parse_point()?, self.parse_point()?),
                _ => SvgOp::SmoothQuadraticTo(self.parse_point()?),
            };
            out.push(SvgCommand { op, relative });

            if !self.has_number() {
                return Ok(());
            }
            // Coordinates following a move-to are implicit line-tos.
            if upper == 'M' {
                upper = 'L';
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn has_number(&mut self) -> bool {
        self.skip_separators();
        matches!(self.bytes.get(self.pos), Some(&b) if b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.'))
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn parse_number<F: Float + FromStr>(&mut self) -> std::result::Result<F, SvgParseError> {
        self.skip_separators();
        let start = self.pos;

        if matches!(self.bytes.get(self.pos), Some(b'-' | b'+')) {
            self.pos += 1;
        }
        let mut digits = self.eat_digits();
        if self.bytes.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            digits += self.eat_digits();
        }
        if digits == 0 {
            self.pos = start;
            return match self.peek_char() {
                Some(_) => Err(SvgParseError::ExpectedNumber(start)),
                None => Err(SvgParseError::UnexpectedEnd),
            };
        }

        if matches!(self.bytes.get(self.pos), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(b'-' | b'+')) {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                self.pos = mark;
            }
        }

        let text = &self.input[start..self.pos];
        text.parse()
            .map_err(|_| SvgParseError::InvalidNumber(text.to_string(), start))
    }

    fn parse_point<F: Float + FromStr>(&mut self) -> std::result::Result<Point2<F>, SvgParseError> {
        let x = self.parse_number()?;
        let y = self.parse_number()?;
        Ok(Point2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{path_gradient, GradientOptions};
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_moveto_lineto() {
        let path = parse_svg_path::<f64>("M 0 0 L 10 0 L 10 10").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.commands[1].op, SvgOp::LineTo(Point2::new(10.0, 0.0)));
        assert!(!path.commands[1].relative);
    }

    #[test]
    fn test_parse_compact_syntax() {
        let path = parse_svg_path::<f64>("M0,0L10-5.5.5.5e1z").unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.commands[1].op, SvgOp::LineTo(Point2::new(10.0, -5.5)));
        assert_eq!(path.commands[2].op, SvgOp::LineTo(Point2::new(0.5, 5.0)));
        assert_eq!(path.commands[3].op, SvgOp::ClosePath);
    }

    #[test]
    fn test_parse_implicit_lineto_after_moveto() {
        let path = parse_svg_path::<f64>("m 1 1 2 0 0 2").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.commands[0].op, SvgOp::MoveTo(Point2::new(1.0, 1.0)));
        assert_eq!(path.commands[1].op, SvgOp::LineTo(Point2::new(2.0, 0.0)));
        assert!(path.commands[2].relative);
    }

    #[test]
    fn test_parse_curves() {
        let path = parse_svg_path::<f64>("M 0 0 C 1 2 3 2 4 0 S 7 -2 8 0 Q 9 1 10 0 T 12 0").unwrap();
        assert_eq!(path.len(), 5);
        assert!(matches!(path.commands[1].op, SvgOp::CubicTo(..)));
        assert!(matches!(path.commands[2].op, SvgOp::SmoothCubicTo(..)));
        assert!(matches!(path.commands[3].op, SvgOp::QuadraticTo(..)));
        assert!(matches!(path.commands[4].op, SvgOp::SmoothQuadraticTo(..)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_svg_path::<f64>("10 10"),
            Err(SvgParseError::UnexpectedChar('1', 0))
        );
        assert_eq!(
            parse_svg_path::<f64>("M 0 0 X 1 1"),
            Err(SvgParseError::UnknownCommand('X', 6))
        );
        assert_eq!(
            parse_svg_path::<f64>("M 0 0 A 5 5 0 0 1 10 0"),
            Err(SvgParseError::UnsupportedCommand('A', 6))
        );
        assert_eq!(parse_svg_path::<f64>("M 0"), Err(SvgParseError::UnexpectedEnd));
        assert_eq!(
            parse_svg_path::<f64>("L 1 x"),
            Err(SvgParseError::ExpectedNumber(4))
        );
    }

    #[test]
    fn test_flatten_lines_and_close() {
        let path = parse_svg_path::<f64>("M 0 0 H 10 V 10 h -10 Z").unwrap();
        let polylines = svg_path_to_polylines(&path, 0.1);

        assert_eq!(polylines.len(), 1);
        assert_eq!(
            polylines[0].points(),
            &[
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
                Point2::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_flatten_multiple_subpaths() {
        let path = parse_svg_path::<f64>("M 0 0 L 1 0 M 5 5 l 0 3 M 9 9").unwrap();
        let polylines = svg_path_to_polylines(&path, 0.1);

        assert_eq!(polylines.len(), 2);
        assert_eq!(polylines[1].points()[1], Point2::new(5.0, 8.0));
    }

    #[test]
    fn test_flatten_cubic_stays_on_curve() {
        let path = parse_svg_path::<f64>("M 0 0 C 0 10 10 10 10 0").unwrap();
        let polylines = svg_path_to_polylines(&path, 0.01);
        let points = polylines[0].points();

        assert!(points.len() > 10);
        assert_eq!(points[0], Point2::new(0.0, 0.0));
        assert_eq!(*points.last().unwrap(), Point2::new(10.0, 0.0));
        // Peak of this symmetric cubic is 7.5 at t = 0.5.
        let peak = points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert_relative_eq!(peak, 7.5, epsilon = 0.05);
    }

    #[test]
    fn test_flatten_smooth_cubic_mirrors_control() {
        let explicit = parse_svg_path::<f64>("M 0 0 C 0 5 5 5 5 0 C 5 -5 10 -5 10 0").unwrap();
        let smooth = parse_svg_path::<f64>("M 0 0 C 0 5 5 5 5 0 S 10 -5 10 0").unwrap();
        assert_eq!(
            svg_path_to_polylines(&explicit, 0.05),
            svg_path_to_polylines(&smooth, 0.05)
        );
    }

    #[test]
    fn test_flatten_quadratic() {
        let path = parse_svg_path::<f64>("M 0 0 q 5 10 10 0 t 10 0").unwrap();
        let polylines = svg_path_to_polylines(&path, 0.05);
        let points = polylines[0].points();

        assert_eq!(*points.last().unwrap(), Point2::new(20.0, 0.0));
        // The smooth continuation mirrors the control point below the axis.
        let lowest = points.iter().map(|p| p.y).fold(f64::MAX, f64::min);
        assert_relative_eq!(lowest, -5.0, epsilon = 0.1);
    }

    #[test]
    fn test_polygon_to_svg_path_empty() {
        assert_eq!(polygon_to_svg_path::<f64>(&[]), "");
    }

    #[test]
    fn test_renderer_styles() {
        let line = Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]);
        let options = GradientOptions::with_width(10.0).resolution(50.0);
        let mut renderer = SvgRenderer::new(0.5);

        let polygons = path_gradient(&line, |t: f64| format!("#{:02x}0000", (t * 255.0) as u8), &options).unwrap();
        let elements = renderer.render(polygons);
        assert_eq!(
            elements[0],
            "<path d=\"M 0 5 L 50 5 L 50 -5 L 0 -5 Z\" style=\"fill:#3f0000\"/>"
        );

        let stroked = options.use_stroke(true).temp_display(true);
        let polygons = path_gradient(&line, |_| "red", &stroked).unwrap();
        let elements = renderer.render(polygons);
        assert_eq!(
            elements[1],
            "<path d=\"M 50 5 L 100 5 L 100 -5 L 50 -5 Z\" \
             style=\"fill:none;stroke:red;stroke-width:0.5px;vector-effect:non-scaling-stroke\"/>"
        );
    }

    #[test]
    fn test_path_gradient_svg_closed_curve() {
        let options = GradientOptions::with_width(1.0).resolution(1.0);
        let mut renderer = SvgRenderer::default();
        let elements = path_gradient_svg(
            "M 0 0 Q 10 10 20 0 Z M 30 30",
            0.05,
            |t: f64| t,
            &options,
            &mut renderer,
        )
        .unwrap();

        assert!(!elements.is_empty());
        assert!(elements.iter().all(|e| e.contains(" Z\"")));
    }

    #[test]
    fn test_path_gradient_svg_parse_error() {
        let options = GradientOptions::with_width(1.0);
        let mut renderer = SvgRenderer::default();
        let result = path_gradient_svg("M 0 0 A 1 1 0 0 1 2 2", 0.1, |t: f64| t, &options, &mut renderer);
        assert!(matches!(
            result,
            Err(crate::GradientError::Svg(SvgParseError::UnsupportedCommand('A', 6)))
        ));
    }
}
