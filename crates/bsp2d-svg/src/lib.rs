//! SVG serialization and scene utilities for bsp2d traversal output.
//!
//! The tree hands serializers a flat, ordered segment sequence; everything
//! here works on that sequence and never touches partitioning logic.

use std::fmt::{self, Write as _};

use bsp2d::Segment;
use thiserror::Error;

/// The region of the plane mapped into the SVG document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Creates a view-box from its corner and extent.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Returns the bounding box of `segments`, expanded by `margin` on
    /// every side. An empty scene yields a unit box around the origin.
    pub fn fit(segments: &[Segment], margin: f64) -> Self {
        let mut points = segments.iter().flat_map(|s| [s.a(), s.b()]);
        let Some(first) = points.next() else {
            return Self::new(-margin, -margin, 1.0 + 2.0 * margin, 1.0 + 2.0 * margin);
        };

        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Self::new(
            min_x - margin,
            min_y - margin,
            (max_x - min_x) + 2.0 * margin,
            (max_y - min_y) + 2.0 * margin,
        )
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// Stroke styling applied to every segment path.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Stroke color of every path.
    pub stroke: String,
    /// Stroke width, in scene units.
    pub stroke_width: f64,
    /// Optional background fill; `None` leaves the document transparent.
    pub background: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "black".to_owned(),
            stroke_width: 0.1,
            background: None,
        }
    }
}

/// Renders a single segment as an SVG path command.
pub fn segment_path(segment: &Segment) -> String {
    format!(
        "M {} {} L {} {}",
        segment.a().x,
        segment.a().y,
        segment.b().x,
        segment.b().y
    )
}

/// Renders an ordered segment sequence as a complete SVG document.
///
/// Each segment becomes one `<path>` element, in sequence order, so a
/// back-to-front traversal paints correctly under the painter's algorithm.
pub fn render_document(segments: &[Segment], view_box: &ViewBox, style: &SvgStyle) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{view_box}">"#
    );
    if let Some(background) = &style.background {
        let _ = writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{background}"/>"#,
            view_box.min_x, view_box.min_y, view_box.width, view_box.height
        );
    }
    for segment in segments {
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            segment_path(segment),
            style.stroke,
            style.stroke_width
        );
    }
    out.push_str("</svg>\n");
    out
}

/// Formats segments for debugging, one per line in traversal order.
pub fn dump_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        let _ = writeln!(out, "{segment}");
    }
    out
}

/// Parse error for the plain-text segment format.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A line did not contain exactly four whitespace-separated fields.
    #[error("line {line}: expected 4 coordinates, found {found}")]
    WrongFieldCount { line: usize, found: usize },
    /// A field was not a valid floating-point number.
    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidCoordinate { line: usize, value: String },
}

/// Parses segments from text, one `x1 y1 x2 y2` per line.
///
/// Blank lines and lines starting with `#` are ignored. Line numbers in
/// errors are 1-based.
pub fn parse_segments(input: &str) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(ParseError::WrongFieldCount {
                line,
                found: fields.len(),
            });
        }

        let mut coords = [0.0; 4];
        for (slot, field) in coords.iter_mut().zip(&fields) {
            *slot = field
                .parse()
                .map_err(|_| ParseError::InvalidCoordinate {
                    line,
                    value: (*field).to_owned(),
                })?;
        }
        segments.push(Segment::from_coords(
            coords[0], coords[1], coords[2], coords[3],
        ));
    }

    Ok(segments)
}

/// A built-in scene: an axis-aligned frame with a small triangle inside.
///
/// Handy for trying the CLI without an input file, and shaped so the
/// default selector partitions along the bottom edge first.
pub fn demo_scene() -> Vec<Segment> {
    vec![
        Segment::from_coords(0.0, 0.0, 10.0, 0.0),
        Segment::from_coords(1.0, 0.0, 1.0, 9.0),
        Segment::from_coords(9.0, 0.0, 9.0, 9.0),
        Segment::from_coords(1.0, 8.0, 9.0, 8.0),
        Segment::from_coords(2.0, 2.0, 3.0, 3.0),
        Segment::from_coords(2.0, 2.0, 2.0, 3.0),
        Segment::from_coords(2.0, 3.0, 3.0, 3.0),
    ]
}
