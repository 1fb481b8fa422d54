//! SVG output.
//!
//! Vector output keeps the plot scalable for print and web. Each primitive
//! becomes one `<line>` element, classed by kind so hosts can restyle axes,
//! grid and user lines with CSS.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Segment, Viewport};
use crate::primitive::{DrawnPrimitive, PrimitiveKind};
use crate::render::{clip_segment, ClipRect};
use crate::style::Stroke;
use crate::surface::RenderSink;

/// An SVG `<line>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgLine {
    /// CSS class.
    pub class: &'static str,
    /// Line geometry in viewport pixels.
    pub segment: Segment,
    /// Stroke color and width.
    pub stroke: Stroke,
}

/// SVG encoder for line primitives.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    width: f64,
    height: f64,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    elements: Vec<SvgLine>,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a line in place.
    ///
    /// The segment is clipped to the canvas; lines that miss it entirely or
    /// have non-finite endpoints are dropped.
    pub fn push_line(&mut self, class: &'static str, segment: Segment, stroke: Stroke) {
        let margin = f64::from(stroke.width);
        let bounds = ClipRect::around(self.width, self.height, margin);
        if let Some(segment) = clip_segment(segment, bounds) {
            self.elements.push(SvgLine {
                class,
                segment,
                stroke,
            });
        }
    }

    /// Remove every element, keeping size and background.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Change the canvas size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[SvgLine] {
        &self.elements
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(256 + self.elements.len() * 128);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(&bg)
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", line_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: &Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

fn line_to_svg(line: &SvgLine) -> String {
    let Segment { start, end } = line.segment;
    format!(
        r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        line.class,
        start.x,
        start.y,
        end.x,
        end.y,
        rgba_to_css(&line.stroke.color),
        line.stroke.width
    )
}

const fn class_of(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::AxisLine => "axis",
        PrimitiveKind::GridLine => "grid",
        PrimitiveKind::UserLine => "user-line",
    }
}

/// Render sink that builds an SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgSink {
    encoder: SvgEncoder,
}

impl SvgSink {
    /// Create a sink with the given background.
    #[must_use]
    pub fn new(background: Option<Rgba>) -> Self {
        Self {
            encoder: SvgEncoder::default().background(background),
        }
    }

    /// The document built so far.
    #[must_use]
    pub fn encoder(&self) -> &SvgEncoder {
        &self.encoder
    }

    /// Consume the sink and return the document.
    #[must_use]
    pub fn into_encoder(self) -> SvgEncoder {
        self.encoder
    }
}

impl RenderSink for SvgSink {
    fn clear_all(&mut self) {
        self.encoder.clear();
    }

    fn append(&mut self, primitive: &DrawnPrimitive) {
        self.encoder
            .push_line(class_of(primitive.kind), primitive.segment, primitive.stroke);
    }

    fn viewport_changed(&mut self, viewport: Viewport) {
        let size = viewport.sanitized();
        self.encoder.resize(size.width, size.height);
    }
}
