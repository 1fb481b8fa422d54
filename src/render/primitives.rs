//! Primitive rasterization.
//!
//! Implements line rasterization for surface primitives.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Segment;
use crate::primitive::DrawnPrimitive;
use crate::render::clip::{clip_segment, ClipRect};
use crate::style::Stroke;

/// Trait for primitives that can paint themselves into a framebuffer.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer);

    /// Draw this primitive with anti-aliasing if supported.
    fn draw_aa(&self, fb: &mut Framebuffer) {
        self.draw(fb);
    }
}

impl Drawable for DrawnPrimitive {
    fn draw(&self, fb: &mut Framebuffer) {
        draw_stroke(fb, self.segment, self.stroke, false);
    }

    fn draw_aa(&self, fb: &mut Framebuffer) {
        draw_stroke(fb, self.segment, self.stroke, true);
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color, alpha-blended onto the framebuffer
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.blend_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Two pixels are painted at each step along the major axis, their
/// intensities split by the fractional distance to the ideal line.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    // Swapped back to (x, y) when the line is steep
    let mut paint = |major: i32, minor: i32, intensity: f32| {
        if steep {
            plot(fb, minor, major, color, intensity);
        } else {
            plot(fb, major, minor, color, intensity);
        }
    };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;
    paint(xpxl1, ypxl1, rfpart(yend) * xgap);
    paint(xpxl1, ypxl1 + 1, fpart(yend) * xgap);

    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;
    paint(xpxl2, ypxl2, rfpart(yend) * xgap);
    paint(xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    for x in (xpxl1 + 1)..xpxl2 {
        let ipart = intery.floor() as i32;
        paint(x, ipart, rfpart(intery));
        paint(x, ipart + 1, fpart(intery));
        intery += gradient;
    }
}

/// Plot a pixel with intensity (for anti-aliased drawing).
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 && intensity > 0.0 {
        fb.blend_pixel(x as u32, y as u32, color.fade(intensity));
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

// ============================================================================
// Strokes
// ============================================================================

/// Draw a segment with a stroke width.
///
/// The segment is clipped to the framebuffer first, so lines that extend far
/// beyond the viewport cost no more than lines inside it. Widths below one
/// pixel fade the color; wider strokes are drawn as parallel one-pixel passes
/// centered on the segment.
pub fn draw_stroke(fb: &mut Framebuffer, segment: Segment, stroke: Stroke, antialias: bool) {
    let bounds = ClipRect::around(f64::from(fb.width()), f64::from(fb.height()), 1.0);
    let Some(visible) = clip_segment(segment, bounds) else {
        return;
    };

    let passes = stroke.width.ceil().max(1.0) as u32;
    let color = if stroke.width < 1.0 {
        stroke.color.fade(stroke.width)
    } else {
        stroke.color
    };

    let dx = visible.end.x - visible.start.x;
    let dy = visible.end.y - visible.start.y;
    let length = dx.hypot(dy);
    let (nx, ny) = if length > f64::EPSILON {
        (-dy / length, dx / length)
    } else {
        (0.0, 0.0)
    };

    for pass in 0..passes {
        let offset = f64::from(pass) - f64::from(passes - 1) / 2.0;
        let (ox, oy) = (nx * offset, ny * offset);
        let x0 = visible.start.x + ox;
        let y0 = visible.start.y + oy;
        let x1 = visible.end.x + ox;
        let y1 = visible.end.y + oy;

        if antialias {
            draw_line_aa(fb, x0 as f32, y0 as f32, x1 as f32, y1 as f32, color);
        } else {
            draw_line(
                fb,
                x0.round() as i32,
                y0.round() as i32,
                x1.round() as i32,
                y1.round() as i32,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Theme;

    fn white(width: u32, height: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(width, height).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut fb = white(100, 100);

        draw_line(&mut fb, 10, 50, 90, 50, Rgba::BLACK);

        assert_eq!(fb.get_pixel(10, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 51), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut fb = white(100, 100);

        draw_line(&mut fb, 10, 10, 90, 90, Rgba::BLACK);

        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 90), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_aa_on_pixel_row() {
        let mut fb = white(100, 100);

        draw_line_aa(&mut fb, 10.0, 50.0, 90.0, 50.0, Rgba::BLACK);

        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 51), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_line_aa_steep() {
        let mut fb = white(100, 100);

        draw_line_aa(&mut fb, 50.0, 5.0, 50.0, 95.0, Rgba::BLACK);

        assert_eq!(fb.get_pixel(50, 40), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(40, 40), Some(Rgba::WHITE));
    }

    #[test]
    fn test_line_out_of_bounds() {
        let mut fb = white(10, 10);
        draw_line(&mut fb, -5, -5, 20, 20, Rgba::BLACK);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn test_thin_stroke_is_faded() {
        let mut fb = white(20, 20);
        let stroke = Stroke::new(Rgba::BLACK, 0.5);
        draw_stroke(&mut fb, Segment::from_coords(0.0, 10.0, 20.0, 10.0), stroke, false);

        let pixel = fb.get_pixel(10, 10).unwrap();
        assert!(pixel.r > 100 && pixel.r < 150, "half-width stroke should be gray, got {pixel:?}");
    }

    #[test]
    fn test_wide_stroke_covers_neighbors() {
        let mut fb = white(20, 20);
        let stroke = Stroke::new(Rgba::BLACK, 3.0);
        draw_stroke(&mut fb, Segment::from_coords(0.0, 10.0, 20.0, 10.0), stroke, false);

        for y in 9..=11 {
            assert_eq!(fb.get_pixel(10, y), Some(Rgba::BLACK));
        }
        assert_eq!(fb.get_pixel(10, 13), Some(Rgba::WHITE));
    }

    #[test]
    fn test_steep_stroke_is_clipped() {
        let mut fb = white(40, 40);
        // Slope 1e6 line: endpoints millions of pixels off-screen
        let segment = Segment::from_coords(0.0, 2.0e7, 40.0, -2.0e7);
        draw_stroke(&mut fb, segment, Theme::default().user_line, true);
        assert!(fb.count_pixels(Rgba::WHITE) < 40 * 40);
    }

    #[test]
    fn test_stroke_skips_non_finite() {
        let mut fb = white(10, 10);
        let segment = Segment::from_coords(0.0, f64::INFINITY, 10.0, 0.0);
        draw_stroke(&mut fb, segment, Stroke::new(Rgba::BLACK, 1.0), true);
        assert_eq!(fb.count_pixels(Rgba::WHITE), 100);
    }

    #[test]
    fn test_drawable_primitive() {
        let mut fb = white(40, 40);
        let primitive = DrawnPrimitive::user_line(
            Segment::from_coords(0.0, 20.0, 40.0, 20.0),
            Stroke::new(Rgba::STEEL_BLUE, 1.0),
        );
        primitive.draw(&mut fb);
        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::STEEL_BLUE));
    }
}
