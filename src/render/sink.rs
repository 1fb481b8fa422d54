//! Framebuffer-backed render sink.

use tracing::trace;

use crate::color::Rgba;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Viewport;
use crate::primitive::DrawnPrimitive;
use crate::render::primitives::Drawable;
use crate::surface::RenderSink;

/// Render sink that paints primitives into a [`Framebuffer`].
///
/// The framebuffer follows the viewport: a resize reallocates it, rounding
/// fractional sizes and never going below 1×1.
#[derive(Debug, Clone)]
pub struct RasterSink {
    framebuffer: Framebuffer,
    background: Rgba,
    antialias: bool,
}

impl RasterSink {
    /// Create a sink with an initial framebuffer of `width × height`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self> {
        let mut framebuffer = Framebuffer::new(width, height)?;
        framebuffer.clear(background);
        Ok(Self {
            framebuffer,
            background,
            antialias: true,
        })
    }

    /// Create a sink sized and styled from configuration.
    ///
    /// A zero side allocates one pixel; the surface then treats the viewport
    /// as degenerate once it is reported ready.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be allocated.
    pub fn from_config(config: &PlotConfig) -> Result<Self> {
        Ok(Self::new(
            config.viewport.width.max(1),
            config.viewport.height.max(1),
            config.theme.background,
        )?
        .antialias(config.antialias))
    }

    /// Enable or disable anti-aliasing.
    #[must_use]
    pub fn antialias(mut self, enabled: bool) -> Self {
        self.antialias = enabled;
        self
    }

    /// The current pixels.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Consume the sink and return its framebuffer.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }
}

fn pixel_side(side: f64) -> u32 {
    if side.is_finite() && side >= 1.0 {
        side.round().min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

impl RenderSink for RasterSink {
    fn clear_all(&mut self) {
        self.framebuffer.clear(self.background);
    }

    fn append(&mut self, primitive: &DrawnPrimitive) {
        if self.antialias {
            primitive.draw_aa(&mut self.framebuffer);
        } else {
            primitive.draw(&mut self.framebuffer);
        }
    }

    fn viewport_changed(&mut self, viewport: Viewport) {
        let width = pixel_side(viewport.width);
        let height = pixel_side(viewport.height);
        if width == self.framebuffer.width() && height == self.framebuffer.height() {
            return;
        }
        // Both sides are at least 1, so allocation cannot fail
        if let Ok(framebuffer) = Framebuffer::new(width, height) {
            self.framebuffer = framebuffer;
            trace!(width, height, "framebuffer reallocated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineSpec;
    use crate::surface::PlotSurface;

    fn surface() -> PlotSurface<RasterSink> {
        let sink = RasterSink::new(1, 1, Rgba::WHITE).unwrap();
        let mut surface = PlotSurface::new(sink);
        surface.on_viewport_ready(Viewport::new(400.0, 400.0));
        surface
    }

    #[test]
    fn test_ready_resizes_framebuffer() {
        let surface = surface();
        let fb = surface.sink().framebuffer();
        assert_eq!((fb.width(), fb.height()), (400, 400));
    }

    #[test]
    fn test_axes_are_painted() {
        let surface = surface();
        let fb = surface.sink().framebuffer();
        // Horizontal axis at y = 200, vertical axis at x = 200
        assert_ne!(fb.get_pixel(100, 200), Some(Rgba::WHITE));
        assert_ne!(fb.get_pixel(200, 100), Some(Rgba::WHITE));
        // Between grid lines
        assert_eq!(fb.get_pixel(220, 220), Some(Rgba::WHITE));
    }

    #[test]
    fn test_user_line_is_painted() {
        let mut surface = surface();
        surface.add_line(LineSpec::new(0.0, 1.5).unwrap());
        let pixel = surface.sink().framebuffer().get_pixel(100, 140).unwrap();
        assert!(pixel.b > pixel.r, "expected a bluish pixel, got {pixel:?}");
    }

    #[test]
    fn test_clear_repaints_background() {
        let mut surface = surface();
        surface.add_line(LineSpec::new(0.0, 1.5).unwrap());
        surface.clear();
        assert_eq!(surface.sink().framebuffer().get_pixel(100, 140), Some(Rgba::WHITE));
    }

    #[test]
    fn test_degenerate_viewport_keeps_one_pixel() {
        let mut sink = RasterSink::new(10, 10, Rgba::WHITE).unwrap();
        sink.viewport_changed(Viewport::new(0.0, f64::NAN));
        let fb = sink.framebuffer();
        assert_eq!((fb.width(), fb.height()), (1, 1));
    }

    #[test]
    fn test_from_config_zero_width_degrades() {
        let mut config = PlotConfig::default();
        config.viewport.width = 0;
        let sink = RasterSink::from_config(&config).unwrap();
        assert_eq!((sink.framebuffer().width(), sink.framebuffer().height()), (1, 400));

        let mut surface = PlotSurface::new(sink);
        surface.on_viewport_ready(config.initial_viewport());
        assert_eq!(surface.state().len(), 2);
    }

    #[test]
    fn test_overflowing_slope_is_painted() {
        let mut surface = surface();
        surface.add_line(LineSpec::new(1e307, 0.0).unwrap());
        assert_eq!(surface.state().user_line_count(), 1);
        // Near-vertical line drawn over the vertical axis
        let pixel = surface.sink().framebuffer().get_pixel(200, 100).unwrap();
        assert!(pixel.b > pixel.r, "expected a bluish pixel, got {pixel:?}");
    }

    #[test]
    fn test_from_config() {
        let mut config = PlotConfig::default();
        config.viewport.width = 64;
        config.viewport.height = 32;
        let sink = RasterSink::from_config(&config).unwrap();
        assert_eq!(sink.framebuffer().width(), 64);
        assert_eq!(sink.framebuffer().count_pixels(Rgba::WHITE), 64 * 32);
    }
}
