//! Pixel grid painted by the raster render sink.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Packed row-major grid of [`Rgba`] pixels.
///
/// A new framebuffer is fully transparent. Writes outside the grid are
/// ignored, which lets rasterizers emit wide strokes near the edges without
/// bounds checks of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    /// Allocate a `width × height` framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use cartesian_plot::color::Rgba;
    /// use cartesian_plot::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(40, 30)?;
    /// assert_eq!(fb.get_pixel(39, 29), Some(Rgba::TRANSPARENT));
    /// assert_eq!(fb.get_pixel(40, 0), None);
    /// # Ok::<(), cartesian_plot::Error>(())
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; len],
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// The pixel at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).and_then(|i| self.pixels.get(i).copied())
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    /// Composite `color` over the pixel at `(x, y)`.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color.over(*pixel);
        }
    }

    /// Number of pixels exactly equal to `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Pixels as tightly packed 8-bit RGBA bytes, top row first.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut Rgba> {
        let i = self.index(x, y)?;
        self.pixels.get_mut(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_transparent() {
        let fb = Framebuffer::new(7, 3).unwrap();
        assert_eq!((fb.width(), fb.height()), (7, 3));
        assert_eq!(fb.count_pixels(Rgba::TRANSPARENT), 21);
    }

    #[test]
    fn test_zero_side_is_rejected() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            assert!(matches!(
                Framebuffer::new(w, h),
                Err(Error::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_writes_outside_grid_are_ignored() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        let before = fb.clone();
        fb.set_pixel(4, 0, Rgba::BLACK);
        fb.blend_pixel(0, 4, Rgba::BLACK);
        fb.set_pixel(u32::MAX, u32::MAX, Rgba::BLACK);
        assert_eq!(fb, before);
    }

    #[test]
    fn test_set_and_blend() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        fb.set_pixel(1, 2, Rgba::STEEL_BLUE);
        fb.blend_pixel(3, 0, Rgba::BLACK.with_alpha(128));

        assert_eq!(fb.get_pixel(1, 2), Some(Rgba::STEEL_BLUE));
        assert_eq!(fb.get_pixel(2, 1), Some(Rgba::WHITE));
        let blended = fb.get_pixel(3, 0).unwrap();
        assert!(blended.r > 100 && blended.r < 150);
        assert_eq!(fb.count_pixels(Rgba::WHITE), 14);
    }

    #[test]
    fn test_rgba8_is_row_major() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::BLACK);
        fb.set_pixel(2, 0, Rgba::WHITE);
        let bytes = fb.to_rgba8();
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[8..12], &[255, 255, 255, 255]);
        assert_eq!(&bytes[20..24], &[0, 0, 0, 255]);
    }
}
