//! Color types.
//!
//! Provides the RGBA representation used by strokes, raster sinks and SVG output.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque steel blue, the default user line color.
    pub const STEEL_BLUE: Self = Self::rgb(70, 130, 180);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque gray with equal channels.
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Composite `self` over `dst` (Porter-Duff "over", straight alpha).
    #[must_use]
    pub fn over(self, dst: Self) -> Self {
        let src_a = f32::from(self.a) / 255.0;
        let dst_a = f32::from(dst.a) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return Self::TRANSPARENT;
        }
        let channel = |s: u8, d: u8| {
            let mixed = f32::from(s) * src_a + f32::from(d) * dst_a * (1.0 - src_a);
            (mixed / out_a).round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            channel(self.r, dst.r),
            channel(self.g, dst.g),
            channel(self.b, dst.b),
            (out_a * 255.0).round() as u8,
        )
    }

    /// Scale the alpha channel by `factor` (clamped to 0.0-1.0).
    #[must_use]
    pub fn fade(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        self.with_alpha((f32::from(self.a) * factor).round() as u8)
    }
}
