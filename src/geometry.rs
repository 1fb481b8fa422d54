//! Geometric primitives for the plotting engine.
//!
//! World coordinates are the mathematical plane (y up). Screen coordinates are
//! viewport pixels (y down, origin at the top-left corner). The two point types
//! are kept distinct so one cannot be passed where the other is expected.

/// A point in the mathematical plane, y-axis pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPoint {
    /// X coordinate in world units.
    pub x: f64,
    /// Y coordinate in world units.
    pub y: f64,
}

impl WorldPoint {
    /// World origin (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new world point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in viewport pixels, y-axis pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X coordinate in pixels.
    pub x: f64,
    /// Y coordinate in pixels.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport size in pixels, supplied by the host layout system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not a finite number.
    ///
    /// This is the normal state before the first layout pass.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Copy with negative or non-finite sides replaced by zero.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let side = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(side(self.width), side(self.height))
    }

    /// Viewport center in screen coordinates.
    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// Start point.
    pub start: ScreenPoint,
    /// End point.
    pub end: ScreenPoint,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(ScreenPoint::new(x0, y0), ScreenPoint::new(x1, y1))
    }

    /// True when both endpoints share the same y.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// True when both endpoints share the same x.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Length of the segment in pixels.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_degenerate() {
        assert!(Viewport::new(0.0, 100.0).is_degenerate());
        assert!(Viewport::new(100.0, -1.0).is_degenerate());
        assert!(Viewport::new(f64::NAN, 100.0).is_degenerate());
        assert!(Viewport::new(f64::INFINITY, 100.0).is_degenerate());
        assert!(!Viewport::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_viewport_sanitized() {
        let v = Viewport::new(-5.0, f64::NAN).sanitized();
        assert_eq!(v, Viewport::new(0.0, 0.0));
        assert_eq!(Viewport::new(3.0, 4.0).sanitized(), Viewport::new(3.0, 4.0));
    }

    #[test]
    fn test_viewport_center() {
        assert_eq!(Viewport::new(400.0, 300.0).center(), ScreenPoint::new(200.0, 150.0));
    }

    #[test]
    fn test_segment_orientation() {
        let h = Segment::from_coords(0.0, 5.0, 10.0, 5.0);
        assert!(h.is_horizontal());
        assert!(!h.is_vertical());
        assert!((h.length() - 10.0).abs() < 1e-12);
    }
}
