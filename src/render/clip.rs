//! Cohen–Sutherland segment clipping.

use crate::geometry::{ScreenPoint, Segment};

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

/// Axis-aligned clip rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ClipRect {
    /// Create a clip rectangle from corners.
    #[must_use]
    pub const fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle covering `width × height` pixels grown by `margin` on every side.
    #[must_use]
    pub fn around(width: f64, height: f64, margin: f64) -> Self {
        Self::new(
            ScreenPoint::new(-margin, -margin),
            ScreenPoint::new(width + margin, height + margin),
        )
    }

    fn region(&self, point: ScreenPoint) -> u8 {
        let mut code = 0;
        if point.x < self.min.x {
            code |= LEFT;
        } else if point.x > self.max.x {
            code |= RIGHT;
        }
        if point.y < self.min.y {
            code |= TOP;
        } else if point.y > self.max.y {
            code |= BOTTOM;
        }
        code
    }
}

/// Clip a segment to `rect`.
///
/// Returns `None` when the segment lies entirely outside or has a non-finite
/// endpoint.
#[must_use]
pub fn clip_segment(segment: Segment, rect: ClipRect) -> Option<Segment> {
    let Segment { mut start, mut end } = segment;
    if ![start.x, start.y, end.x, end.y].iter().all(|v| v.is_finite()) {
        return None;
    }

    let mut out_start = rect.region(start);
    let mut out_end = rect.region(end);

    loop {
        if (out_start | out_end) == 0 {
            return Some(Segment::new(start, end));
        }
        if (out_start & out_end) != 0 {
            return None;
        }

        let out_code = if out_start != 0 { out_start } else { out_end };
        let point = if (out_code & TOP) != 0 {
            let x = start.x + (end.x - start.x) * (rect.min.y - start.y) / (end.y - start.y);
            ScreenPoint::new(x, rect.min.y)
        } else if (out_code & BOTTOM) != 0 {
            let x = start.x + (end.x - start.x) * (rect.max.y - start.y) / (end.y - start.y);
            ScreenPoint::new(x, rect.max.y)
        } else if (out_code & RIGHT) != 0 {
            let y = start.y + (end.y - start.y) * (rect.max.x - start.x) / (end.x - start.x);
            ScreenPoint::new(rect.max.x, y)
        } else {
            let y = start.y + (end.y - start.y) * (rect.min.x - start.x) / (end.x - start.x);
            ScreenPoint::new(rect.min.x, y)
        };

        if out_code == out_start {
            start = point;
            out_start = rect.region(start);
        } else {
            end = point;
            out_end = rect.region(end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect() -> ClipRect {
        ClipRect::around(10.0, 10.0, 0.0)
    }

    #[test]
    fn test_clip_inside() {
        let segment = Segment::from_coords(2.0, 2.0, 8.0, 8.0);
        assert_eq!(clip_segment(segment, rect()), Some(segment));
    }

    #[test]
    fn test_clip_outside() {
        let segment = Segment::from_coords(-5.0, -5.0, -1.0, 20.0);
        assert_eq!(clip_segment(segment, rect()), None);
    }

    #[test]
    fn test_clip_steep_line() {
        // Steep user line running far past the top and bottom edges
        let segment = Segment::from_coords(0.0, 2005.0, 10.0, -1995.0);
        let clipped = clip_segment(segment, rect()).expect("line crosses the rect");
        assert_relative_eq!(clipped.start.y, 10.0);
        assert_relative_eq!(clipped.end.y, 0.0);
        assert_relative_eq!(clipped.start.x, 4.9875, epsilon = 1e-9);
        assert_relative_eq!(clipped.end.x, 5.0125, epsilon = 1e-9);
    }

    #[test]
    fn test_clip_rejects_non_finite() {
        let segment = Segment::from_coords(0.0, f64::INFINITY, 10.0, f64::NEG_INFINITY);
        assert_eq!(clip_segment(segment, rect()), None);
    }

    #[test]
    fn test_clip_margin() {
        let r = ClipRect::around(10.0, 20.0, 1.0);
        assert_eq!(r.min, ScreenPoint::new(-1.0, -1.0));
        assert_eq!(r.max, ScreenPoint::new(11.0, 21.0));
    }
}
