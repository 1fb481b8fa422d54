//! Slope-intercept lines and their viewport rendering.
//!
//! A line `y = m·x + b` is rendered full-width: it is evaluated at the left and
//! right edges of the visible world x-range and the two endpoints are joined.
//! The vertical extent is not clipped, so steep lines may run past the top and
//! bottom of the viewport.

use std::fmt;

use crate::error::{Error, Result};
use crate::format::format_general;
use crate::geometry::{Segment, Viewport, WorldPoint};
use crate::primitive::DrawnPrimitive;
use crate::style::Stroke;
use crate::transform::{to_screen, visible_world_x_range};

/// A line in slope-intercept form, `y = slope·x + intercept`.
///
/// Both coefficients are finite. Vertical lines cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    slope: f64,
    intercept: f64,
}

impl LineSpec {
    /// Create a line from its slope and intercept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoefficient`] if either value is NaN or infinite.
    pub fn new(slope: f64, intercept: f64) -> Result<Self> {
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(Error::NonFiniteCoefficient { slope, intercept });
        }
        Ok(Self { slope, intercept })
    }

    /// Slope `m`.
    #[must_use]
    pub const fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept `b`.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluate the line at world `x`.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl fmt::Display for LineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y = {}·x + {}",
            format_general(self.slope),
            format_general(self.intercept)
        )
    }
}

/// Largest world |y| an endpoint may take.
///
/// Far past any viewport, yet small enough that segment arithmetic in the
/// sinks cannot overflow.
pub const MAX_WORLD_Y: f64 = 1e150;

/// Render a line across the full viewport width as a user line primitive.
///
/// Endpoint heights that overflow or exceed [`MAX_WORLD_Y`] are clamped to it,
/// keeping their sign, so the segment is always finite.
#[must_use]
pub fn render_line(spec: LineSpec, viewport: Viewport, stroke: Stroke) -> DrawnPrimitive {
    let viewport = viewport.sanitized();
    let (x_min, x_max) = visible_world_x_range(viewport);
    let endpoint = |x: f64| {
        let y = spec.y_at(x).clamp(-MAX_WORLD_Y, MAX_WORLD_Y);
        to_screen(WorldPoint::new(x, y), viewport)
    };

    let start = endpoint(x_min);
    let end = endpoint(x_max);

    DrawnPrimitive::user_line(Segment::new(start, end), stroke)
}
