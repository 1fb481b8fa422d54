//! World-to-screen coordinate transform.
//!
//! The world origin sits at the viewport center and one world unit spans
//! [`PIXELS_PER_UNIT`] pixels. The scale is a process-wide constant.

use crate::geometry::{ScreenPoint, Viewport, WorldPoint};

/// Pixels per world unit.
pub const PIXELS_PER_UNIT: f64 = 40.0;

/// World units per pixel (`1 / PIXELS_PER_UNIT`).
pub const UNITS_PER_PIXEL: f64 = 1.0 / PIXELS_PER_UNIT;

/// Map a world point into viewport pixels.
#[must_use]
pub fn to_screen(world: WorldPoint, viewport: Viewport) -> ScreenPoint {
    ScreenPoint::new(
        viewport.width / 2.0 + world.x * PIXELS_PER_UNIT,
        viewport.height / 2.0 - world.y * PIXELS_PER_UNIT,
    )
}

/// Map a viewport pixel back into world coordinates.
#[must_use]
pub fn to_world(screen: ScreenPoint, viewport: Viewport) -> WorldPoint {
    WorldPoint::new(
        (screen.x - viewport.width / 2.0) * UNITS_PER_PIXEL,
        (viewport.height / 2.0 - screen.y) * UNITS_PER_PIXEL,
    )
}

/// World x-range spanned by the viewport width, symmetric about the origin.
#[must_use]
pub fn visible_world_x_range(viewport: Viewport) -> (f64, f64) {
    let half = viewport.width / 2.0 * UNITS_PER_PIXEL;
    (-half, half)
}
