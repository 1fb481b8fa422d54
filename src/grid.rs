//! Axis and grid generation.
//!
//! Grid lines are phase-aligned to the viewport center: the first line along
//! an extent sits at `(extent / 2) mod PIXELS_PER_UNIT`, so every line lands on
//! a world-integer coordinate no matter how the viewport is sized.

use tracing::debug;

use crate::geometry::{Segment, Viewport};
use crate::primitive::DrawnPrimitive;
use crate::style::Theme;
use crate::transform::PIXELS_PER_UNIT;

/// Pixel offsets of grid lines along an extent, ascending.
///
/// Yields nothing for a zero, negative or non-finite extent.
pub fn grid_offsets(extent: f64) -> impl Iterator<Item = f64> {
    let valid = extent.is_finite() && extent > 0.0;
    let phase = if valid { (extent / 2.0) % PIXELS_PER_UNIT } else { 0.0 };

    (0_u64..)
        .map(move |k| phase + k as f64 * PIXELS_PER_UNIT)
        .take_while(move |&offset| valid && offset < extent)
}

/// Generate axes followed by grid lines for the given viewport.
///
/// Order: horizontal axis, vertical axis, vertical grid lines by ascending x,
/// horizontal grid lines by ascending y. A degenerate viewport yields the two
/// axes only.
#[must_use]
pub fn generate(viewport: Viewport, theme: &Theme) -> Vec<DrawnPrimitive> {
    let size = viewport.sanitized();
    let center = size.center();

    let mut primitives = vec![
        DrawnPrimitive::axis(
            Segment::from_coords(0.0, center.y, size.width, center.y),
            theme.axis,
        ),
        DrawnPrimitive::axis(
            Segment::from_coords(center.x, 0.0, center.x, size.height),
            theme.axis,
        ),
    ];

    if viewport.is_degenerate() {
        debug!(width = viewport.width, height = viewport.height, "degenerate viewport, axes only");
        return primitives;
    }

    primitives.extend(grid_offsets(size.width).map(|x| {
        DrawnPrimitive::grid(Segment::from_coords(x, 0.0, x, size.height), theme.grid)
    }));
    primitives.extend(grid_offsets(size.height).map(|y| {
        DrawnPrimitive::grid(Segment::from_coords(0.0, y, size.width, y), theme.grid)
    }));

    primitives
}
