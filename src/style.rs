//! Stroke styles for axes, grid lines and user lines.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Line stroke styling.
///
/// The width is expressed in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke.
    #[must_use]
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Visual theme for the plot surface.
///
/// Axes are heavier than grid lines and user lines are heavier still, so a
/// user line is never visually lost in the coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Surface background.
    pub background: Rgba,
    /// Horizontal and vertical axis stroke.
    pub axis: Stroke,
    /// Grid line stroke.
    pub grid: Stroke,
    /// User line stroke.
    pub user_line: Stroke,
}

impl Theme {
    /// Create the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            axis: Stroke::new(Rgba::gray(120), 1.2),
            grid: Stroke::new(Rgba::gray(180), 0.5),
            user_line: Stroke::new(Rgba::STEEL_BLUE, 2.0),
        }
    }
}
