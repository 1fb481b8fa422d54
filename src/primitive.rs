//! Drawable primitives produced by the engine.
//!
//! A primitive is a styled screen-space segment tagged with the role it plays
//! on the surface. Primitives are independent of any drawing API; render sinks
//! turn them into pixels or markup.

use crate::geometry::Segment;
use crate::style::Stroke;

/// Role of a primitive on the plot surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Horizontal or vertical axis through the viewport center.
    AxisLine,
    /// Grid line on a world-integer coordinate.
    GridLine,
    /// A user-specified `y = m·x + b` line.
    UserLine,
}

/// A single renderable segment with its role and stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnPrimitive {
    /// Role of the primitive.
    pub kind: PrimitiveKind,
    /// Screen-space geometry.
    pub segment: Segment,
    /// Stroke used to paint the segment.
    pub stroke: Stroke,
}

impl DrawnPrimitive {
    /// Create an axis primitive.
    #[must_use]
    pub const fn axis(segment: Segment, stroke: Stroke) -> Self {
        Self { kind: PrimitiveKind::AxisLine, segment, stroke }
    }

    /// Create a grid primitive.
    #[must_use]
    pub const fn grid(segment: Segment, stroke: Stroke) -> Self {
        Self { kind: PrimitiveKind::GridLine, segment, stroke }
    }

    /// Create a user line primitive.
    #[must_use]
    pub const fn user_line(segment: Segment, stroke: Stroke) -> Self {
        Self { kind: PrimitiveKind::UserLine, segment, stroke }
    }

    /// True for user lines.
    #[must_use]
    pub fn is_user_line(&self) -> bool {
        self.kind == PrimitiveKind::UserLine
    }
}
