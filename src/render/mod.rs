//! Rasterization of surface primitives.
//!
//! # Algorithms
//!
//! - **Cohen–Sutherland clipping**: segments are cut to the framebuffer before
//!   drawing, so steep lines with far off-screen endpoints stay cheap
//! - **Wu's Anti-aliased Line**: Smooth line rendering with sub-pixel accuracy
//! - **Bresenham's Line**: Fast non-antialiased line drawing
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod clip;
mod primitives;
mod sink;

pub use clip::{clip_segment, ClipRect};
pub use primitives::{draw_line, draw_line_aa, draw_stroke, Drawable};
pub use sink::RasterSink;
