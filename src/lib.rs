//! # Cartesian-Plot
//!
//! Plotting engine for straight lines `y = m·x + b` on a Cartesian plane.
//!
//! A [`PlotSurface`](surface::PlotSurface) keeps an ordered list of drawn
//! primitives: two axes through the viewport center, a grid every 40 pixels
//! aligned to the origin, then user lines spanning the full viewport width.
//! Every change is mirrored to a [`RenderSink`](surface::RenderSink), which
//! may paint pixels ([`RasterSink`](render::RasterSink)), build markup
//! ([`SvgSink`](output::SvgSink)) or drive a host UI scene.
//!
//! ## Features
//!
//! - **Pure Rust**: No JavaScript, HTML, or browser dependencies
//! - **Fixed scale**: 40 pixels per world unit, origin at the viewport center
//! - **Multiple Outputs**: PNG and SVG rendering
//! - **Host layer**: [`PlotSession`](session::PlotSession) parses text input and
//!   keeps the status line a window displays
//!
//! ## Quick Start
//!
//! ```rust
//! use cartesian_plot::prelude::*;
//!
//! let mut surface = PlotSurface::new(RecordingSink::new());
//! surface.on_viewport_ready(Viewport::new(400.0, 400.0));
//! surface.add_line(LineSpec::new(1.0, 0.0)?);
//!
//! let line = surface.state().user_lines().next().expect("one line");
//! assert_eq!(line.segment, Segment::from_coords(0.0, 400.0, 400.0, 0.0));
//! # Ok::<(), cartesian_plot::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: The `cartesian-plot` command-line renderer
//!
//! ## References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Points, viewports and segments.
pub mod geometry;

/// World/screen coordinate transform.
pub mod transform;

/// Stroke styles and themes.
pub mod style;

/// Drawn primitives.
pub mod primitive;

// ============================================================================
// Plotting Modules
// ============================================================================

/// Axis and grid generation.
pub mod grid;

/// Line specification and full-width line rendering.
pub mod line;

/// Plot surface controller and render sinks.
pub mod surface;

/// Text input parsing.
pub mod input;

/// Locale-invariant number formatting.
pub mod format;

/// Host-facing session: input, status and evaluation.
pub mod session;

/// YAML configuration.
pub mod config;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Rasterization and the framebuffer sink.
pub mod render;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for plotting operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use cartesian_plot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::PlotConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ScreenPoint, Segment, Viewport, WorldPoint};
    pub use crate::line::LineSpec;
    pub use crate::output::{PngEncoder, SvgEncoder, SvgSink};
    pub use crate::primitive::{DrawnPrimitive, PrimitiveKind};
    pub use crate::render::RasterSink;
    pub use crate::session::{Evaluator, PlotSession};
    pub use crate::style::{Stroke, Theme};
    pub use crate::surface::{PlotSurface, RecordingSink, RenderSink};
    pub use crate::transform::{to_screen, to_world, PIXELS_PER_UNIT};
}
