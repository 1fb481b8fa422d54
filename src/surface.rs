//! Plot surface controller and render sink interface.
//!
//! [`PlotSurface`] owns the ordered primitive list ([`PlotSurfaceState`]) and
//! reacts to viewport and user commands. Every change to the state is mirrored
//! to a [`RenderSink`] as "clear all" and "append" commands, so the sink never
//! needs to diff anything itself.
//!
//! # State machine
//!
//! ```text
//! Empty --clear/resize/ready--> AxesOnly --add_line*--> AxesPlusLines
//!   AxesPlusLines --clear/resize/ready--> AxesOnly
//!   any --set_single_line--> AxesPlusLines (exactly one user line)
//! ```

use tracing::{debug, trace};

use crate::geometry::Viewport;
use crate::grid;
use crate::line::{render_line, LineSpec};
use crate::primitive::{DrawnPrimitive, PrimitiveKind};
use crate::style::Theme;

// ============================================================================
// Render Sink
// ============================================================================

/// Receiver of primitive-list changes.
///
/// The sink owns actual output (pixels, markup, a UI scene). It only ever sees
/// two commands: drop everything, or append one primitive on top.
pub trait RenderSink {
    /// Remove every primitive from the output.
    fn clear_all(&mut self);

    /// Paint a primitive on top of everything appended so far.
    fn append(&mut self, primitive: &DrawnPrimitive);

    /// Called with the new size before the surface regenerates for a resize.
    fn viewport_changed(&mut self, _viewport: Viewport) {}
}

/// Null sink.
impl RenderSink for () {
    fn clear_all(&mut self) {}

    fn append(&mut self, _primitive: &DrawnPrimitive) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn clear_all(&mut self) {
        (**self).clear_all();
    }

    fn append(&mut self, primitive: &DrawnPrimitive) {
        (**self).append(primitive);
    }

    fn viewport_changed(&mut self, viewport: Viewport) {
        (**self).viewport_changed(viewport);
    }
}

/// A command received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCommand {
    /// Viewport size notification.
    ViewportChanged(Viewport),
    /// Clear all primitives.
    ClearAll,
    /// Append one primitive.
    Append(DrawnPrimitive),
}

/// Sink that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Vec<SinkCommand>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[SinkCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the sink empty.
    pub fn take_commands(&mut self) -> Vec<SinkCommand> {
        std::mem::take(&mut self.commands)
    }

    /// The primitive list a display would show after applying every command.
    #[must_use]
    pub fn replay(&self) -> Vec<DrawnPrimitive> {
        let mut shown = Vec::new();
        for command in &self.commands {
            match command {
                SinkCommand::ViewportChanged(_) => {}
                SinkCommand::ClearAll => shown.clear(),
                SinkCommand::Append(primitive) => shown.push(*primitive),
            }
        }
        shown
    }
}

impl RenderSink for RecordingSink {
    fn clear_all(&mut self) {
        self.commands.push(SinkCommand::ClearAll);
    }

    fn append(&mut self, primitive: &DrawnPrimitive) {
        self.commands.push(SinkCommand::Append(*primitive));
    }

    fn viewport_changed(&mut self, viewport: Viewport) {
        self.commands.push(SinkCommand::ViewportChanged(viewport));
    }
}

// ============================================================================
// Surface State
// ============================================================================

/// Ordered primitive list; insertion order is paint order.
///
/// When non-empty it starts with the horizontal axis, then the vertical axis,
/// then grid lines, then user lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSurfaceState {
    primitives: Vec<DrawnPrimitive>,
}

impl PlotSurfaceState {
    /// All primitives in paint order.
    #[must_use]
    pub fn primitives(&self) -> &[DrawnPrimitive] {
        &self.primitives
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// True before the first regeneration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// User lines in the order they were added.
    pub fn user_lines(&self) -> impl Iterator<Item = &DrawnPrimitive> {
        self.primitives.iter().filter(|p| p.is_user_line())
    }

    /// Number of user lines.
    #[must_use]
    pub fn user_line_count(&self) -> usize {
        self.user_lines().count()
    }

    /// Check the paint-order invariant.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        let [horizontal, vertical, rest @ ..] = self.primitives.as_slice() else {
            return self.primitives.is_empty();
        };

        let axes_ok = horizontal.kind == PrimitiveKind::AxisLine
            && horizontal.segment.is_horizontal()
            && vertical.kind == PrimitiveKind::AxisLine
            && vertical.segment.is_vertical();

        let first_user = rest
            .iter()
            .position(DrawnPrimitive::is_user_line)
            .unwrap_or(rest.len());
        let (frame, users) = rest.split_at(first_user);

        axes_ok
            && frame.iter().all(|p| p.kind == PrimitiveKind::GridLine)
            && users.iter().all(DrawnPrimitive::is_user_line)
    }

    fn replace(&mut self, primitives: Vec<DrawnPrimitive>) {
        self.primitives = primitives;
    }

    fn push(&mut self, primitive: DrawnPrimitive) {
        self.primitives.push(primitive);
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Plot surface controller.
///
/// All operations are synchronous and complete within one call; the surface
/// is driven from a single event loop and is not shared.
#[derive(Debug)]
pub struct PlotSurface<S: RenderSink = ()> {
    viewport: Viewport,
    theme: Theme,
    state: PlotSurfaceState,
    sink: S,
}

impl<S: RenderSink> PlotSurface<S> {
    /// Create an empty surface with the default theme.
    ///
    /// The viewport is unmeasured (0×0) until [`Self::on_viewport_ready`].
    pub fn new(sink: S) -> Self {
        Self::with_theme(sink, Theme::default())
    }

    /// Create an empty surface with a custom theme.
    pub fn with_theme(sink: S, theme: Theme) -> Self {
        Self {
            viewport: Viewport::default(),
            theme,
            state: PlotSurfaceState::default(),
            sink,
        }
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Theme used for new primitives.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current primitive list.
    pub fn state(&self) -> &PlotSurfaceState {
        &self.state
    }

    /// The render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The render sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the surface and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Viewport was resized: drop all lines and rebuild the frame for `size`.
    pub fn on_viewport_resized(&mut self, size: Viewport) {
        self.viewport = size;
        self.sink.viewport_changed(size);
        self.regenerate();
        debug!(
            width = size.width,
            height = size.height,
            primitives = self.state.len(),
            "viewport resized"
        );
    }

    /// First layout pass; identical to a resize.
    pub fn on_viewport_ready(&mut self, size: Viewport) {
        self.on_viewport_resized(size);
    }

    /// Remove all user lines, keeping axes and grid.
    pub fn clear(&mut self) {
        self.regenerate();
        debug!(primitives = self.state.len(), "surface cleared");
    }

    /// Overlay a line on top of the lines already drawn.
    pub fn add_line(&mut self, spec: LineSpec) {
        if self.state.is_empty() {
            self.regenerate();
        }
        let primitive = render_line(spec, self.viewport, self.theme.user_line);
        self.append(primitive);
        trace!(%spec, user_lines = self.state.user_line_count(), "line added");
    }

    /// Replace every user line with `spec`.
    pub fn set_single_line(&mut self, spec: LineSpec) {
        self.regenerate();
        let primitive = render_line(spec, self.viewport, self.theme.user_line);
        self.append(primitive);
        debug!(%spec, "single line set");
    }

    fn regenerate(&mut self) {
        let frame = grid::generate(self.viewport, &self.theme);
        self.sink.clear_all();
        for primitive in &frame {
            self.sink.append(primitive);
        }
        self.state.replace(frame);
    }

    fn append(&mut self, primitive: DrawnPrimitive) {
        self.sink.append(&primitive);
        self.state.push(primitive);
    }
}

impl Default for PlotSurface<()> {
    fn default() -> Self {
        Self::new(())
    }
}
