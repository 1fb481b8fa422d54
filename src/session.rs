//! Host-facing plotting session.
//!
//! [`PlotSession`] is the command layer a host window binds its buttons to. It
//! parses text input, forwards valid lines to the [`PlotSurface`], consults the
//! external expression [`Evaluator`] and keeps the status and output text the
//! host displays.

use tracing::debug;

use crate::error::Result;
pub use crate::format::format_general;
use crate::geometry::Viewport;
use crate::input::parse_line_spec;
use crate::line::LineSpec;
use crate::surface::{PlotSurface, RenderSink};

/// Status after a successful evaluation.
pub const STATUS_SUCCESSFUL: &str = "Successful";

/// Status after clearing the surface.
pub const STATUS_CLEARED: &str = "Cleared";

/// Outcome of evaluating an expression: a number, or a message for the user.
pub type EvalResult = std::result::Result<f64, String>;

/// External expression evaluator.
///
/// The expression language lives outside this crate; the session only
/// consumes its result.
pub trait Evaluator {
    /// Evaluate `expression`.
    fn evaluate(&mut self, expression: &str) -> EvalResult;
}

impl<F> Evaluator for F
where
    F: FnMut(&str) -> EvalResult,
{
    fn evaluate(&mut self, expression: &str) -> EvalResult {
        self(expression)
    }
}

/// Evaluator used when the host provides none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvaluator;

impl Evaluator for NoEvaluator {
    fn evaluate(&mut self, _expression: &str) -> EvalResult {
        Err("No evaluator available".to_string())
    }
}

/// Plotting session: input validation, status text and the plot surface.
#[derive(Debug)]
pub struct PlotSession<S: RenderSink = (), E: Evaluator = NoEvaluator> {
    surface: PlotSurface<S>,
    evaluator: E,
    status: String,
    output: String,
}

impl<S: RenderSink> PlotSession<S, NoEvaluator> {
    /// Create a session without an expression evaluator.
    pub fn new(surface: PlotSurface<S>) -> Self {
        Self::with_evaluator(surface, NoEvaluator)
    }
}

impl<S: RenderSink, E: Evaluator> PlotSession<S, E> {
    /// Create a session with an expression evaluator.
    pub fn with_evaluator(surface: PlotSurface<S>, evaluator: E) -> Self {
        Self {
            surface,
            evaluator,
            status: String::new(),
            output: String::new(),
        }
    }

    /// Status line for the user.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Result text of the last evaluation.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The plot surface.
    pub fn surface(&self) -> &PlotSurface<S> {
        &self.surface
    }

    /// Consume the session and return its surface.
    pub fn into_surface(self) -> PlotSurface<S> {
        self.surface
    }

    /// First layout pass of the host viewport.
    pub fn ready(&mut self, size: Viewport) {
        self.surface.on_viewport_ready(size);
    }

    /// Host viewport resized.
    pub fn resize(&mut self, size: Viewport) {
        self.surface.on_viewport_resized(size);
    }

    /// Evaluate an expression and show its value or error.
    pub fn evaluate(&mut self, expression: &str) {
        match self.evaluator.evaluate(expression) {
            Ok(value) => {
                self.output = format_general(value);
                self.status = STATUS_SUCCESSFUL.to_string();
            }
            Err(message) => {
                self.output.clear();
                self.status = message;
            }
        }
    }

    /// Draw a single line, replacing any lines already shown.
    pub fn draw(&mut self, slope: &str, intercept: &str) -> Result<LineSpec> {
        let spec = self.accept(slope, intercept)?;
        self.surface.set_single_line(spec);
        Ok(spec)
    }

    /// Draw a line on top of the lines already shown.
    pub fn draw_line(&mut self, slope: &str, intercept: &str) -> Result<LineSpec> {
        let spec = self.accept(slope, intercept)?;
        self.surface.add_line(spec);
        Ok(spec)
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.status = STATUS_CLEARED.to_string();
    }

    fn accept(&mut self, slope: &str, intercept: &str) -> Result<LineSpec> {
        match parse_line_spec(slope, intercept) {
            Ok(spec) => {
                self.status = format!("Drawn line: {spec}");
                Ok(spec)
            }
            Err(err) => {
                debug!(slope, intercept, %err, "line input rejected");
                self.status = err.to_string();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSink;

    fn session() -> PlotSession<RecordingSink> {
        let mut session = PlotSession::new(PlotSurface::new(RecordingSink::new()));
        session.ready(Viewport::new(400.0, 400.0));
        session
    }

    #[test]
    fn test_evaluate_success() {
        let surface = PlotSurface::new(());
        let mut session = PlotSession::with_evaluator(surface, |_: &str| -> EvalResult { Ok(42.0) });
        session.evaluate("6*7");
        assert_eq!(session.output(), "42");
        assert_eq!(session.status(), STATUS_SUCCESSFUL);
    }

    #[test]
    fn test_evaluate_infinite_result() {
        let evaluator = |_: &str| -> EvalResult { Ok(f64::NEG_INFINITY) };
        let mut session = PlotSession::with_evaluator(PlotSurface::new(()), evaluator);
        session.evaluate("-1/0");
        assert_eq!(session.output(), "-Infinity");
        assert_eq!(session.status(), STATUS_SUCCESSFUL);
    }

    #[test]
    fn test_draw_status_uses_general_format() {
        let mut session = session();
        session.draw_line("1e20", "0.00001").unwrap();
        assert_eq!(session.status(), "Drawn line: y = 1E+20·x + 1E-05");
    }

    #[test]
    fn test_evaluate_failure_clears_output() {
        let mut answers = vec![Err("Unexpected token".to_string()), Ok(1.0)];
        let evaluator = move |_: &str| -> EvalResult { answers.pop().unwrap_or(Ok(0.0)) };
        let mut session = PlotSession::with_evaluator(PlotSurface::new(()), evaluator);
        session.evaluate("1");
        assert_eq!(session.output(), "1");
        session.evaluate("1 +");
        assert_eq!(session.output(), "");
        assert_eq!(session.status(), "Unexpected token");
    }

    #[test]
    fn test_no_evaluator() {
        let mut session = PlotSession::new(PlotSurface::new(()));
        session.evaluate("1");
        assert!(session.output().is_empty());
        assert!(!session.status().is_empty());
    }

    #[test]
    fn test_draw_line_accumulates() {
        let mut session = session();
        session.draw_line("1", "0").unwrap();
        session.draw_line("0", "2").unwrap();
        assert_eq!(session.surface().state().user_line_count(), 2);
        assert_eq!(session.status(), "Drawn line: y = 0·x + 2");
    }

    #[test]
    fn test_draw_replaces() {
        let mut session = session();
        session.draw_line("1", "0").unwrap();
        session.draw("-1", "0.5").unwrap();
        assert_eq!(session.surface().state().user_line_count(), 1);
        assert_eq!(session.status(), "Drawn line: y = -1·x + 0.5");
    }

    #[test]
    fn test_invalid_input_leaves_surface_untouched() {
        let mut session = session();
        session.draw_line("1", "0").unwrap();
        let before = session.surface().state().clone();
        let commands = session.surface().sink().commands().len();

        assert!(session.draw("one", "0").is_err());
        assert_eq!(session.status(), "Invalid slope");
        assert!(session.draw_line("1", "1,5").is_err());
        assert_eq!(session.status(), "Invalid intercept");

        assert_eq!(session.surface().state(), &before);
        assert_eq!(session.surface().sink().commands().len(), commands);
    }

    #[test]
    fn test_clear_status() {
        let mut session = session();
        session.draw_line("1", "0").unwrap();
        session.clear();
        assert_eq!(session.status(), STATUS_CLEARED);
        assert_eq!(session.surface().state().user_line_count(), 0);
    }

    #[test]
    fn test_resize_drops_lines() {
        let mut session = session();
        session.draw_line("1", "0").unwrap();
        session.resize(Viewport::new(200.0, 100.0));
        assert_eq!(session.surface().state().user_line_count(), 0);
        assert_eq!(session.into_surface().viewport(), Viewport::new(200.0, 100.0));
    }
}
