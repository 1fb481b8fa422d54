//! Error types for cartesian-plot operations.
//!
//! The plotting engine itself is total: transforms, grid generation and line
//! rendering never fail. Errors only arise at the edges, when parsing user
//! input, loading configuration or writing output.

use std::io;
use thiserror::Error;

use crate::input::InputField;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cartesian-plot operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Slope or intercept text is not a finite real number.
    ///
    /// The display text is the status message shown to the user.
    #[error("Invalid {field}")]
    InvalidNumericInput {
        /// Which input field failed.
        field: InputField,
        /// The rejected text.
        text: String,
    },

    /// Line coefficients must both be finite.
    #[error("Non-finite line coefficients: slope {slope}, intercept {intercept}")]
    NonFiniteCoefficient {
        /// Slope value.
        slope: f64,
        /// Intercept value.
        intercept: f64,
    },

    /// Configuration file not found or unreadable.
    #[error("Configuration not found: {0}")]
    ConfigNotFound(String),

    /// Configuration failed to parse.
    #[error("Configuration parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number of the failure (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}
