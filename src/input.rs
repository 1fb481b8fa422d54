//! Locale-invariant parsing of slope and intercept text.
//!
//! Input is validated before any surface operation runs; a rejected field is
//! reported as an [`Error::InvalidNumericInput`] whose display text is the
//! status message for the user.

use std::fmt;

use crate::error::{Error, Result};
use crate::line::LineSpec;

/// Which text field a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The slope field `m`.
    Slope,
    /// The intercept field `b`.
    Intercept,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Slope => "slope",
            Self::Intercept => "intercept",
        })
    }
}

/// Parse a finite real number, independent of locale.
///
/// Accepts surrounding whitespace, an optional sign, `.` as decimal separator
/// and an optional exponent. Rejects group separators, `,` decimals,
/// infinities, NaN and values that overflow.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let looks_numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if trimmed.is_empty() || !looks_numeric {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse slope and intercept text into a line, checking the slope first.
pub fn parse_line_spec(slope: &str, intercept: &str) -> Result<LineSpec> {
    let m = parse_field(slope, InputField::Slope)?;
    let b = parse_field(intercept, InputField::Intercept)?;
    LineSpec::new(m, b)
}

fn parse_field(text: &str, field: InputField) -> Result<f64> {
    parse_number(text).ok_or_else(|| Error::InvalidNumericInput {
        field,
        text: text.to_string(),
    })
}
