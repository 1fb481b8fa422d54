//! Locale-invariant number formatting for status and result text.

/// Format a number in locale-invariant general form.
///
/// Uses the shortest digits that round-trip. Switches to scientific notation
/// (`1.5E+20`, `1E-05`) when the decimal exponent is at least 15 or at most -5.
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return value.to_string();
    };

    if (-4..15).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}E{sign}{:02}", exponent.abs())
    }
}
