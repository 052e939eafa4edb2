//! Numeric field helpers. The store is hand-editable, so decimal values may
//! arrive with a comma separator; everything is normalized here before
//! parsing.

/// Parse a decimal field, accepting "12.5" and "12,5". Empty input is None.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim().replace(',', ".");
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a yes/no field. Old sheets carried Spanish "sí"/"no" answers.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "sí" | "si" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Render a decimal without a trailing ".0" for whole values.
pub fn format_decimal(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}
