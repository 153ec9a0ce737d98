//! Parsing boundary for user-entered numbers and names
//!
//! Everything typed by the user goes through here before it reaches the
//! consumption engine, so the engine only ever sees finite, non-negative values.

use crate::core::{Error, Result};

/// Parse a non-negative, finite decimal number.
///
/// Accepts surrounding whitespace and a decimal comma (`"0,15"`), which is
/// how most of the supported locales write fractions.
pub fn parse_non_negative(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input(field, text, "empty value"));
    }

    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| Error::invalid_input(field, text, "not a number"))?;

    if !value.is_finite() {
        return Err(Error::invalid_input(field, text, "not a finite number"));
    }
    if value < 0.0 {
        return Err(Error::invalid_input(field, text, "must not be negative"));
    }

    // "-0" parses to negative zero
    Ok(value + 0.0)
}

/// Parse daily usage hours.
///
/// No upper bound: values above 24 are kept, the daily chart simply fills
/// every hour while monthly figures use the full value.
pub fn parse_daily_hours(text: &str) -> Result<f64> {
    parse_non_negative("daily hours", text)
}

/// Validate an appliance name: non-empty after trimming.
pub fn parse_name(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input("name", text, "empty value"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert_eq!(parse_non_negative("power", "2000").unwrap(), 2000.0);
        assert_eq!(parse_non_negative("power", " 0.15 ").unwrap(), 0.15);
        assert_eq!(parse_non_negative("power", "0,6").unwrap(), 0.6);
        assert_eq!(parse_non_negative("power", "0").unwrap(), 0.0);
    }

    #[test]
    fn test_negative_zero_is_plain_zero() {
        for text in ["-0", "-0.0", "-0,0"] {
            let value = parse_non_negative("tariff", text).unwrap();
            assert_eq!(value, 0.0);
            assert!(value.is_sign_positive(), "{:?} kept its sign", text);
            assert_eq!(value.to_string(), "0");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "   ", "abc", "-1", "NaN", "inf", "-inf", "1.2.3"] {
            let err = parse_non_negative("power", text).unwrap_err();
            assert!(
                matches!(err, Error::InvalidInput { .. }),
                "expected InvalidInput for {:?}, got {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_parse_daily_hours() {
        assert_eq!(parse_daily_hours("24").unwrap(), 24.0);
        assert_eq!(parse_daily_hours("2.5").unwrap(), 2.5);
        assert_eq!(parse_daily_hours("30").unwrap(), 30.0);
        assert!(parse_daily_hours("-1").is_err());
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("  Nevera ").unwrap(), "Nevera");
        assert!(parse_name("   ").is_err());
    }
}
