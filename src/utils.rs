//! Utility functions

use crate::constants::APP_NAME;
use crate::error::{KitchenError, Result};
use std::path::PathBuf;

/// Per-user data directory holding settings and logs
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Wall-clock prefix for log lines shown in the UI
pub fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Parse a whole, non-negative number typed into a duration field.
/// Surrounding whitespace is ignored.
pub fn parse_duration_field(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => Err(KitchenError::InvalidNumericInput(trimmed.to_string())),
    }
}

/// Parse a decimal quantity for the unit converter
pub fn parse_quantity(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| KitchenError::InvalidNumericInput(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("42", 42)]
    #[case(" 7 ", 7)]
    fn duration_field_accepts_whole_numbers(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(parse_duration_field(text), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("-1")]
    #[case("1.5")]
    #[case("ten")]
    fn duration_field_rejects_bad_input(#[case] text: &str) {
        assert!(matches!(
            parse_duration_field(text),
            Err(KitchenError::InvalidNumericInput(_))
        ));
    }

    #[rstest]
    #[case("2", 2.0)]
    #[case("0.25", 0.25)]
    #[case("-3.5", -3.5)]
    #[case("1e3", 1000.0)]
    fn quantity_accepts_decimals(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_quantity(text), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("NaN")]
    #[case("inf")]
    fn quantity_rejects_non_numbers(#[case] text: &str) {
        assert!(parse_quantity(text).is_err());
    }
}
