use crate::engine::error::ConversionError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain decimal number: optional sign, digits and/or fraction, optional exponent
    /// Examples: "12", "-3.5", ".25", "4.", "1e3", "+2.5E-4"
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// Parse user input as a finite real number.
///
/// Surrounding whitespace is ignored. Empty input, words such as "inf" or
/// "NaN", and values that overflow to infinity are rejected with
/// `ConversionError::InvalidNumber`.
pub fn parse_number(raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    if !NUMBER_PATTERN.is_match(trimmed) {
        return Err(ConversionError::InvalidNumber);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ConversionError::InvalidNumber)
}
