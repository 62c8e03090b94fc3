use crate::catalog::{find_unit, Category, Unit};
use crate::engine::error::{ConversionError, INVALID_NUMBER_MESSAGE};
use crate::engine::formatter::format_number;
use crate::engine::input::parse_number;
use crate::engine::temperature::{self, Scale};
use serde::Serialize;
use std::fmt;

/// Outcome of converting user input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conversion {
    /// Converted value and its display form
    Value { value: f64, display: String },
    /// Input was empty or not a finite number
    InvalidInput,
}

impl Conversion {
    pub fn value(&self) -> Option<f64> {
        match self {
            Conversion::Value { value, .. } => Some(*value),
            Conversion::InvalidInput => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Conversion::Value { .. })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Value { display, .. } => f.write_str(display),
            Conversion::InvalidInput => f.write_str(INVALID_NUMBER_MESSAGE),
        }
    }
}

pub(crate) fn lookup(category: Category, id: &str) -> Result<&'static Unit, ConversionError> {
    find_unit(category, id).ok_or_else(|| ConversionError::UnknownUnit {
        category: category.id().to_string(),
        unit: id.to_string(),
    })
}

/// Convert a number between two units of the same category
pub fn convert_value(
    category: Category,
    source_id: &str,
    target_id: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let source = lookup(category, source_id)?;
    let target = lookup(category, target_id)?;

    // Same unit returns the input bit-for-bit, skipping the factor round trip
    if source.id == target.id {
        return Ok(value);
    }

    if category.is_affine() {
        let scale = |u: &Unit| {
            Scale::from_id(u.id).ok_or_else(|| ConversionError::UnknownUnit {
                category: category.id().to_string(),
                unit: u.id.to_string(),
            })
        };
        return Ok(temperature::convert(value, scale(source)?, scale(target)?));
    }

    // Through the base unit: divide out the source, multiply in the target
    let base_value = value / source.factor;
    Ok(base_value * target.factor)
}

/// Convert raw user input.
///
/// Returns `None` when either unit is not part of `category`; callers keep
/// whatever they displayed before. Input that is not a finite number yields
/// `Conversion::InvalidInput`.
pub fn convert(
    category: Category,
    source_id: &str,
    target_id: &str,
    raw_input: &str,
) -> Option<Conversion> {
    let value = match parse_number(raw_input) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(input = raw_input, "rejected input: {}", e);
            return Some(Conversion::InvalidInput);
        }
    };

    match convert_value(category, source_id, target_id, value) {
        Ok(result) => {
            tracing::debug!(
                %category,
                source = source_id,
                target = target_id,
                value,
                result,
                "converted"
            );
            Some(Conversion::Value {
                value: result,
                display: format_number(result),
            })
        }
        Err(e) => {
            tracing::warn!("conversion skipped: {}", e);
            None
        }
    }
}
