use thiserror::Error;

/// Shown in place of a result when the input is not a usable number
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: String, unit: String },

    #[error("Please enter a valid number")]
    InvalidNumber,
}
