//! Parsing of free-text numeric fields.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid numeric input for '{label}'. Please enter a number like 0.01 or 1e-2.")]
    NotANumber { label: String },

    #[error("Input for '{label}' must be a positive number. You entered: {value}")]
    NotPositive { label: String, value: f64 },
}

/// Parse `text` as a strictly positive float.
pub fn parse_positive(label: &str, text: &str) -> Result<f64, InputError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber {
            label: label.to_string(),
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(InputError::NotPositive {
            label: label.to_string(),
            value,
        });
    }
    Ok(value)
}
