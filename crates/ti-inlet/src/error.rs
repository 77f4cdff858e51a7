//! Error types for inlet resolution.

use ti_core::error::TiError;
use thiserror::Error;

/// Errors that abort an inlet resolution. No partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InletError {
    #[error("Invalid input for {what}: must be a positive number (got {value})")]
    InvalidInput { what: &'static str, value: f64 },

    #[error("Outer diameter must be greater than inner diameter (inner={inner} m, outer={outer} m)")]
    InvalidGeometry { inner: f64, outer: f64 },

    #[error("Undefined area: {flow} cannot be used with a {geometry} inlet, only velocity can be specified")]
    UndefinedArea {
        flow: &'static str,
        geometry: &'static str,
    },
}

pub type InletResult<T> = Result<T, InletError>;

impl From<TiError> for InletError {
    fn from(e: TiError) -> Self {
        match e {
            TiError::NonFinite { what, value } | TiError::NonPositive { what, value } => {
                InletError::InvalidInput { what, value }
            }
        }
    }
}
