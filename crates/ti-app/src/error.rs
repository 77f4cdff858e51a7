//! Error types for the ti-app service layer.

use std::path::PathBuf;

use ti_case::{CaseError, InputError, ValidationError};
use ti_inlet::InletError;
use ti_turbulence::TurbulenceError;

/// Application error type that wraps errors from the backend crates and
/// provides a single error surface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(String),

    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write case file: {path}")]
    CaseFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Undefined area: {0}")]
    UndefinedArea(String),

    #[error("Calculation error: {0}")]
    Calculation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ti-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidValue { .. } => AppError::InvalidInput(err.to_string()),
            ValidationError::InvalidGeometry => AppError::InvalidGeometry(err.to_string()),
            ValidationError::UndefinedArea => AppError::UndefinedArea(err.to_string()),
            _ => AppError::Case(err.to_string()),
        }
    }
}

impl From<CaseError> for AppError {
    fn from(err: CaseError) -> Self {
        match err {
            CaseError::Validation(v) => v.into(),
            CaseError::Io(e) => AppError::Io(e),
            other => AppError::Case(other.to_string()),
        }
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<InletError> for AppError {
    fn from(err: InletError) -> Self {
        match err {
            InletError::InvalidInput { .. } => AppError::InvalidInput(err.to_string()),
            InletError::InvalidGeometry { .. } => AppError::InvalidGeometry(err.to_string()),
            InletError::UndefinedArea { .. } => AppError::UndefinedArea(err.to_string()),
        }
    }
}

impl From<TurbulenceError> for AppError {
    fn from(err: TurbulenceError) -> Self {
        match err {
            TurbulenceError::UnknownChoice { .. } => AppError::InvalidInput(err.to_string()),
            _ => AppError::Calculation(err.to_string()),
        }
    }
}
