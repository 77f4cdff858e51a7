//! Errors raised by the turbulence calculator.

use crate::model::{Application, TurbulenceModel};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TurbulenceError {
    #[error("{model} needs a reference velocity to compute Dirichlet values")]
    MissingReferenceVelocity { model: TurbulenceModel },

    #[error("{application} is an internal flow and needs inlet geometry and flow data")]
    MissingInlet { application: Application },

    #[error("Unknown {what}: '{value}'")]
    UnknownChoice { what: &'static str, value: String },
}

pub type CalcResult<T> = Result<T, TurbulenceError>;
