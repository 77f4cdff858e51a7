use thiserror::Error;

pub type TiResult<T> = Result<T, TiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TiError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
