//! ti-core: shared foundation for the turbulence inlet calculator.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (finite / positive input checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TiError, TiResult};
pub use numeric::*;
pub use units::*;
