//! Shared application service layer for the turbulence inlet calculator.
//!
//! Turns case files into calculation requests, runs the resolver and
//! calculator pipeline, and renders the results for display.

pub mod case_service;
pub mod compile;
pub mod error;
pub mod format;
pub mod report;
pub mod service;

// Re-export key types for convenience
pub use case_service::{
    apply_fluid_overrides, calculate_case, load_case, read_case, save_case, validate_case,
};
pub use compile::{build_flow, build_fluid, build_generator, build_geometry, build_request};
pub use error::{AppError, AppResult};
pub use format::{format_general, format_intensity, format_reported};
pub use report::render_report;
pub use service::{
    CalculateRequest, CalculateResponse, InflowRequest, ResultRecord, calculate,
};
