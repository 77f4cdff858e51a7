//! ti-turbulence: turbulence boundary-condition calculator.
//!
//! Given resolved inlet scalars (or a reference velocity for external
//! flows) this crate computes Reynolds number, intensity, length scale,
//! k, ω, ε, eddy-viscosity ratio and the Spalart-Allmaras ν̃, and decides
//! which of them a given turbulence model should be fed.

pub mod calculator;
pub mod dirichlet;
pub mod error;
pub mod model;
pub mod selection;

pub use calculator::{
    C_MU, Inflow, InternalInflow, LAMINAR_REYNOLDS, TurbulenceResult, compute, pipe_intensity,
};
pub use dirichlet::{DirichletValues, dirichlet_values, nu_tilda, viscosity_ratio_from_nu_tilda};
pub use error::{CalcResult, TurbulenceError};
pub use model::{Application, ExternalPreset, FlowRegime, TurbulenceModel};
pub use selection::{Quantity, Reported, Selection, flow_properties, select};
