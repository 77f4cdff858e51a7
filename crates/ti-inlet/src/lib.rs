//! ti-inlet: resolvers that turn a physical inlet description into the
//! scalars the turbulence calculator needs.
//!
//! Provides:
//! - Geometry resolution (hydraulic diameter and cross-sectional area)
//! - Bulk velocity from velocity, mass flow or volume flow
//! - Turbulence length scale from the chosen generation mechanism
//!
//! Every resolver is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use ti_core::units::{m, mps};
//! use ti_inlet::{FlowSpec, FluidProperties, Geometry, InletSpec, TurbulenceGenerator};
//!
//! let inlet = InletSpec::new(
//!     Geometry::Circular { diameter: m(0.1) },
//!     FlowSpec::Velocity(mps(5.0)),
//!     TurbulenceGenerator::CrossSection,
//! )
//! .unwrap();
//!
//! let resolved = inlet.resolve(&FluidProperties::air()).unwrap();
//! assert!((resolved.length_scale.value - 0.007).abs() < 1e-12);
//! ```

pub mod error;
pub mod flow;
pub mod fluid;
pub mod generator;
pub mod geometry;
pub mod inlet;

// Re-exports
pub use error::{InletError, InletResult};
pub use flow::{FlowSpec, resolve_velocity};
pub use fluid::FluidProperties;
pub use generator::{BoundaryLayerThickness, TurbulenceGenerator, resolve_length_scale};
pub use geometry::{Geometry, Section, resolve_geometry};
pub use inlet::{InletSpec, ResolvedInlet};
