//! Direct (Dirichlet) values back-calculated from intensity and
//! viscosity ratio, plus the Spalart-Allmaras ν̃ conversion.

use crate::calculator::C_MU;
use ti_core::units::{KinVisc, Velocity, m2ps};
use ti_inlet::FluidProperties;

/// k, μt, ω, ε for a velocity, intensity and viscosity ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletValues {
    /// m²/s²
    pub k: f64,
    /// Eddy viscosity μt, Pa·s
    pub eddy_viscosity: f64,
    /// 1/s. `+inf` when μt ≤ 0.
    pub omega: f64,
    /// m²/s³
    pub epsilon: f64,
}

pub fn dirichlet_values(
    fluid: &FluidProperties,
    velocity: Velocity,
    intensity: f64,
    viscosity_ratio: f64,
) -> DirichletValues {
    let k = 1.5 * (velocity.value * intensity).powi(2);
    let mu_t = viscosity_ratio * fluid.viscosity().value;
    let omega = if mu_t > 0.0 {
        fluid.density().value * k / mu_t
    } else {
        f64::INFINITY
    };

    DirichletValues {
        k,
        eddy_viscosity: mu_t,
        omega,
        epsilon: C_MU * k * omega,
    }
}

/// ν̃ = (μt/μ)·ν
pub fn nu_tilda(fluid: &FluidProperties, viscosity_ratio: f64) -> KinVisc {
    m2ps(viscosity_ratio * fluid.kinematic_viscosity().value)
}

/// Inverse of [`nu_tilda`].
pub fn viscosity_ratio_from_nu_tilda(fluid: &FluidProperties, nu_tilda: KinVisc) -> f64 {
    nu_tilda.value / fluid.kinematic_viscosity().value
}
