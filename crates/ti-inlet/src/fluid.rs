//! Fluid properties supplied once per calculation.

use crate::error::InletResult;
use ti_core::numeric::ensure_positive;
use ti_core::units::{Density, DynVisc, KinVisc, kgpm3, m2ps, pas};

/// Air at sea level, 15 °C.
pub const AIR_DENSITY_KGPM3: f64 = 1.225;
pub const AIR_VISCOSITY_PAS: f64 = 1.81e-5;

/// Density and dynamic viscosity, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    density: Density,
    viscosity: DynVisc,
}

impl FluidProperties {
    pub fn new(density: Density, viscosity: DynVisc) -> InletResult<Self> {
        ensure_positive(density.value, "density")?;
        ensure_positive(viscosity.value, "dynamic viscosity")?;
        Ok(Self { density, viscosity })
    }

    pub fn air() -> Self {
        Self {
            density: kgpm3(AIR_DENSITY_KGPM3),
            viscosity: pas(AIR_VISCOSITY_PAS),
        }
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn viscosity(&self) -> DynVisc {
        self.viscosity
    }

    /// ν = μ/ρ
    pub fn kinematic_viscosity(&self) -> KinVisc {
        m2ps(self.viscosity.value / self.density.value)
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InletError;

    #[test]
    fn rejects_non_positive() {
        let err = FluidProperties::new(kgpm3(0.0), pas(1e-3)).unwrap_err();
        assert!(matches!(err, InletError::InvalidInput { what: "density", .. }));

        let err = FluidProperties::new(kgpm3(1000.0), pas(-1e-3)).unwrap_err();
        assert!(matches!(
            err,
            InletError::InvalidInput {
                what: "dynamic viscosity",
                ..
            }
        ));
    }

    #[test]
    fn air_kinematic_viscosity() {
        let nu = FluidProperties::air().kinematic_viscosity().value;
        assert!((nu - 1.81e-5 / 1.225).abs() < 1e-18);
    }
}
