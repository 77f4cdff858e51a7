//! Turbulence generator resolver: length scale from the source of turbulence.

use crate::error::InletResult;
use ti_core::numeric::ensure_positive;
use ti_core::units::{Length, m};

/// l = 0.07·Dh for turbulence generated by the cross-section itself.
pub const CROSS_SECTION_FACTOR: f64 = 0.07;

/// l = 0.4·δ99 for turbulence generated by a boundary layer.
pub const BOUNDARY_LAYER_FACTOR: f64 = 0.4;

/// Boundary-layer thickness source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryLayerThickness {
    /// Fully developed flow: δ99 = Dh/2.
    Estimated,
    Specified(Length),
}

impl BoundaryLayerThickness {
    pub fn delta_99(&self, hydraulic_diameter: Length) -> InletResult<Length> {
        match *self {
            BoundaryLayerThickness::Estimated => {
                let dh = ensure_positive(hydraulic_diameter.value, "hydraulic diameter")?;
                Ok(m(dh / 2.0))
            }
            BoundaryLayerThickness::Specified(delta) => {
                ensure_positive(delta.value, "boundary layer thickness")?;
                Ok(delta)
            }
        }
    }
}

/// Primary source of inlet turbulence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurbulenceGenerator {
    CrossSection,
    BoundaryLayer(BoundaryLayerThickness),
    /// Explicit eddy size, e.g. perforation pitch.
    CharacteristicLength(Length),
}

impl TurbulenceGenerator {
    pub fn label(&self) -> &'static str {
        match self {
            TurbulenceGenerator::CrossSection => "Cross-section based (Standard)",
            TurbulenceGenerator::BoundaryLayer(_) => "Boundary Layer Thickness",
            TurbulenceGenerator::CharacteristicLength(_) => "Characteristic Length",
        }
    }

    /// δ99 when the length scale comes from an estimated boundary layer.
    pub fn estimated_thickness(&self, hydraulic_diameter: Length) -> Option<Length> {
        match self {
            TurbulenceGenerator::BoundaryLayer(t @ BoundaryLayerThickness::Estimated) => {
                t.delta_99(hydraulic_diameter).ok()
            }
            _ => None,
        }
    }
}

pub fn resolve_length_scale(
    generator: &TurbulenceGenerator,
    hydraulic_diameter: Length,
) -> InletResult<Length> {
    let l = match *generator {
        TurbulenceGenerator::CrossSection => {
            let dh = ensure_positive(hydraulic_diameter.value, "hydraulic diameter")?;
            CROSS_SECTION_FACTOR * dh
        }
        TurbulenceGenerator::BoundaryLayer(thickness) => {
            BOUNDARY_LAYER_FACTOR * thickness.delta_99(hydraulic_diameter)?.value
        }
        TurbulenceGenerator::CharacteristicLength(len) => {
            ensure_positive(len.value, "characteristic length")?
        }
    };
    Ok(m(l))
}
