//! Full internal-flow inlet: geometry, flow and turbulence source together.

use crate::error::{InletError, InletResult};
use crate::flow::{FlowSpec, resolve_velocity};
use crate::fluid::FluidProperties;
use crate::generator::{TurbulenceGenerator, resolve_length_scale};
use crate::geometry::{Geometry, Section};
use ti_core::units::{Length, Velocity};

/// A checked inlet description.
///
/// Construction rejects inverted annuli and flow rates on sections
/// without an area, so a constructed `InletSpec` only fails to resolve
/// on fluid properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletSpec {
    geometry: Geometry,
    flow: FlowSpec,
    generator: TurbulenceGenerator,
}

/// Everything the turbulence calculator needs from the inlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInlet {
    pub section: Section,
    /// Bulk velocity U.
    pub velocity: Velocity,
    /// Turbulence length scale l.
    pub length_scale: Length,
    /// δ99 when it was estimated from Dh.
    pub estimated_thickness: Option<Length>,
}

impl InletSpec {
    pub fn new(
        geometry: Geometry,
        flow: FlowSpec,
        generator: TurbulenceGenerator,
    ) -> InletResult<Self> {
        geometry.validate()?;
        flow.validate()?;
        if flow.needs_area() && !geometry.has_area() {
            return Err(InletError::UndefinedArea {
                flow: flow.label(),
                geometry: geometry.label(),
            });
        }
        Ok(Self {
            geometry,
            flow,
            generator,
        })
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn flow(&self) -> &FlowSpec {
        &self.flow
    }

    pub fn generator(&self) -> &TurbulenceGenerator {
        &self.generator
    }

    /// Geometry → velocity → length scale.
    pub fn resolve(&self, fluid: &FluidProperties) -> InletResult<ResolvedInlet> {
        let section = self.geometry.resolve()?;
        let velocity = resolve_velocity(&self.flow, fluid.density(), section.area)?;
        let length_scale = resolve_length_scale(&self.generator, section.hydraulic_diameter)?;
        let estimated_thickness = self
            .generator
            .estimated_thickness(section.hydraulic_diameter);

        Ok(ResolvedInlet {
            section,
            velocity,
            length_scale,
            estimated_thickness,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::BoundaryLayerThickness;
    use ti_core::units::{kgps, m, mps};

    #[test]
    fn channel_with_mass_flow_rejected_at_construction() {
        let err = InletSpec::new(
            Geometry::Channel2D { height: m(1.0) },
            FlowSpec::MassFlowRate(kgps(1.0)),
            TurbulenceGenerator::CrossSection,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InletError::UndefinedArea {
                flow: "Mass Flow Rate",
                geometry: "2D Channel",
            }
        );
    }

    #[test]
    fn inverted_annulus_rejected_at_construction() {
        let err = InletSpec::new(
            Geometry::Annular {
                inner: m(1.0),
                outer: m(0.5),
            },
            FlowSpec::Velocity(mps(10.0)),
            TurbulenceGenerator::CrossSection,
        )
        .unwrap_err();
        assert!(matches!(err, InletError::InvalidGeometry { .. }));
    }

    #[test]
    fn channel_with_estimated_boundary_layer() {
        let inlet = InletSpec::new(
            Geometry::Channel2D { height: m(0.5) },
            FlowSpec::Velocity(mps(3.0)),
            TurbulenceGenerator::BoundaryLayer(BoundaryLayerThickness::Estimated),
        )
        .unwrap();
        let r = inlet.resolve(&FluidProperties::air()).unwrap();
        assert_eq!(r.section.hydraulic_diameter.value, 1.0);
        assert_eq!(r.velocity.value, 3.0);
        assert!((r.length_scale.value - 0.2).abs() < 1e-15);
        assert_eq!(r.estimated_thickness, Some(m(0.5)));
    }
}
