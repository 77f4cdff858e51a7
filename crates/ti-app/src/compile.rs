//! Case definition → typed calculation request.

use ti_case::{CaseDef, FlowDef, FluidDef, GeneratorDef, GeometryDef};
use ti_core::units::{kgpm3, kgps, m, m2, m3ps, mps, pas};
use ti_inlet::{
    BoundaryLayerThickness, FlowSpec, FluidProperties, Geometry, InletSpec, TurbulenceGenerator,
};

use crate::error::{AppError, AppResult};
use crate::service::{CalculateRequest, InflowRequest};

pub fn build_fluid(def: &FluidDef) -> AppResult<FluidProperties> {
    Ok(FluidProperties::new(
        kgpm3(def.density_kg_m3),
        pas(def.viscosity_pa_s),
    )?)
}

pub fn build_geometry(def: &GeometryDef) -> Geometry {
    match *def {
        GeometryDef::Circular { diameter_m } => Geometry::Circular {
            diameter: m(diameter_m),
        },
        GeometryDef::Annular {
            inner_diameter_m,
            outer_diameter_m,
        } => Geometry::Annular {
            inner: m(inner_diameter_m),
            outer: m(outer_diameter_m),
        },
        GeometryDef::Square { side_m } => Geometry::Square { side: m(side_m) },
        GeometryDef::Rectangular { width_m, height_m } => Geometry::Rectangular {
            width: m(width_m),
            height: m(height_m),
        },
        GeometryDef::Channel2D { height_m } => Geometry::Channel2D {
            height: m(height_m),
        },
        GeometryDef::AreaPerimeter {
            area_m2,
            perimeter_m,
        } => Geometry::AreaPerimeter {
            area: m2(area_m2),
            perimeter: m(perimeter_m),
        },
        GeometryDef::HydraulicDiameter {
            hydraulic_diameter_m,
        } => Geometry::HydraulicDiameter {
            diameter: m(hydraulic_diameter_m),
        },
    }
}

pub fn build_flow(def: &FlowDef) -> FlowSpec {
    match *def {
        FlowDef::Velocity { velocity_m_s } => FlowSpec::Velocity(mps(velocity_m_s)),
        FlowDef::MassFlowRate { mass_flow_kg_s } => FlowSpec::MassFlowRate(kgps(mass_flow_kg_s)),
        FlowDef::VolumeFlowRate { volume_flow_m3_s } => {
            FlowSpec::VolumeFlowRate(m3ps(volume_flow_m3_s))
        }
    }
}

pub fn build_generator(def: &GeneratorDef) -> TurbulenceGenerator {
    match *def {
        GeneratorDef::CrossSection => TurbulenceGenerator::CrossSection,
        GeneratorDef::BoundaryLayer { thickness_m: None } => {
            TurbulenceGenerator::BoundaryLayer(BoundaryLayerThickness::Estimated)
        }
        GeneratorDef::BoundaryLayer {
            thickness_m: Some(t),
        } => TurbulenceGenerator::BoundaryLayer(BoundaryLayerThickness::Specified(m(t))),
        GeneratorDef::CharacteristicLength { length_m } => {
            TurbulenceGenerator::CharacteristicLength(m(length_m))
        }
    }
}

/// Build a checked request from a case definition.
pub fn build_request(case: &CaseDef) -> AppResult<CalculateRequest> {
    let fluid = build_fluid(&case.fluid)?;

    let inflow = if case.application.regime().is_internal() {
        let inlet = case.inlet.as_ref().ok_or_else(|| {
            AppError::InvalidInput(format!(
                "{} requires inlet geometry and flow",
                case.application
            ))
        })?;
        InflowRequest::Internal(InletSpec::new(
            build_geometry(&inlet.geometry),
            build_flow(&inlet.flow),
            build_generator(&inlet.generator),
        )?)
    } else {
        InflowRequest::External {
            reference_velocity: case.reference_velocity_m_s.map(mps),
        }
    };

    Ok(CalculateRequest {
        model: case.model,
        application: case.application,
        fluid,
        inflow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ti_turbulence::{Application, TurbulenceModel};

    #[test]
    fn internal_template_compiles() {
        let case = CaseDef::template(TurbulenceModel::KOmega, Application::WallBounded);
        let request = build_request(&case).unwrap();
        match request.inflow {
            InflowRequest::Internal(inlet) => {
                assert_eq!(*inlet.geometry(), Geometry::Circular { diameter: m(1.0) });
                assert_eq!(*inlet.flow(), FlowSpec::Velocity(mps(10.0)));
            }
            InflowRequest::External { .. } => panic!("expected internal inflow"),
        }
    }

    #[test]
    fn external_template_compiles() {
        let case = CaseDef::template(TurbulenceModel::KEpsilon, Application::ExternalAero);
        let request = build_request(&case).unwrap();
        assert_eq!(
            request.inflow,
            InflowRequest::External {
                reference_velocity: Some(mps(10.0))
            }
        );
    }

    #[test]
    fn estimated_boundary_layer() {
        assert_eq!(
            build_generator(&GeneratorDef::BoundaryLayer { thickness_m: None }),
            TurbulenceGenerator::BoundaryLayer(BoundaryLayerThickness::Estimated)
        );
    }
}
