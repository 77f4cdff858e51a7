//! Case validation logic.

use crate::schema::{CaseDef, FlowDef, GeneratorDef, GeometryDef, InletDef, LATEST_VERSION};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: f64,
        reason: String,
    },

    #[error("Missing field: {field} ({reason})")]
    MissingField { field: String, reason: String },

    #[error("Invalid geometry: outer diameter must be greater than inner diameter")]
    InvalidGeometry,

    #[error("Undefined area: only velocity can be specified for a 2D channel")]
    UndefinedArea,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value,
            reason: "must be a positive number".to_string(),
        })
    }
}

pub fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    positive("fluid.density_kg_m3", case.fluid.density_kg_m3)?;
    positive("fluid.viscosity_pa_s", case.fluid.viscosity_pa_s)?;

    let internal = case.application.regime().is_internal();
    match (&case.inlet, internal) {
        (Some(inlet), true) => validate_inlet(inlet)?,
        (None, true) => {
            return Err(ValidationError::MissingField {
                field: "inlet".to_string(),
                reason: format!("{} requires inlet geometry and flow", case.application),
            });
        }
        // Fixed turbulence levels; an inlet left over from another
        // application is not read.
        (_, false) => {}
    }

    match case.reference_velocity_m_s {
        // Internal flows take their velocity from the inlet.
        Some(_) if internal => {}
        Some(u) => positive("reference_velocity_m_s", u)?,
        None if !internal && case.model.is_two_equation() => {
            return Err(ValidationError::MissingField {
                field: "reference_velocity_m_s".to_string(),
                reason: format!("{} needs a reference velocity", case.model),
            });
        }
        None => {}
    }

    Ok(())
}

fn validate_inlet(inlet: &InletDef) -> Result<(), ValidationError> {
    for (field, value) in inlet.geometry.fields() {
        positive(&format!("inlet.geometry.{field}"), value)?;
    }
    if let GeometryDef::Annular {
        inner_diameter_m,
        outer_diameter_m,
    } = inlet.geometry
        && outer_diameter_m <= inner_diameter_m
    {
        return Err(ValidationError::InvalidGeometry);
    }

    let (field, value) = inlet.flow.field();
    positive(&format!("inlet.flow.{field}"), value)?;
    if matches!(inlet.geometry, GeometryDef::Channel2D { .. })
        && !matches!(inlet.flow, FlowDef::Velocity { .. })
    {
        return Err(ValidationError::UndefinedArea);
    }

    match inlet.generator {
        GeneratorDef::CrossSection | GeneratorDef::BoundaryLayer { thickness_m: None } => {}
        GeneratorDef::BoundaryLayer {
            thickness_m: Some(t),
        } => positive("inlet.generator.thickness_m", t)?,
        GeneratorDef::CharacteristicLength { length_m } => {
            positive("inlet.generator.length_m", length_m)?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ti_turbulence::{Application, TurbulenceModel};

    fn pipe_case() -> CaseDef {
        CaseDef::template(TurbulenceModel::KOmega, Application::WallBounded)
    }

    #[test]
    fn templates_are_valid() {
        for model in TurbulenceModel::ALL {
            for app in Application::ALL {
                validate_case(&CaseDef::template(model, app)).unwrap();
            }
        }
    }

    #[test]
    fn rejects_negative_density() {
        let mut case = pipe_case();
        case.fluid.density_kg_m3 = -1.0;
        let err = validate_case(&case).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "fluid.density_kg_m3"));
    }

    #[test]
    fn rejects_inverted_annulus() {
        let mut case = pipe_case();
        case.inlet.as_mut().unwrap().geometry = GeometryDef::Annular {
            inner_diameter_m: 1.0,
            outer_diameter_m: 0.5,
        };
        assert_eq!(validate_case(&case), Err(ValidationError::InvalidGeometry));
    }

    #[test]
    fn rejects_channel_mass_flow() {
        let mut case = pipe_case();
        let inlet = case.inlet.as_mut().unwrap();
        inlet.geometry = GeometryDef::Channel2D { height_m: 1.0 };
        inlet.flow = FlowDef::MassFlowRate {
            mass_flow_kg_s: 1.0,
        };
        assert_eq!(validate_case(&case), Err(ValidationError::UndefinedArea));
    }

    #[test]
    fn internal_case_needs_inlet() {
        let mut case = pipe_case();
        case.inlet = None;
        assert!(matches!(
            validate_case(&case),
            Err(ValidationError::MissingField { .. })
        ));
    }

    #[test]
    fn external_two_equation_needs_reference_velocity() {
        let mut case = CaseDef::template(TurbulenceModel::KEpsilon, Application::Unsure);
        case.reference_velocity_m_s = None;
        assert!(matches!(
            validate_case(&case),
            Err(ValidationError::MissingField { ref field, .. }) if field == "reference_velocity_m_s"
        ));

        let sa = CaseDef::template(TurbulenceModel::SpalartAllmaras, Application::Unsure);
        assert!(sa.reference_velocity_m_s.is_none());
        validate_case(&sa).unwrap();
    }

    #[test]
    fn fields_of_other_regime_are_ignored() {
        let mut case = pipe_case();
        case.application = Application::ExternalAero;
        case.reference_velocity_m_s = Some(10.0);
        if let Some(inlet) = case.inlet.as_mut() {
            inlet.geometry = GeometryDef::Annular {
                inner_diameter_m: 1.0,
                outer_diameter_m: 0.5,
            };
        }
        assert_eq!(validate_case(&case), Ok(()));

        case.application = Application::WallBounded;
        if let Some(inlet) = case.inlet.as_mut() {
            inlet.geometry = GeometryDef::Circular { diameter_m: 1.0 };
        }
        assert_eq!(validate_case(&case), Ok(()));
    }

    #[test]
    fn rejects_future_version() {
        let mut case = pipe_case();
        case.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_case(&case),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
