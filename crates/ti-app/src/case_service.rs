//! Case loading, saving, validation and execution.

use std::path::Path;

use tracing::debug;

use ti_case::{CaseDef, CaseFormat, parse_positive};

use crate::compile::build_request;
use crate::error::{AppError, AppResult};
use crate::service::{
    CalculateResponse, IGNORED_INLET_NOTE, IGNORED_REFERENCE_NOTE, calculate,
};

/// Read a case file without validating it, so overrides can be applied
/// before [`validate_case`] runs.
pub fn read_case(path: &Path) -> AppResult<CaseDef> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(ti_case::parse_str(&content, CaseFormat::from_path(path))?)
}

/// Load and validate a case from a YAML or JSON file.
pub fn load_case(path: &Path) -> AppResult<CaseDef> {
    let case = read_case(path)?;
    validate_case(&case)?;
    Ok(case)
}

/// Save a case to a YAML or JSON file.
pub fn save_case(path: &Path, case: &CaseDef) -> AppResult<()> {
    let content = ti_case::to_string(case, CaseFormat::from_path(path))?;

    std::fs::write(path, content).map_err(|e| AppError::CaseFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

pub fn validate_case(case: &CaseDef) -> AppResult<()> {
    ti_case::validate_case(case)?;
    Ok(())
}

/// Replace fluid properties with values typed by the user.
pub fn apply_fluid_overrides(
    case: &mut CaseDef,
    density: Option<&str>,
    viscosity: Option<&str>,
) -> AppResult<()> {
    if let Some(text) = density {
        case.fluid.density_kg_m3 = parse_positive("Density (ρ) in kg/m³", text)?;
    }
    if let Some(text) = viscosity {
        case.fluid.viscosity_pa_s = parse_positive("Dynamic Viscosity (μ) in Pa-s", text)?;
    }
    Ok(())
}

/// Validate, compile and run a case.
pub fn calculate_case(case: &CaseDef) -> AppResult<CalculateResponse> {
    validate_case(case)?;
    let request = build_request(case)?;
    let mut response = calculate(&request)?;

    let internal = case.application.regime().is_internal();
    if !internal && case.inlet.is_some() {
        debug!(application = %case.application, "inlet data ignored");
        response.notes.push(IGNORED_INLET_NOTE.to_string());
    }
    if internal && case.reference_velocity_m_s.is_some() {
        debug!(application = %case.application, "reference velocity ignored");
        response.notes.push(IGNORED_REFERENCE_NOTE.to_string());
    }
    Ok(response)
}
