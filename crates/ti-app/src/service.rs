//! Calculation service: request in, response out.

use serde::Serialize;
use tracing::{debug, info, warn};

use ti_core::units::Velocity;
use ti_inlet::{FluidProperties, InletSpec, ResolvedInlet};
use ti_turbulence::{
    Application, Inflow, InternalInflow, LAMINAR_REYNOLDS, Reported, Selection, TurbulenceModel,
    TurbulenceResult, compute, flow_properties, select,
};

use crate::error::{AppError, AppResult};
use crate::format::format_general;

pub const EXTERNAL_NOTE: &str =
    "For external or general cases, turbulence levels are estimated based on typical scenarios.";
pub const DEGENERATE_NOTE: &str =
    "Turbulent kinetic energy or length scale is not positive; viscosity ratio falls back to 1.0.";
pub const INFINITE_OMEGA_NOTE: &str =
    "Eddy viscosity is zero; specific dissipation is reported as infinite.";
pub const IGNORED_INLET_NOTE: &str =
    "Inlet geometry does not apply to this application and was ignored.";
pub const IGNORED_REFERENCE_NOTE: &str =
    "Reference velocity does not apply to internal flows and was ignored.";

/// How the inflow is described for the selected application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InflowRequest {
    Internal(InletSpec),
    External { reference_velocity: Option<Velocity> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculateRequest {
    pub model: TurbulenceModel,
    pub application: Application,
    pub fluid: FluidProperties,
    pub inflow: InflowRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculateResponse {
    /// Present for internal flows.
    pub inlet: Option<ResolvedInlet>,
    pub result: TurbulenceResult,
    pub selection: Selection,
    pub flow_properties: Vec<Reported>,
    /// Caveats and advisories for the user.
    pub notes: Vec<String>,
}

/// Flat, serialisable view of a response. All values in SI units.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultRecord {
    pub model: TurbulenceModel,
    pub application: Application,
    pub hydraulic_diameter_m: Option<f64>,
    pub area_m2: Option<f64>,
    pub velocity_m_s: Option<f64>,
    pub reynolds: Option<f64>,
    pub intensity: Option<f64>,
    pub length_scale_m: Option<f64>,
    /// δ99 estimated for fully developed flow.
    pub estimated_thickness_m: Option<f64>,
    pub k: Option<f64>,
    /// `null` in JSON when infinite.
    pub omega: Option<f64>,
    pub epsilon: Option<f64>,
    pub viscosity_ratio: f64,
    pub nu_tilda: Option<f64>,
    pub degenerate: bool,
    /// Keys of the recommended boundary conditions, e.g. `intensity`.
    pub recommended: Vec<&'static str>,
    pub notes: Vec<String>,
}

impl CalculateResponse {
    pub fn record(&self) -> ResultRecord {
        let r = &self.result;
        ResultRecord {
            model: r.model,
            application: r.application,
            hydraulic_diameter_m: r.hydraulic_diameter.map(|d| d.value),
            area_m2: self
                .inlet
                .and_then(|i| i.section.area)
                .map(|a| a.value),
            velocity_m_s: r.velocity.map(|u| u.value),
            reynolds: r.reynolds,
            intensity: r.intensity,
            length_scale_m: r.length_scale.map(|l| l.value),
            estimated_thickness_m: self
                .inlet
                .and_then(|i| i.estimated_thickness)
                .map(|d| d.value),
            k: r.k,
            omega: r.omega,
            epsilon: r.epsilon,
            viscosity_ratio: r.viscosity_ratio,
            nu_tilda: r.nu_tilda.map(|nu| nu.value),
            degenerate: r.degenerate,
            recommended: self
                .selection
                .primary
                .iter()
                .map(|p| p.quantity.key())
                .collect(),
            notes: self.notes.clone(),
        }
    }
}

impl ResultRecord {
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

/// Run the full pipeline for one request.
pub fn calculate(request: &CalculateRequest) -> AppResult<CalculateResponse> {
    info!(
        model = %request.model,
        application = %request.application,
        "calculating turbulence properties"
    );

    let mut notes = Vec::new();
    let internal = request.application.regime().is_internal();
    let (inflow, inlet) = match &request.inflow {
        InflowRequest::Internal(spec) if !internal => {
            let resolved = spec.resolve(&request.fluid)?;
            debug!(
                velocity_m_s = resolved.velocity.value,
                "external application, using inlet velocity only"
            );
            notes.push(EXTERNAL_NOTE.to_string());
            notes.push(IGNORED_INLET_NOTE.to_string());
            (Inflow::Internal(InternalInflow::from(&resolved)), None)
        }
        InflowRequest::Internal(spec) => {
            let resolved = spec.resolve(&request.fluid)?;
            debug!(
                geometry = spec.geometry().label(),
                generator = spec.generator().label(),
                hydraulic_diameter_m = resolved.section.hydraulic_diameter.value,
                area_m2 = ?resolved.section.area.map(|a| a.value),
                velocity_m_s = resolved.velocity.value,
                length_scale_m = resolved.length_scale.value,
                "resolved inlet"
            );
            if let Some(caveat) = spec.geometry().caveat() {
                notes.push(caveat.to_string());
            }
            if let Some(delta) = resolved.estimated_thickness {
                notes.push(format!(
                    "Estimated δ for fully developed flow: {} m",
                    format_general(delta.value)
                ));
            }
            (
                Inflow::Internal(InternalInflow::from(&resolved)),
                Some(resolved),
            )
        }
        InflowRequest::External { reference_velocity } => {
            notes.push(EXTERNAL_NOTE.to_string());
            (
                Inflow::External {
                    reference_velocity: *reference_velocity,
                },
                None,
            )
        }
    };

    let result = compute(request.model, request.application, &request.fluid, &inflow)?;

    if result.degenerate {
        warn!("degenerate turbulence state, using viscosity ratio 1.0");
        notes.push(DEGENERATE_NOTE.to_string());
    }
    if let Some(re) = result.reynolds
        && re < LAMINAR_REYNOLDS
    {
        warn!(reynolds = re, "Reynolds number below turbulent pipe-flow range");
        notes.push(format!(
            "Re = {} is below {}; the intensity correlation assumes fully turbulent flow.",
            format_general(re),
            LAMINAR_REYNOLDS
        ));
    }
    if result.omega.is_some_and(f64::is_infinite) {
        warn!("zero eddy viscosity, omega is infinite");
        notes.push(INFINITE_OMEGA_NOTE.to_string());
    }

    Ok(CalculateResponse {
        inlet,
        selection: select(&result),
        flow_properties: flow_properties(&result),
        result,
        notes,
    })
}
