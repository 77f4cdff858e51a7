//! Turbulence property calculator.
//!
//! Internal flows (wall bounded, jets) derive intensity from the pipe-flow
//! correlation I = 0.16·Re^(-1/8) and the length scale from the inlet.
//! External and general flows use fixed intensity / viscosity-ratio pairs.

use crate::dirichlet::{dirichlet_values, nu_tilda};
use crate::error::{CalcResult, TurbulenceError};
use crate::model::{Application, ExternalPreset, FlowRegime, TurbulenceModel};
use ti_core::units::{KinVisc, Length, Velocity};
use ti_inlet::{FluidProperties, ResolvedInlet};

/// k-ε / k-ω closure constant.
pub const C_MU: f64 = 0.09;

/// Upper Reynolds number of laminar pipe flow.
pub const LAMINAR_REYNOLDS: f64 = 2300.0;

const INTENSITY_COEFF: f64 = 0.16;
const INTENSITY_EXPONENT: f64 = -0.125;

/// Scalars of a resolved internal-flow inlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalInflow {
    pub hydraulic_diameter: Length,
    pub velocity: Velocity,
    pub length_scale: Length,
}

impl From<&ResolvedInlet> for InternalInflow {
    fn from(r: &ResolvedInlet) -> Self {
        Self {
            hydraulic_diameter: r.section.hydraulic_diameter,
            velocity: r.velocity,
            length_scale: r.length_scale,
        }
    }
}

/// Calculator input besides the fluid and the choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inflow {
    Internal(InternalInflow),
    /// Reference velocity, needed by two-equation models only.
    External { reference_velocity: Option<Velocity> },
}

/// Computed turbulence quantities.
///
/// Which fields are populated depends on the model and application: the
/// internal branch fills Re, I and l; the external branch fills I and the
/// viscosity ratio; k/ω/ε need a velocity and a non-degenerate state;
/// ν̃ is only produced for Spalart-Allmaras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbulenceResult {
    pub model: TurbulenceModel,
    pub application: Application,
    pub regime: FlowRegime,
    pub reynolds: Option<f64>,
    pub intensity: Option<f64>,
    pub length_scale: Option<Length>,
    pub velocity: Option<Velocity>,
    pub hydraulic_diameter: Option<Length>,
    /// m²/s²
    pub k: Option<f64>,
    /// 1/s
    pub omega: Option<f64>,
    /// m²/s³
    pub epsilon: Option<f64>,
    /// μt/μ, always present.
    pub viscosity_ratio: f64,
    pub nu_tilda: Option<KinVisc>,
    /// Internal branch fell back to μt/μ = 1 because k or l was not positive.
    pub degenerate: bool,
}

/// I = 0.16·Re^(-1/8). `None` unless Re > 0.
pub fn pipe_intensity(reynolds: f64) -> Option<f64> {
    (reynolds > 0.0).then(|| INTENSITY_COEFF * reynolds.powf(INTENSITY_EXPONENT))
}

/// Compute turbulence quantities for one inlet.
///
/// External applications take the preset intensity and viscosity ratio
/// whatever inlet geometry is supplied. Fails when an internal application
/// has no inlet, or when a two-equation model is used on an external flow
/// without any velocity.
pub fn compute(
    model: TurbulenceModel,
    application: Application,
    fluid: &FluidProperties,
    inflow: &Inflow,
) -> CalcResult<TurbulenceResult> {
    let regime = application.regime();
    let mut result = match (regime, inflow) {
        (FlowRegime::Internal, Inflow::Internal(inlet)) => {
            internal(model, application, fluid, inlet)
        }
        (FlowRegime::Internal, Inflow::External { .. }) => {
            return Err(TurbulenceError::MissingInlet { application });
        }
        (FlowRegime::External(preset), inflow) => {
            // Presets fix I and μt/μ; only the velocity of an inlet is used.
            let reference_velocity = match inflow {
                Inflow::External { reference_velocity } => *reference_velocity,
                Inflow::Internal(inlet) => Some(inlet.velocity),
            };
            if model.is_two_equation() && reference_velocity.is_none() {
                return Err(TurbulenceError::MissingReferenceVelocity { model });
            }
            external(model, application, fluid, preset, reference_velocity)
        }
    };

    if model == TurbulenceModel::SpalartAllmaras {
        result.nu_tilda = Some(nu_tilda(fluid, result.viscosity_ratio));
    }
    Ok(result)
}

fn internal(
    model: TurbulenceModel,
    application: Application,
    fluid: &FluidProperties,
    inlet: &InternalInflow,
) -> TurbulenceResult {
    let rho = fluid.density().value;
    let mu = fluid.viscosity().value;
    let u = inlet.velocity.value;
    let l = inlet.length_scale.value;

    let reynolds = rho * u * inlet.hydraulic_diameter.value / mu;
    let intensity = pipe_intensity(reynolds);

    let mut result = TurbulenceResult {
        model,
        application,
        regime: FlowRegime::Internal,
        reynolds: Some(reynolds),
        intensity,
        length_scale: Some(inlet.length_scale),
        velocity: Some(inlet.velocity),
        hydraulic_diameter: Some(inlet.hydraulic_diameter),
        k: None,
        omega: None,
        epsilon: None,
        viscosity_ratio: 1.0,
        nu_tilda: None,
        degenerate: true,
    };

    let k = intensity.map(|i| 1.5 * (u * i).powi(2));
    if let Some(k) = k.filter(|&k| k > 0.0 && l > 0.0) {
        let omega = C_MU.powf(-0.25) * k.sqrt() / l;
        let mu_t = rho * k / omega;
        result.k = Some(k);
        result.omega = Some(omega);
        result.epsilon = Some(C_MU * k * omega);
        result.viscosity_ratio = mu_t / mu;
        result.degenerate = false;
    }
    result
}

fn external(
    model: TurbulenceModel,
    application: Application,
    fluid: &FluidProperties,
    preset: ExternalPreset,
    reference_velocity: Option<Velocity>,
) -> TurbulenceResult {
    let dirichlet = reference_velocity
        .map(|u| dirichlet_values(fluid, u, preset.intensity, preset.viscosity_ratio));

    TurbulenceResult {
        model,
        application,
        regime: FlowRegime::External(preset),
        reynolds: None,
        intensity: Some(preset.intensity),
        length_scale: None,
        velocity: reference_velocity,
        hydraulic_diameter: None,
        k: dirichlet.map(|d| d.k),
        omega: dirichlet.map(|d| d.omega),
        epsilon: dirichlet.map(|d| d.epsilon),
        viscosity_ratio: preset.viscosity_ratio,
        nu_tilda: None,
        degenerate: false,
    }
}
