//! Which computed quantities are recommended to the user for each model.

use std::fmt;

use crate::calculator::TurbulenceResult;
use crate::model::TurbulenceModel;

/// A reportable turbulence or flow quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    ViscosityRatio,
    NuTilda,
    Intensity,
    LengthScale,
    TurbulentKineticEnergy,
    Dissipation,
    SpecificDissipation,
    Reynolds,
    BulkVelocity,
    HydraulicDiameter,
}

impl Quantity {
    pub fn label(&self) -> &'static str {
        match self {
            Quantity::ViscosityRatio => "Turbulent Viscosity Ratio (μ_t / μ)",
            Quantity::NuTilda => "S-A Variable (ν̃)",
            Quantity::Intensity => "Turbulent Intensity (I)",
            Quantity::LengthScale => "Turbulent Length Scale (l)",
            Quantity::TurbulentKineticEnergy => "Turb. Kinetic Energy (k)",
            Quantity::Dissipation => "Dissipation Rate (ε)",
            Quantity::SpecificDissipation => "Specific Dissipation Rate (ω)",
            Quantity::Reynolds => "Reynolds Number (Re)",
            Quantity::BulkVelocity => "Bulk Velocity (U)",
            Quantity::HydraulicDiameter => "Hydraulic Diameter (Dh)",
        }
    }

    /// SI unit label, empty for dimensionless quantities.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::ViscosityRatio | Quantity::Intensity | Quantity::Reynolds => "",
            Quantity::NuTilda => "m²/s",
            Quantity::LengthScale | Quantity::HydraulicDiameter => "m",
            Quantity::TurbulentKineticEnergy => "m²/s²",
            Quantity::Dissipation => "m²/s³",
            Quantity::SpecificDissipation => "1/s",
            Quantity::BulkVelocity => "m/s",
        }
    }

    /// Machine-friendly name.
    pub fn key(&self) -> &'static str {
        match self {
            Quantity::ViscosityRatio => "viscosity_ratio",
            Quantity::NuTilda => "nu_tilda",
            Quantity::Intensity => "intensity",
            Quantity::LengthScale => "length_scale",
            Quantity::TurbulentKineticEnergy => "k",
            Quantity::Dissipation => "epsilon",
            Quantity::SpecificDissipation => "omega",
            Quantity::Reynolds => "reynolds",
            Quantity::BulkVelocity => "velocity",
            Quantity::HydraulicDiameter => "hydraulic_diameter",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A quantity with its SI value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reported {
    pub quantity: Quantity,
    pub value: f64,
}

/// Recommended boundary conditions and reference Dirichlet values.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub primary: Vec<Reported>,
    pub secondary: Vec<Reported>,
    pub advice: &'static str,
}

pub const SA_ADVICE: &str =
    "For Spalart-Allmaras, specifying the viscosity ratio is often the most robust option.";
pub const INTERNAL_ADVICE: &str =
    "For k-ε and k-ω models in internal flows, Intensity and Length Scale are robust.";
pub const EXTERNAL_ADVICE: &str =
    "For k-ε and k-ω models in external flows, Intensity and Viscosity Ratio are robust.";

fn collect(items: &[(Quantity, Option<f64>)]) -> Vec<Reported> {
    items
        .iter()
        .filter_map(|&(quantity, value)| value.map(|value| Reported { quantity, value }))
        .collect()
}

/// Pick what to present for the result's model.
///
/// Quantities the calculation did not produce are left out.
pub fn select(result: &TurbulenceResult) -> Selection {
    let ratio = Some(result.viscosity_ratio);
    let intensity = result.intensity;
    let length_scale = result.length_scale.map(|l| l.value);

    let (primary, advice) = match result.model {
        TurbulenceModel::SpalartAllmaras => (vec![(Quantity::ViscosityRatio, ratio)], SA_ADVICE),
        _ if result.regime.is_internal() => (
            vec![
                (Quantity::Intensity, intensity),
                (Quantity::LengthScale, length_scale),
            ],
            INTERNAL_ADVICE,
        ),
        _ => (
            vec![
                (Quantity::Intensity, intensity),
                (Quantity::ViscosityRatio, ratio),
            ],
            EXTERNAL_ADVICE,
        ),
    };

    let secondary = match result.model {
        TurbulenceModel::SpalartAllmaras => {
            vec![(Quantity::NuTilda, result.nu_tilda.map(|nu| nu.value))]
        }
        TurbulenceModel::KEpsilon => vec![
            (Quantity::TurbulentKineticEnergy, result.k),
            (Quantity::Dissipation, result.epsilon),
        ],
        TurbulenceModel::KOmega => vec![
            (Quantity::TurbulentKineticEnergy, result.k),
            (Quantity::SpecificDissipation, result.omega),
        ],
    };

    Selection {
        primary: collect(&primary),
        secondary: collect(&secondary),
        advice,
    }
}

/// Re, U and Dh, where known.
pub fn flow_properties(result: &TurbulenceResult) -> Vec<Reported> {
    collect(&[
        (Quantity::Reynolds, result.reynolds),
        (Quantity::BulkVelocity, result.velocity.map(|u| u.value)),
        (
            Quantity::HydraulicDiameter,
            result.hydraulic_diameter.map(|d| d.value),
        ),
    ])
}
