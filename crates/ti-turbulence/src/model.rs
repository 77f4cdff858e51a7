//! Turbulence model and application choices.

use std::fmt;
use std::str::FromStr;

use crate::error::TurbulenceError;

/// Turbulence model the boundary conditions are meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TurbulenceModel {
    SpalartAllmaras,
    KEpsilon,
    KOmega,
}

impl TurbulenceModel {
    pub const ALL: [TurbulenceModel; 3] = [
        TurbulenceModel::SpalartAllmaras,
        TurbulenceModel::KEpsilon,
        TurbulenceModel::KOmega,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TurbulenceModel::SpalartAllmaras => "spalart_allmaras",
            TurbulenceModel::KEpsilon => "k_epsilon",
            TurbulenceModel::KOmega => "k_omega",
        }
    }

    /// Only two-equation models consume k, ω or ε.
    pub fn is_two_equation(&self) -> bool {
        !matches!(self, TurbulenceModel::SpalartAllmaras)
    }
}

impl fmt::Display for TurbulenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpalartAllmaras => write!(f, "Spalart-Allmaras"),
            Self::KEpsilon => write!(f, "k-epsilon based"),
            Self::KOmega => write!(f, "k-omega based"),
        }
    }
}

impl FromStr for TurbulenceModel {
    type Err = TurbulenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| TurbulenceError::UnknownChoice {
                what: "turbulence model",
                value: s.to_string(),
            })
    }
}

/// Application category of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Application {
    /// Pipe or channel.
    WallBounded,
    /// Inlet into a domain, e.g. a jet.
    JetInlet,
    /// Airfoils and other external aerodynamics.
    ExternalAero,
    /// High speed flows inside complex geometries.
    HighSpeedComplex,
    /// Flow inside pumps or compressors.
    PumpCompressor,
    Unsure,
}

/// Fixed turbulence levels used when no inlet geometry is involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalPreset {
    pub intensity: f64,
    pub viscosity_ratio: f64,
}

/// Which branch of the calculator an application takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowRegime {
    /// Full geometry → velocity → length scale pipeline.
    Internal,
    External(ExternalPreset),
}

impl FlowRegime {
    pub fn is_internal(&self) -> bool {
        matches!(self, FlowRegime::Internal)
    }
}

impl Application {
    pub const ALL: [Application; 6] = [
        Application::WallBounded,
        Application::JetInlet,
        Application::ExternalAero,
        Application::HighSpeedComplex,
        Application::PumpCompressor,
        Application::Unsure,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Application::WallBounded => "wall_bounded",
            Application::JetInlet => "jet_inlet",
            Application::ExternalAero => "external_aero",
            Application::HighSpeedComplex => "high_speed_complex",
            Application::PumpCompressor => "pump_compressor",
            Application::Unsure => "unsure",
        }
    }

    pub fn regime(&self) -> FlowRegime {
        match self {
            Application::WallBounded | Application::JetInlet => FlowRegime::Internal,
            Application::ExternalAero => FlowRegime::External(ExternalPreset {
                intensity: 0.01,
                viscosity_ratio: 1.0,
            }),
            Application::HighSpeedComplex | Application::PumpCompressor => {
                FlowRegime::External(ExternalPreset {
                    intensity: 0.10,
                    viscosity_ratio: 10.0,
                })
            }
            Application::Unsure => FlowRegime::External(ExternalPreset {
                intensity: 0.05,
                viscosity_ratio: 5.0,
            }),
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::WallBounded => "Wall bounded flow (Pipe / Channel)",
            Self::JetInlet => "Inlet into a domain (e.g., Jet)",
            Self::ExternalAero => "External aerodynamics (e.g., Airfoil)",
            Self::HighSpeedComplex => "High speed flows inside complex geometries",
            Self::PumpCompressor => "Flow inside pumps or compressors",
            Self::Unsure => "Unsure / General case",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Application {
    type Err = TurbulenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|a| a.key() == wanted)
            .ok_or_else(|| TurbulenceError::UnknownChoice {
                what: "application",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_applications() {
        assert!(Application::WallBounded.regime().is_internal());
        assert!(Application::JetInlet.regime().is_internal());
        assert!(!Application::Unsure.regime().is_internal());
    }

    #[test]
    fn external_presets() {
        let expect = [
            (Application::ExternalAero, 0.01, 1.0),
            (Application::HighSpeedComplex, 0.10, 10.0),
            (Application::PumpCompressor, 0.10, 10.0),
            (Application::Unsure, 0.05, 5.0),
        ];
        for (app, i, ratio) in expect {
            match app.regime() {
                FlowRegime::External(p) => {
                    assert_eq!(p.intensity, i);
                    assert_eq!(p.viscosity_ratio, ratio);
                }
                FlowRegime::Internal => panic!("{app} should be external"),
            }
        }
    }

    #[test]
    fn parse_keys() {
        for app in Application::ALL {
            assert_eq!(app.key().parse::<Application>().unwrap(), app);
        }
        assert_eq!(
            "K-Omega".parse::<TurbulenceModel>().unwrap(),
            TurbulenceModel::KOmega
        );
        assert!("laminar".parse::<TurbulenceModel>().is_err());
    }
}
