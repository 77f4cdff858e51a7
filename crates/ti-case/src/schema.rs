//! Case schema definitions.

use serde::{Deserialize, Serialize};
use ti_turbulence::{Application, TurbulenceModel};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub version: u32,
    pub name: String,
    pub model: TurbulenceModel,
    pub application: Application,
    #[serde(default)]
    pub fluid: FluidDef,
    /// Required for internal applications, absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inlet: Option<InletDef>,
    /// External applications with k-ε / k-ω only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_velocity_m_s: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
}

impl Default for FluidDef {
    fn default() -> Self {
        Self {
            density_kg_m3: 1.225,
            viscosity_pa_s: 1.81e-5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InletDef {
    pub geometry: GeometryDef,
    pub flow: FlowDef,
    #[serde(default)]
    pub generator: GeneratorDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum GeometryDef {
    Circular {
        diameter_m: f64,
    },
    Annular {
        inner_diameter_m: f64,
        outer_diameter_m: f64,
    },
    Square {
        side_m: f64,
    },
    Rectangular {
        width_m: f64,
        height_m: f64,
    },
    Channel2D {
        height_m: f64,
    },
    AreaPerimeter {
        area_m2: f64,
        perimeter_m: f64,
    },
    HydraulicDiameter {
        hydraulic_diameter_m: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FlowDef {
    Velocity { velocity_m_s: f64 },
    MassFlowRate { mass_flow_kg_s: f64 },
    VolumeFlowRate { volume_flow_m3_s: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type")]
pub enum GeneratorDef {
    #[default]
    CrossSection,
    /// `thickness_m` absent means δ99 is estimated for fully developed flow.
    BoundaryLayer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thickness_m: Option<f64>,
    },
    CharacteristicLength {
        length_m: f64,
    },
}

impl GeometryDef {
    /// Named scalar fields, in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        match *self {
            GeometryDef::Circular { diameter_m } => vec![("diameter_m", diameter_m)],
            GeometryDef::Annular {
                inner_diameter_m,
                outer_diameter_m,
            } => vec![
                ("inner_diameter_m", inner_diameter_m),
                ("outer_diameter_m", outer_diameter_m),
            ],
            GeometryDef::Square { side_m } => vec![("side_m", side_m)],
            GeometryDef::Rectangular { width_m, height_m } => {
                vec![("width_m", width_m), ("height_m", height_m)]
            }
            GeometryDef::Channel2D { height_m } => vec![("height_m", height_m)],
            GeometryDef::AreaPerimeter {
                area_m2,
                perimeter_m,
            } => vec![("area_m2", area_m2), ("perimeter_m", perimeter_m)],
            GeometryDef::HydraulicDiameter {
                hydraulic_diameter_m,
            } => vec![("hydraulic_diameter_m", hydraulic_diameter_m)],
        }
    }
}

impl FlowDef {
    pub fn field(&self) -> (&'static str, f64) {
        match *self {
            FlowDef::Velocity { velocity_m_s } => ("velocity_m_s", velocity_m_s),
            FlowDef::MassFlowRate { mass_flow_kg_s } => ("mass_flow_kg_s", mass_flow_kg_s),
            FlowDef::VolumeFlowRate { volume_flow_m3_s } => {
                ("volume_flow_m3_s", volume_flow_m3_s)
            }
        }
    }
}

impl CaseDef {
    /// A case filled with the calculator's default inputs.
    pub fn template(model: TurbulenceModel, application: Application) -> Self {
        let internal = application.regime().is_internal();
        Self {
            version: LATEST_VERSION,
            name: format!("{application}"),
            model,
            application,
            fluid: FluidDef::default(),
            inlet: internal.then(|| InletDef {
                geometry: GeometryDef::Circular { diameter_m: 1.0 },
                flow: FlowDef::Velocity { velocity_m_s: 10.0 },
                generator: GeneratorDef::CrossSection,
            }),
            reference_velocity_m_s: (!internal && model.is_two_equation()).then_some(10.0),
        }
    }
}
