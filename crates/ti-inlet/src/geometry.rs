//! Geometry resolver: hydraulic diameter and cross-sectional area.

use std::f64::consts::PI;

use crate::error::{InletError, InletResult};
use ti_core::numeric::ensure_positive;
use ti_core::units::{Area, Length, m, m2};

/// Inlet cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circular { diameter: Length },
    Annular { inner: Length, outer: Length },
    Square { side: Length },
    Rectangular { width: Length, height: Length },
    /// Two-dimensional channel between parallel plates. Has no area.
    Channel2D { height: Length },
    AreaPerimeter { area: Area, perimeter: Length },
    /// Hydraulic diameter given directly. Area assumes a circular section.
    HydraulicDiameter { diameter: Length },
}

/// Resolved cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub hydraulic_diameter: Length,
    /// `None` for a 2D channel.
    pub area: Option<Area>,
}

impl Geometry {
    pub fn label(&self) -> &'static str {
        match self {
            Geometry::Circular { .. } => "Circular",
            Geometry::Annular { .. } => "Annular",
            Geometry::Square { .. } => "Square",
            Geometry::Rectangular { .. } => "Rectangular",
            Geometry::Channel2D { .. } => "2D Channel",
            Geometry::AreaPerimeter { .. } => "Other (Area/Perimeter)",
            Geometry::HydraulicDiameter { .. } => "Specified Hydraulic Diameter",
        }
    }

    /// Whether the section has a cross-sectional area usable for flow rates.
    pub fn has_area(&self) -> bool {
        !matches!(self, Geometry::Channel2D { .. })
    }

    /// Approximation notice the user should see alongside the result.
    pub fn caveat(&self) -> Option<&'static str> {
        match self {
            Geometry::HydraulicDiameter { .. } => Some(
                "Area is assumed based on a circular cross-section for flow rate calculations.",
            ),
            Geometry::Channel2D { .. } => Some("For a 2D channel, only velocity can be specified."),
            _ => None,
        }
    }

    /// Check every dimension is positive and the annulus is not inverted.
    pub fn validate(&self) -> InletResult<()> {
        match *self {
            Geometry::Circular { diameter } => {
                ensure_positive(diameter.value, "diameter")?;
            }
            Geometry::Annular { inner, outer } => {
                ensure_positive(inner.value, "inner diameter")?;
                ensure_positive(outer.value, "outer diameter")?;
                if outer.value <= inner.value {
                    return Err(InletError::InvalidGeometry {
                        inner: inner.value,
                        outer: outer.value,
                    });
                }
            }
            Geometry::Square { side } => {
                ensure_positive(side.value, "side length")?;
            }
            Geometry::Rectangular { width, height } => {
                ensure_positive(width.value, "width")?;
                ensure_positive(height.value, "height")?;
            }
            Geometry::Channel2D { height } => {
                ensure_positive(height.value, "channel height")?;
            }
            Geometry::AreaPerimeter { area, perimeter } => {
                ensure_positive(area.value, "cross-sectional area")?;
                ensure_positive(perimeter.value, "wetted perimeter")?;
            }
            Geometry::HydraulicDiameter { diameter } => {
                ensure_positive(diameter.value, "hydraulic diameter")?;
            }
        }
        Ok(())
    }

    /// Resolve to hydraulic diameter and area.
    pub fn resolve(&self) -> InletResult<Section> {
        self.validate()?;

        let (dh, area) = match *self {
            Geometry::Circular { diameter } => {
                let d = diameter.value;
                (d, Some(circle_area(d)))
            }
            Geometry::Annular { inner, outer } => {
                let (din, dout) = (inner.value, outer.value);
                (dout - din, Some(PI / 4.0 * (dout.powi(2) - din.powi(2))))
            }
            Geometry::Square { side } => {
                let s = side.value;
                (s, Some(s * s))
            }
            Geometry::Rectangular { width, height } => {
                let (a, b) = (width.value, height.value);
                (2.0 * a * b / (a + b), Some(a * b))
            }
            Geometry::Channel2D { height } => (2.0 * height.value, None),
            Geometry::AreaPerimeter { area, perimeter } => {
                (4.0 * area.value / perimeter.value, Some(area.value))
            }
            Geometry::HydraulicDiameter { diameter } => {
                let d = diameter.value;
                (d, Some(circle_area(d)))
            }
        };

        Ok(Section {
            hydraulic_diameter: m(dh),
            area: area.map(m2),
        })
    }
}

fn circle_area(d: f64) -> f64 {
    PI / 4.0 * d * d
}

/// Free-function form of [`Geometry::resolve`].
pub fn resolve_geometry(geometry: &Geometry) -> InletResult<Section> {
    geometry.resolve()
}
