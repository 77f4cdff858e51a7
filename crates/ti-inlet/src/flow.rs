//! Velocity resolver: bulk velocity from the flow specification.

use crate::error::{InletError, InletResult};
use ti_core::numeric::ensure_positive;
use ti_core::units::{Area, Density, MassRate, Velocity, VolumeRate, mps};

/// How the inlet flow is prescribed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowSpec {
    Velocity(Velocity),
    MassFlowRate(MassRate),
    VolumeFlowRate(VolumeRate),
}

impl FlowSpec {
    pub fn label(&self) -> &'static str {
        match self {
            FlowSpec::Velocity(_) => "Velocity",
            FlowSpec::MassFlowRate(_) => "Mass Flow Rate",
            FlowSpec::VolumeFlowRate(_) => "Volume Flow Rate",
        }
    }

    /// Flow rates need a cross-sectional area to become a velocity.
    pub fn needs_area(&self) -> bool {
        !matches!(self, FlowSpec::Velocity(_))
    }

    pub fn validate(&self) -> InletResult<()> {
        match *self {
            FlowSpec::Velocity(u) => ensure_positive(u.value, "velocity")?,
            FlowSpec::MassFlowRate(mdot) => ensure_positive(mdot.value, "mass flow rate")?,
            FlowSpec::VolumeFlowRate(q) => ensure_positive(q.value, "volume flow rate")?,
        };
        Ok(())
    }
}

/// Resolve the bulk velocity.
///
/// `area` is `None` for sections without a defined area (2D channel), in
/// which case only a velocity specification is accepted.
pub fn resolve_velocity(
    flow: &FlowSpec,
    density: Density,
    area: Option<Area>,
) -> InletResult<Velocity> {
    flow.validate()?;

    let area = match (flow, area) {
        (FlowSpec::Velocity(u), _) => return Ok(*u),
        (_, Some(a)) => a.value,
        (_, None) => {
            return Err(InletError::UndefinedArea {
                flow: flow.label(),
                geometry: "2D Channel",
            });
        }
    };
    ensure_positive(area, "cross-sectional area")?;

    let u = match *flow {
        FlowSpec::MassFlowRate(mdot) => {
            let rho = ensure_positive(density.value, "density")?;
            mdot.value / (rho * area)
        }
        FlowSpec::VolumeFlowRate(q) => q.value / area,
        FlowSpec::Velocity(u) => u.value,
    };

    Ok(mps(u))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ti_core::units::{kgpm3, kgps, m2, m3ps};

    #[test]
    fn velocity_passes_through() {
        let u = resolve_velocity(&FlowSpec::Velocity(mps(10.0)), kgpm3(1.2), None).unwrap();
        assert_eq!(u.value, 10.0);
    }

    #[test]
    fn mass_flow_rate() {
        let u = resolve_velocity(
            &FlowSpec::MassFlowRate(kgps(2.0)),
            kgpm3(1000.0),
            Some(m2(0.01)),
        )
        .unwrap();
        assert!((u.value - 0.2).abs() < 1e-12);
    }

    #[test]
    fn volume_flow_rate() {
        let u = resolve_velocity(
            &FlowSpec::VolumeFlowRate(m3ps(1.0)),
            kgpm3(1.0),
            Some(m2(0.5)),
        )
        .unwrap();
        assert!((u.value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn flow_rate_without_area_fails() {
        for flow in [
            FlowSpec::MassFlowRate(kgps(1.0)),
            FlowSpec::VolumeFlowRate(m3ps(1.0)),
        ] {
            let err = resolve_velocity(&flow, kgpm3(1.0), None).unwrap_err();
            assert!(matches!(err, InletError::UndefinedArea { .. }));
        }
    }

    #[test]
    fn zero_velocity_is_invalid_input() {
        let err = resolve_velocity(&FlowSpec::Velocity(mps(0.0)), kgpm3(1.0), None).unwrap_err();
        assert!(matches!(err, InletError::InvalidInput { what: "velocity", .. }));
    }
}
