//! Integration tests for the inlet resolvers.

use std::f64::consts::PI;

use proptest::prelude::*;
use ti_core::units::{kgpm3, kgps, m, m3ps, mps, pas};
use ti_inlet::{
    FlowSpec, FluidProperties, Geometry, InletError, InletSpec, TurbulenceGenerator,
    resolve_geometry, resolve_velocity,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn circular_air_inlet() {
    let fluid = FluidProperties::new(kgpm3(1.225), pas(1.81e-5)).unwrap();
    let inlet = InletSpec::new(
        Geometry::Circular { diameter: m(1.0) },
        FlowSpec::Velocity(mps(10.0)),
        TurbulenceGenerator::CrossSection,
    )
    .unwrap();

    let r = inlet.resolve(&fluid).unwrap();
    assert_eq!(r.section.hydraulic_diameter.value, 1.0);
    assert!((r.section.area.unwrap().value - 0.7854).abs() < 1e-4);
    assert_eq!(r.velocity.value, 10.0);
    assert!(close(r.length_scale.value, 0.07));
    assert!(r.estimated_thickness.is_none());
}

#[test]
fn annular_section_values() {
    let s = resolve_geometry(&Geometry::Annular {
        inner: m(0.5),
        outer: m(1.0),
    })
    .unwrap();
    assert!(close(s.hydraulic_diameter.value, 0.5));
    assert!((s.area.unwrap().value - 0.589).abs() < 1e-3);
}

#[test]
fn inverted_annulus_fails() {
    let err = resolve_geometry(&Geometry::Annular {
        inner: m(1.0),
        outer: m(0.5),
    })
    .unwrap_err();
    assert!(matches!(err, InletError::InvalidGeometry { .. }));
}

#[test]
fn channel_mass_flow_fails_in_resolver() {
    let section = resolve_geometry(&Geometry::Channel2D { height: m(1.0) }).unwrap();
    let err = resolve_velocity(&FlowSpec::MassFlowRate(kgps(1.0)), kgpm3(1.225), section.area)
        .unwrap_err();
    assert!(matches!(err, InletError::UndefinedArea { .. }));
}

#[test]
fn mass_and_volume_flow_agree() {
    let fluid = FluidProperties::new(kgpm3(998.0), pas(1.0e-3)).unwrap();
    let geometry = Geometry::Rectangular {
        width: m(0.2),
        height: m(0.1),
    };

    let by_mass = InletSpec::new(
        geometry,
        FlowSpec::MassFlowRate(kgps(998.0 * 0.04)),
        TurbulenceGenerator::CrossSection,
    )
    .unwrap()
    .resolve(&fluid)
    .unwrap();
    let by_volume = InletSpec::new(
        geometry,
        FlowSpec::VolumeFlowRate(m3ps(0.04)),
        TurbulenceGenerator::CrossSection,
    )
    .unwrap()
    .resolve(&fluid)
    .unwrap();

    assert!(close(by_mass.velocity.value, 2.0));
    assert!(close(by_volume.velocity.value, 2.0));
}

proptest! {
    #[test]
    fn circular_area_and_dh(d in 1e-4_f64..100.0) {
        let s = resolve_geometry(&Geometry::Circular { diameter: m(d) }).unwrap();
        prop_assert_eq!(s.hydraulic_diameter.value, d);
        prop_assert!(close(s.area.unwrap().value, PI * d * d / 4.0));
    }

    #[test]
    fn annulus_area_positive_or_rejected(din in 1e-3_f64..10.0, dout in 1e-3_f64..10.0) {
        let result = resolve_geometry(&Geometry::Annular { inner: m(din), outer: m(dout) });
        if dout > din {
            let s = result.unwrap();
            prop_assert!(s.area.unwrap().value > 0.0);
        } else {
            let is_invalid = matches!(result, Err(InletError::InvalidGeometry { .. }));
            prop_assert!(is_invalid);
        }
    }

    #[test]
    fn rectangle_dh_bounded(a in 1e-3_f64..50.0, b in 1e-3_f64..50.0) {
        let s = resolve_geometry(&Geometry::Rectangular { width: m(a), height: m(b) }).unwrap();
        let dh = s.hydraulic_diameter.value;
        prop_assert!(dh <= (2.0 * a).min(2.0 * b) * (1.0 + 1e-12));
    }
}
