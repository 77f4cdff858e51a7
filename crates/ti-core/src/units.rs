// ti-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity,
    DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength,
    MassDensity as UomMassDensity, MassRate as UomMassRate, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
/// m²/s. uom files kinematic viscosity under diffusion coefficient.
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(2.0);
        let _a = m2(0.5);
        let _u = mps(10.0);
        let _rho = kgpm3(1.225);
        let _mu = pas(1.81e-5);
        let _nu = m2ps(1.5e-5);
        let _mdot = kgps(1.2);
        let _q = m3ps(0.3);
    }

    #[test]
    fn constructors_store_si_values() {
        assert_eq!(m(2.0).value, 2.0);
        assert_eq!(m2(0.5).value, 0.5);
        assert_eq!(kgpm3(1.225).value, 1.225);
        assert_eq!(pas(1.81e-5).value, 1.81e-5);
        assert_eq!(m3ps(0.3).value, 0.3);
        assert_eq!(m2ps(1.5e-5).value, 1.5e-5);
    }
}
