// pf-core/src/units.rs

use uom::si::f64::MassRate as UomMassRate;

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}
