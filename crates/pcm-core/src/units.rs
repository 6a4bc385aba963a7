// pcm-core/src/units.rs

use uom::si::f64::{
    MolarEnergy as UomMolarEnergy, MolarHeatCapacity as UomMolarHeatCapacity,
    MolarMass as UomMolarMass, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Temperature = UomThermodynamicTemperature;
pub type MolarMass = UomMolarMass;
pub type MolarEnergy = UomMolarEnergy;
pub type MolarHeatCapacity = UomMolarHeatCapacity;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_OFFSET_K: f64 = 273.15;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    k(celsius_to_kelvin(v))
}

#[inline]
pub fn g_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::gram_per_mole;
    MolarMass::new::<gram_per_mole>(v)
}

#[inline]
pub fn j_per_mol(v: f64) -> MolarEnergy {
    use uom::si::molar_energy::joule_per_mole;
    MolarEnergy::new::<joule_per_mole>(v)
}

#[inline]
pub fn j_per_mol_k(v: f64) -> MolarHeatCapacity {
    use uom::si::molar_heat_capacity::joule_per_kelvin_mole;
    MolarHeatCapacity::new::<joule_per_kelvin_mole>(v)
}

#[inline]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + CELSIUS_OFFSET_K
}

#[inline]
pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - CELSIUS_OFFSET_K
}

pub mod constants {
    use super::*;

    /// Universal gas constant [J/(mol·K)], as used by the eutectic relations.
    pub const GAS_CONSTANT: f64 = 8.314;

    #[inline]
    pub fn gas_constant() -> MolarHeatCapacity {
        j_per_mol_k(GAS_CONSTANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _t = k(300.0);
        let _m = g_per_mol(200.32);
        let _h = j_per_mol(20_000.0);
        let _cp = j_per_mol_k(400.0);
        let _gas = constants::gas_constant();
    }

    #[test]
    fn celsius_round_trip() {
        let tol = Tolerances::default();
        assert!(nearly_equal(celsius_to_kelvin(25.0), 298.15, tol));
        assert!(nearly_equal(kelvin_to_celsius(298.15), 25.0, tol));
    }

    #[test]
    fn degc_matches_kelvin() {
        use uom::si::thermodynamic_temperature::kelvin;
        let tol = Tolerances::default();
        assert!(nearly_equal(degc(76.85).get::<kelvin>(), 350.0, tol));
    }

    #[test]
    fn molar_mass_keeps_gram_scale() {
        use uom::si::molar_mass::gram_per_mole;
        let tol = Tolerances::default();
        assert!(nearly_equal(g_per_mol(128.0).get::<gram_per_mole>(), 128.0, tol));
    }
}
