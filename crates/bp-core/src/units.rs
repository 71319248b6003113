// bp-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Pressure conversion for table output. Input in Pa, result in bar.
#[inline]
pub fn pa_to_bar(p_pa: f64) -> f64 {
    use uom::si::pressure::bar;
    pa(p_pa).get::<bar>()
}

/// Specific enthalpy conversion for table output. Input in J/kg, result in MJ/kg.
#[inline]
pub fn j_per_kg_to_mj_per_kg(h_j_per_kg: f64) -> f64 {
    h_j_per_kg / 1.0e6
}
