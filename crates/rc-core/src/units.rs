// rc-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
pub type SpecEntropy = f64;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Absolute temperature from a Celsius reading.
#[inline]
pub fn degc(v: f64) -> Temperature {
    k(v + KELVIN_OFFSET)
}

#[inline]
pub fn delta_k(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

#[inline]
pub fn to_kpa(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

#[inline]
pub fn to_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn to_degc(t: Temperature) -> f64 {
    to_k(t) - KELVIN_OFFSET
}

/// J/kg -> kJ/kg (also valid for J/(kg·K) -> kJ/(kg·K)).
#[inline]
pub fn to_kilo(v: f64) -> f64 {
    v / 1000.0
}
