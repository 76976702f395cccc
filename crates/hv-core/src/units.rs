// hv-core/src/units.rs

use uom::si::f64::{
    Power as UomPower, Ratio as UomRatio, TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type TempInterval = UomTemperatureInterval;
pub type AbsTemperature = UomThermodynamicTemperature;
pub type Time = UomTime;

#[inline]
pub fn celsius(v: f64) -> AbsTemperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    AbsTemperature::new::<degree_celsius>(v)
}

#[inline]
pub fn k(v: f64) -> AbsTemperature {
    use uom::si::thermodynamic_temperature::kelvin;
    AbsTemperature::new::<kelvin>(v)
}

/// Celsius value as Kelvin, for absolute-temperature arithmetic.
#[inline]
pub fn celsius_to_kelvin(v: f64) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    celsius(v).get::<kelvin>()
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn minutes(v: f64) -> Time {
    use uom::si::time::minute;
    Time::new::<minute>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Conversion from kW at a shaft speed in RPM to torque in N·m:
    /// torque = power_kw * TORQUE_PER_KW_RPM / rpm.
    pub const TORQUE_PER_KW_RPM: f64 = 9548.8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _t = celsius(35.0);
        let _tk = k(300.0);
        let _p = kw(2.5);
        let _dt = minutes(1.0);
        let _r = unitless(0.5);
    }

    #[test]
    fn celsius_kelvin_offset() {
        assert!((celsius_to_kelvin(0.0) - 273.15).abs() < 1e-9);
        assert!((celsius_to_kelvin(3.0) - 276.15).abs() < 1e-9);
    }
}
