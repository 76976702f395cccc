//! Cabin heat load model.
//!
//! Sensible load comes from the ambient-to-target temperature difference,
//! solar gain, and occupant heat. Latent (moisture) load is modeled as a
//! humidity-dependent fraction of the sensible load: zero at or below
//! 30 % RH, linear above.

use crate::constants::{
    PASSENGER_COUNT, PASSENGER_LOAD_KW, SOLAR_LOAD_BASE_KW, UA_CABIN_KW_PER_C,
};

/// Sensible, latent, and total cabin cooling load (kW).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CabinLoad {
    pub sensible_kw: f64,
    pub latent_kw: f64,
    pub total_kw: f64,
}

/// Solar gain scaling: unity at 25 degC ambient, linear above and below.
pub fn solar_factor(ambient_c: f64) -> f64 {
    1.0 + (ambient_c - 25.0) * 0.025
}

/// Latent-load fraction of sensible load. Zero at or below 30 % RH; at
/// 90 % RH the latent load reaches ~60 % of sensible.
pub fn humidity_factor(humidity_pct: f64) -> f64 {
    (humidity_pct - 30.0).max(0.0) * 0.012
}

/// Compute the steady-state cabin load.
pub fn cabin_load(ambient_c: f64, target_c: f64, humidity_pct: f64) -> CabinLoad {
    let delta_t = (ambient_c - target_c).max(0.0);
    let sensible_kw = UA_CABIN_KW_PER_C * delta_t
        + SOLAR_LOAD_BASE_KW * solar_factor(ambient_c)
        + PASSENGER_LOAD_KW * PASSENGER_COUNT;

    let latent_kw = sensible_kw * humidity_factor(humidity_pct);

    CabinLoad {
        sensible_kw,
        latent_kw,
        total_kw: sensible_kw + latent_kw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latent_is_zero_at_or_below_30_pct_rh() {
        for rh in [10.0, 20.0, 30.0] {
            let load = cabin_load(35.0, 22.0, rh);
            assert_eq!(load.latent_kw, 0.0);
            assert_eq!(load.total_kw, load.sensible_kw);
        }
    }

    #[test]
    fn latent_grows_linearly_above_30_pct_rh() {
        let at_50 = cabin_load(35.0, 22.0, 50.0);
        let at_90 = cabin_load(35.0, 22.0, 90.0);
        assert!(at_50.latent_kw > 0.0);
        // factor: 0.24 at 50 %, 0.72 at 90 %
        assert!((at_50.latent_kw - at_50.sensible_kw * 0.24).abs() < 1e-12);
        assert!((at_90.latent_kw - at_90.sensible_kw * 0.72).abs() < 1e-12);
    }

    #[test]
    fn no_sensible_delta_when_ambient_below_target() {
        // Only solar + passenger load remain; delta-T term floors at zero.
        let load = cabin_load(20.0, 26.0, 20.0);
        let expected = 0.6 * solar_factor(20.0) + 0.3;
        assert!((load.sensible_kw - expected).abs() < 1e-12);
    }

    #[test]
    fn reference_point_35_22_50() {
        // sensible = 0.16*13 + 0.6*1.25 + 0.3 = 3.13
        let load = cabin_load(35.0, 22.0, 50.0);
        assert!((load.sensible_kw - 3.13).abs() < 1e-9);
        assert!((load.total_kw - 3.13 * 1.24).abs() < 1e-9);
    }
}
