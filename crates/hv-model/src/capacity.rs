//! Compressor refrigeration capacity and high-ambient derating.
//!
//! Theoretical capacity follows from the volumetric displacement rate at
//! the current engine speed, suction density, and enthalpy change, with a
//! linear ambient derating (1 % per degC above 25). A second factor models
//! condenser saturation above 45 degC ambient; above 52 degC the system is
//! forced into full cut-off.

use crate::constants::{
    COMPRESSOR_DISPLACEMENT_M3, CONDENSER_SATURATION_C, CUT_OFF_AMBIENT_C, ENTHALPY_DELTA_KJ_KG,
    SUCTION_DENSITY_KG_M3, VOLUMETRIC_EFFICIENCY,
};

/// Capacity available at the current operating conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacity {
    /// Ambient-derated theoretical maximum (kW), before the condenser
    /// limit. The transient integrator uses this value directly.
    pub max_kw: f64,
    /// Condenser heat-rejection limit factor. May go negative at extreme
    /// ambient; superseded by `cut_off` above 52 degC.
    pub condenser_limit: f64,
    /// Capacity usable by the operating-point solver (kW).
    pub available_kw: f64,
    /// Heat-rejection cut-off: the condenser cannot reject enough heat
    /// and the system must shut down entirely.
    pub cut_off: bool,
}

/// Ambient-derated theoretical maximum capacity (kW).
pub fn max_capacity_kw(ambient_c: f64, engine_rpm: f64) -> f64 {
    let ambient_derating = 1.0 - (ambient_c - 25.0) * 0.01;
    (engine_rpm / 60.0)
        * COMPRESSOR_DISPLACEMENT_M3
        * VOLUMETRIC_EFFICIENCY
        * SUCTION_DENSITY_KG_M3
        * ENTHALPY_DELTA_KJ_KG
        * ambient_derating
}

/// Compute available capacity with high-ambient heat-rejection limits.
pub fn compressor_capacity(ambient_c: f64, engine_rpm: f64) -> Capacity {
    let max_kw = max_capacity_kw(ambient_c, engine_rpm);

    let mut condenser_limit = 1.0;
    let mut cut_off = false;
    if ambient_c > CONDENSER_SATURATION_C {
        condenser_limit = 1.0 - (ambient_c - CONDENSER_SATURATION_C) * 0.05;
        if ambient_c > CUT_OFF_AMBIENT_C {
            cut_off = true;
        }
    }

    Capacity {
        max_kw,
        condenser_limit,
        available_kw: max_kw * condenser_limit,
        cut_off,
    }
}
