//! Parameter sweeps over the steady-state solver.
//!
//! Each sample is exactly one `compute_system_state` call with a single
//! substituted input field; there is no shared state between samples and
//! the two sweeps are independent of each other.

use serde::{Deserialize, Serialize};

use hv_model::{SimInputs, compute_system_state};

/// Ambient sweep bounds and step (degC).
const AMBIENT_START_C: f64 = 15.0;
const AMBIENT_STEP_C: f64 = 2.5;
const AMBIENT_STEPS: usize = 14;

/// Engine-speed sweep bounds and step (RPM).
const RPM_START: f64 = 800.0;
const RPM_STEP: f64 = 250.0;
const RPM_STEPS: usize = 20;

/// Steady-state metrics at one ambient temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientSweepPoint {
    pub ambient_c: f64,
    pub power_kw: f64,
    pub cop: f64,
    pub t_cond_c: f64,
    pub t_evap_c: f64,
    pub torque_nm: f64,
}

/// Steady-state metrics at one engine speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RpmSweepPoint {
    pub rpm: f64,
    pub power_kw: f64,
    pub torque_nm: f64,
}

/// Sweep ambient temperature from 15 to 50 degC in 2.5 degC steps.
pub fn ambient_sweep(inputs: &SimInputs) -> Vec<AmbientSweepPoint> {
    (0..=AMBIENT_STEPS)
        .map(|i| {
            let ambient_c = AMBIENT_START_C + AMBIENT_STEP_C * i as f64;
            let m = compute_system_state(&inputs.with_ambient(ambient_c));
            AmbientSweepPoint {
                ambient_c,
                power_kw: m.compressor_power_kw,
                cop: m.cop,
                t_cond_c: m.t_cond_c,
                t_evap_c: m.t_evap_c,
                torque_nm: m.peak_torque_nm,
            }
        })
        .collect()
}

/// Sweep engine speed from 800 to 6000 RPM in 250 RPM steps.
pub fn rpm_sweep(inputs: &SimInputs) -> Vec<RpmSweepPoint> {
    (0..=RPM_STEPS)
        .map(|i| {
            let rpm = RPM_START + RPM_STEP * i as f64;
            let m = compute_system_state(&inputs.with_rpm(rpm));
            RpmSweepPoint {
                rpm,
                power_kw: m.compressor_power_kw,
                torque_nm: m.peak_torque_nm,
            }
        })
        .collect()
}
