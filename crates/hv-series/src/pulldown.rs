//! Transient cabin pull-down integration.
//!
//! Fixed-step explicit (forward) integration over a 15-minute horizon at
//! 1-minute steps. Each step reuses the hv-model load and capacity
//! sub-steps; the net-heat-to-temperature-delta conversion keeps the
//! calibrated `* 60 / thermal_mass` scaling of the source model rather
//! than a named SI unit system, since downstream chart expectations are
//! tuned to it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SeriesError, SeriesResult};
use hv_model::constants::{
    CABIN_THERMAL_MASS, PASSENGER_LOAD_KW, SOLAR_LOAD_BASE_KW, UA_CABIN_KW_PER_C,
};
use hv_model::{CompressorTech, SimInputs, capacity, humidity_factor, solar_factor};

/// Options for the pull-down run.
#[derive(Clone, Copy, Debug)]
pub struct PullDownOptions {
    /// Simulated horizon in minutes; samples are emitted at t = 0..=horizon.
    pub horizon_min: usize,
    /// Lumped cabin thermal mass (calibrated constant, see module docs).
    pub thermal_mass: f64,
}

impl Default for PullDownOptions {
    fn default() -> Self {
        Self {
            horizon_min: 15,
            thermal_mass: CABIN_THERMAL_MASS,
        }
    }
}

/// One sample of the pull-down curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PullDownPoint {
    /// Minutes since start.
    pub time_min: f64,
    /// Cabin temperature (degC), display-rounded.
    pub cabin_temp_c: f64,
    /// Target temperature (degC), constant over the run.
    pub target_temp_c: f64,
}

/// Integrate the cabin temperature from ambient toward target.
///
/// The cooling term is technology-dependent: variable displacement
/// throttles to 1.2x the heat influx once within 2 degC of target
/// (proportional approach), fixed displacement runs full capacity until
/// target and then cuts to zero (on/off thermostat, no hysteresis band).
/// Cabin temperature never falls more than 0.5 degC below target.
pub fn pull_down_curve(
    inputs: &SimInputs,
    opts: &PullDownOptions,
) -> SeriesResult<Vec<PullDownPoint>> {
    if opts.horizon_min == 0 {
        return Err(SeriesError::InvalidArg {
            what: "horizon_min must be positive",
        });
    }
    if opts.thermal_mass <= 0.0 {
        return Err(SeriesError::InvalidArg {
            what: "thermal_mass must be positive",
        });
    }

    let mut points = Vec::with_capacity(opts.horizon_min + 1);
    let mut cabin_c = inputs.ambient_c;

    let h_factor = humidity_factor(inputs.humidity_pct);
    let max_capacity_kw = capacity::max_capacity_kw(inputs.ambient_c, inputs.engine_rpm);

    for t in 0..=opts.horizon_min {
        points.push(PullDownPoint {
            time_min: t as f64,
            cabin_temp_c: (cabin_c * 10.0).round() / 10.0,
            target_temp_c: inputs.target_c,
        });

        // Heat influx at the current cabin temperature; single occupant
        // load for the transient case, latent contribution approximated
        // by scaling with the humidity factor.
        let delta_t = inputs.ambient_c - cabin_c;
        let influx_kw = (UA_CABIN_KW_PER_C * delta_t
            + SOLAR_LOAD_BASE_KW * solar_factor(inputs.ambient_c)
            + PASSENGER_LOAD_KW)
            * (1.0 + h_factor);

        let cooling_kw = match inputs.tech {
            CompressorTech::VariableDisplacement => {
                if cabin_c - inputs.target_c < 2.0 {
                    // Proportional approach near target
                    max_capacity_kw.min(influx_kw * 1.2)
                } else {
                    max_capacity_kw
                }
            }
            CompressorTech::FixedDisplacement => {
                if cabin_c <= inputs.target_c {
                    0.0
                } else {
                    max_capacity_kw
                }
            }
        };

        let net_heat = (influx_kw - cooling_kw) * 60.0;
        cabin_c += net_heat / opts.thermal_mass;
        if cabin_c < inputs.target_c - 0.5 {
            cabin_c = inputs.target_c - 0.5;
        }
    }

    debug!(
        samples = points.len(),
        final_cabin_c = points.last().map(|p| p.cabin_temp_c),
        "pull-down integrated"
    );

    Ok(points)
}
