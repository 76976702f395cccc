//! Steady-state solver: the full pipeline over one input record.

use tracing::debug;

use crate::capacity::compressor_capacity;
use crate::compressor::operating_point;
use crate::condenser::condensing_state;
use crate::constants::{BSFC_AVG_G_PER_KWH, FUEL_DENSITY_G_PER_L, T_EVAP_C};
use crate::inputs::SimInputs;
use crate::isc::{classify_idle, intervene};
use crate::load::cabin_load;
use crate::metrics::{SystemMetrics, round_dp};

/// Solver version, part of result fingerprints.
pub const SOLVER_VERSION: &str = "2.1";

/// Compute the steady-state operating point and metrics for one set of
/// operating conditions.
///
/// Total and pure: never fails for inputs within the documented domains
/// (which [`SimInputs::new`] enforces), performs no I/O, and reads no
/// state outside its arguments.
pub fn compute_system_state(inputs: &SimInputs) -> SystemMetrics {
    let load = cabin_load(inputs.ambient_c, inputs.target_c, inputs.humidity_pct);
    let capacity = compressor_capacity(inputs.ambient_c, inputs.engine_rpm);
    let condenser = condensing_state(inputs.ambient_c, load.total_kw);
    let op = operating_point(
        inputs.tech,
        load.total_kw,
        &capacity,
        condenser.t_cond_c,
        inputs.engine_rpm,
    );
    let isc = intervene(inputs.tech, capacity.cut_off, inputs.engine_rpm, &op);

    debug!(
        total_load_kw = load.total_kw,
        available_kw = capacity.available_kw,
        t_cond_c = condenser.t_cond_c,
        avg_power_kw = isc.avg_power_kw,
        action = %isc.action,
        "steady state resolved"
    );

    let fuel_penalty_lph = isc.avg_power_kw * BSFC_AVG_G_PER_KWH / FUEL_DENSITY_G_PER_L;
    let discharge_temp_c = condenser.t_cond_c + 18.0 + isc.avg_power_kw * 8.5;
    let idle_status = classify_idle(inputs.engine_rpm, isc.action, isc.final_torque_nm);

    SystemMetrics {
        cooling_load_kw: round_dp(load.total_kw, 2),
        sensible_load_kw: round_dp(load.sensible_kw, 2),
        latent_load_kw: round_dp(load.latent_kw, 2),
        cop: round_dp(op.real_cop, 2),
        compressor_power_kw: round_dp(isc.avg_power_kw, 2),
        peak_torque_nm: round_dp(op.peak_torque_nm, 2),
        final_torque_nm: round_dp(isc.final_torque_nm, 2),
        discharge_temp_c: round_dp(discharge_temp_c, 1),
        efficiency_loss_pct: round_dp((1.0 - isc.displacement_ratio) * 100.0, 0),
        displacement_pct: round_dp(isc.displacement_ratio * 100.0, 0),
        fuel_penalty_lph: round_dp(fuel_penalty_lph, 2),
        idle_status,
        isc_action: isc.action,
        t_cond_c: round_dp(condenser.t_cond_c, 1),
        t_evap_c: round_dp(T_EVAP_C, 1),
    }
}
