//! Output record of the steady-state solver.

use serde::{Deserialize, Serialize};

use crate::isc::{IdleStatus, IscAction};

/// Consistent set of thermodynamic and mechanical outputs for one
/// computation. Numeric fields are rounded to display precision at this
/// boundary (a presentation concern; the internal pipeline is full
/// precision).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// Total cooling load (kW).
    pub cooling_load_kw: f64,
    /// Sensible portion of the load (kW).
    pub sensible_load_kw: f64,
    /// Latent portion of the load (kW).
    pub latent_load_kw: f64,
    /// Coefficient of performance after technology losses.
    pub cop: f64,
    /// Average compressor shaft power (kW).
    pub compressor_power_kw: f64,
    /// Instantaneous torque while pumping (N.m).
    pub peak_torque_nm: f64,
    /// Torque after ISC intervention (N.m).
    pub final_torque_nm: f64,
    /// Estimated discharge temperature (degC).
    pub discharge_temp_c: f64,
    /// Stroke not in use, as a percentage.
    pub efficiency_loss_pct: f64,
    /// Stroke in use, as a percentage.
    pub displacement_pct: f64,
    /// Fuel consumed by the compressor drive (L/h).
    pub fuel_penalty_lph: f64,
    /// Idle stability classification.
    pub idle_status: IdleStatus,
    /// Engine-control response.
    pub isc_action: IscAction,
    /// Condensing temperature (degC).
    pub t_cond_c: f64,
    /// Evaporating temperature (degC), held constant.
    pub t_evap_c: f64,
}

/// Round to `dp` decimal places for display.
pub(crate) fn round_dp(v: f64, dp: i32) -> f64 {
    let scale = 10f64.powi(dp);
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_dp(3.8812, 2), 3.88);
        assert_eq!(round_dp(81.94, 1), 81.9);
        assert_eq!(round_dp(60.84, 0), 61.0);
    }
}
