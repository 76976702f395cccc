//! Condenser approach temperature with one-shot discharge feedback.
//!
//! Estimates the condensing and discharge temperatures from the total
//! load, then applies a single corrective reduction to the approach when
//! the discharge estimate exceeds 90 degC (fan speed-up). The correction
//! is deliberately a single pass, not an iterative solve to convergence;
//! that approximation is documented solver behavior.

/// Minimum air-to-refrigerant approach temperature (degC).
const APPROACH_FLOOR_C: f64 = 4.0;

/// Discharge temperature that triggers the corrective fan response (degC).
const DISCHARGE_LIMIT_C: f64 = 90.0;

/// Largest approach reduction the fan correction can deliver (degC).
const MAX_FAN_CORRECTION_C: f64 = 8.0;

/// Condensing-side temperatures after the feedback correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CondenserState {
    /// Corrected approach temperature (degC).
    pub approach_c: f64,
    /// Condensing temperature (degC), ambient + approach.
    pub t_cond_c: f64,
    /// Pre-correction discharge temperature estimate (degC). Internal to
    /// the correction step; the reported discharge metric is computed
    /// later from the average power.
    pub discharge_est_c: f64,
}

/// Estimate the condensing temperature for the given load, applying the
/// one-shot discharge correction.
pub fn condensing_state(ambient_c: f64, total_load_kw: f64) -> CondenserState {
    let mut approach_c = 12.0 + total_load_kw * 1.8;
    // Air density / fan saturation penalty at high ambient
    if ambient_c > 40.0 {
        approach_c += (ambient_c - 40.0) * 0.5;
    }

    let t_cond_c = ambient_c + approach_c;
    let discharge_est_c = t_cond_c + 20.0 + total_load_kw * 4.0;

    if discharge_est_c > DISCHARGE_LIMIT_C {
        let severity = discharge_est_c - DISCHARGE_LIMIT_C;
        approach_c -= (severity * 0.8).min(MAX_FAN_CORRECTION_C);
    }
    approach_c = approach_c.max(APPROACH_FLOOR_C);

    CondenserState {
        approach_c,
        t_cond_c: ambient_c + approach_c,
        discharge_est_c,
    }
}
