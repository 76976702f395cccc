//! Compressor operating-point solver.
//!
//! Resolves the control variable for the selected technology (stroke
//! ratio for variable displacement, clutch duty cycle for fixed), the
//! real COP relative to the Carnot ideal, and the resulting power and
//! torque at the shaft.

use hv_core::{celsius_to_kelvin, clamp, units::constants::TORQUE_PER_KW_RPM};

use crate::capacity::Capacity;
use crate::constants::{MECHANICAL_EFFICIENCY, RPM_FLOOR, T_EVAP_C};
use crate::inputs::CompressorTech;

/// Resolved compressor operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Fraction of maximum stroke in use. Pinned to 1.0 for fixed
    /// displacement; clamped to [0.05, 1.0] for variable.
    pub displacement_ratio: f64,
    /// Fraction of time the clutch is engaged. Pinned to 1.0 for variable
    /// displacement; clamped to [0, 1.0] for fixed.
    pub duty_cycle: f64,
    /// COP after technology-specific losses.
    pub real_cop: f64,
    /// Shaft power while the compressor is pumping (kW).
    pub instantaneous_power_kw: f64,
    /// Duty-cycle-weighted shaft power (kW). Zero when cut off, otherwise
    /// floored at 0.1 kW.
    pub avg_power_kw: f64,
    /// Torque at the shaft while pumping (N.m). Zero when cut off.
    pub peak_torque_nm: f64,
    /// Engine speed after the 600 RPM floor.
    pub effective_rpm: f64,
}

/// Carnot-ideal COP between the fixed evaporating temperature and the
/// given condensing temperature, on absolute temperatures.
pub fn carnot_cop(t_cond_c: f64) -> f64 {
    let t_evap_k = celsius_to_kelvin(T_EVAP_C);
    let t_cond_k = celsius_to_kelvin(t_cond_c);
    t_evap_k / (t_cond_k - t_evap_k)
}

/// Resolve the operating point for the given load and available capacity.
pub fn operating_point(
    tech: CompressorTech,
    total_load_kw: f64,
    capacity: &Capacity,
    t_cond_c: f64,
    engine_rpm: f64,
) -> OperatingPoint {
    let carnot = carnot_cop(t_cond_c);

    // Zero available capacity would make the demand ratio undefined;
    // substituting 1 yields a saturated ratio in that degenerate case.
    let denom = if capacity.available_kw == 0.0 {
        1.0
    } else {
        capacity.available_kw
    };

    let (displacement_ratio, duty_cycle, real_cop, instantaneous_draw_kw) = match tech {
        CompressorTech::VariableDisplacement => {
            // Stroke reduced to match load; efficiency improves at
            // partial stroke.
            let ratio = clamp(total_load_kw / denom, 0.05, 1.0);
            let efficiency_factor = 0.60 + 0.20 * (1.0 - ratio);
            (
                ratio,
                1.0,
                carnot * efficiency_factor,
                capacity.available_kw * ratio,
            )
        }
        CompressorTech::FixedDisplacement => {
            // Full stroke whenever engaged; cycling losses cost COP.
            let duty = clamp(total_load_kw / denom, 0.0, 1.0);
            (1.0, duty, carnot * 0.50, capacity.available_kw)
        }
    };

    let instantaneous_power_kw = (instantaneous_draw_kw / real_cop) / MECHANICAL_EFFICIENCY;

    let mut avg_power_kw = instantaneous_power_kw * duty_cycle;
    if capacity.cut_off {
        avg_power_kw = 0.0;
    } else if avg_power_kw < 0.1 {
        avg_power_kw = 0.1;
    }

    let effective_rpm = engine_rpm.max(RPM_FLOOR);
    let peak_torque_nm = if capacity.cut_off {
        0.0
    } else {
        instantaneous_power_kw * TORQUE_PER_KW_RPM / effective_rpm
    };

    OperatingPoint {
        displacement_ratio,
        duty_cycle,
        real_cop,
        instantaneous_power_kw,
        avg_power_kw,
        peak_torque_nm,
        effective_rpm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::compressor_capacity;

    #[test]
    fn carnot_reference() {
        // T_evap 276.15 K, T_cond 53 C -> 326.15 K
        let cop = carnot_cop(53.0);
        assert!((cop - 276.15 / 50.0).abs() < 1e-9);
    }

    #[test]
    fn variable_matches_load_at_partial_stroke() {
        let cap = compressor_capacity(35.0, 1500.0);
        let op = operating_point(CompressorTech::VariableDisplacement, 3.8812, &cap, 54.0, 1500.0);
        assert!((op.displacement_ratio - 3.8812 / cap.available_kw).abs() < 1e-9);
        assert_eq!(op.duty_cycle, 1.0);
        // duty pinned to 1 means average equals instantaneous
        assert!((op.avg_power_kw - op.instantaneous_power_kw).abs() < 1e-12);
    }

    #[test]
    fn fixed_runs_full_stroke_and_cycles() {
        let cap = compressor_capacity(35.0, 1500.0);
        let op = operating_point(CompressorTech::FixedDisplacement, 3.8812, &cap, 54.0, 1500.0);
        assert_eq!(op.displacement_ratio, 1.0);
        assert!(op.duty_cycle < 1.0);
        assert!(op.avg_power_kw < op.instantaneous_power_kw);
    }

    #[test]
    fn partial_stroke_improves_variable_cop() {
        let cap = compressor_capacity(35.0, 3000.0);
        let light = operating_point(CompressorTech::VariableDisplacement, 2.0, &cap, 54.0, 3000.0);
        let heavy = operating_point(CompressorTech::VariableDisplacement, 9.0, &cap, 54.0, 3000.0);
        assert!(light.displacement_ratio < heavy.displacement_ratio);
        assert!(light.real_cop > heavy.real_cop);
    }

    #[test]
    fn saturation_pins_control_variables() {
        // Load far beyond capacity: both technologies saturate at 1.0.
        let cap = compressor_capacity(35.0, 700.0);
        let var = operating_point(CompressorTech::VariableDisplacement, 50.0, &cap, 60.0, 700.0);
        let fixed = operating_point(CompressorTech::FixedDisplacement, 50.0, &cap, 60.0, 700.0);
        assert_eq!(var.displacement_ratio, 1.0);
        assert_eq!(fixed.duty_cycle, 1.0);
    }

    #[test]
    fn zero_capacity_is_guarded() {
        let cap = Capacity {
            max_kw: 0.0,
            condenser_limit: 1.0,
            available_kw: 0.0,
            cut_off: false,
        };
        let op = operating_point(CompressorTech::VariableDisplacement, 3.0, &cap, 54.0, 1500.0);
        // load / 1 saturates the ratio; draw is still zero
        assert_eq!(op.displacement_ratio, 1.0);
        assert_eq!(op.instantaneous_power_kw, 0.0);
        // floored average power
        assert_eq!(op.avg_power_kw, 0.1);
    }

    #[test]
    fn cut_off_zeroes_power_and_torque() {
        let cap = compressor_capacity(53.0, 1500.0);
        assert!(cap.cut_off);
        let op = operating_point(CompressorTech::FixedDisplacement, 8.0, &cap, 70.0, 1500.0);
        assert_eq!(op.avg_power_kw, 0.0);
        assert_eq!(op.peak_torque_nm, 0.0);
    }

    #[test]
    fn rpm_floor_avoids_singularity() {
        let cap = compressor_capacity(35.0, 600.0);
        let op = operating_point(CompressorTech::FixedDisplacement, 3.0, &cap, 54.0, 600.0);
        assert_eq!(op.effective_rpm, 600.0);
        assert!(op.peak_torque_nm.is_finite());
    }
}
