//! Idle-speed-control (ISC) intervention.
//!
//! A strictly ordered decision sequence evaluated once per computation,
//! stateless across calls. High compressor torque at low engine speed
//! first triggers an idle bump (+150 RPM); if the recomputed torque is
//! still excessive, a variable-displacement compressor is derated while a
//! fixed-displacement one keeps the bump and is flagged as a
//! short-cycling risk (it cannot partially destroke).

use hv_core::units::constants::TORQUE_PER_KW_RPM;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::compressor::OperatingPoint;
use crate::inputs::CompressorTech;

/// Torque above which the ECU intervenes at idle (N.m).
const IDLE_TORQUE_LIMIT_NM: f64 = 15.0;

/// Torque that must not be exceeded even after the idle bump (N.m).
const POST_BUMP_TORQUE_LIMIT_NM: f64 = 18.0;

/// Engine speed below which intervention logic is armed (RPM).
const INTERVENTION_RPM: f64 = 950.0;

/// Engine speed below which idle status is classified (RPM).
const IDLE_CLASSIFICATION_RPM: f64 = 900.0;

/// Idle-bump speed increase (RPM).
const IDLE_BUMP_RPM: f64 = 150.0;

/// Derate factor applied to a variable-displacement compressor when the
/// idle bump alone is not enough.
const DERATE_FACTOR: f64 = 0.7;

/// Engine-control response selected by the intervention logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IscAction {
    None,
    IdleBump,
    CompressorDerate,
    SystemCutOff,
}

impl fmt::Display for IscAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::IdleBump => write!(f, "Idle Bump (+150rpm)"),
            Self::CompressorDerate => write!(f, "Compressor Derate"),
            Self::SystemCutOff => write!(f, "System Cut-off"),
        }
    }
}

/// Idle stability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleStatus {
    Stable,
    Warning,
    StallRisk,
}

impl fmt::Display for IdleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Warning => write!(f, "warning"),
            Self::StallRisk => write!(f, "stall_risk"),
        }
    }
}

/// Outcome of the intervention decision. Carries the (possibly adjusted)
/// operating-point values rather than mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intervention {
    pub action: IscAction,
    /// Torque after intervention (N.m).
    pub final_torque_nm: f64,
    /// Displacement ratio after a possible derate.
    pub displacement_ratio: f64,
    /// Average power after a possible derate (kW).
    pub avg_power_kw: f64,
}

/// Evaluate the intervention sequence for a resolved operating point.
pub fn intervene(
    tech: CompressorTech,
    cut_off: bool,
    engine_rpm: f64,
    op: &OperatingPoint,
) -> Intervention {
    let mut action = IscAction::None;
    let mut final_torque_nm = op.peak_torque_nm;
    let mut displacement_ratio = op.displacement_ratio;
    let mut avg_power_kw = op.avg_power_kw;

    if cut_off {
        action = IscAction::SystemCutOff;
        final_torque_nm = 0.0;
    } else if engine_rpm < INTERVENTION_RPM && op.peak_torque_nm > IDLE_TORQUE_LIMIT_NM {
        // Strategy 1: raise idle speed and re-evaluate the torque.
        action = IscAction::IdleBump;
        final_torque_nm =
            op.instantaneous_power_kw * TORQUE_PER_KW_RPM / (op.effective_rpm + IDLE_BUMP_RPM);

        if final_torque_nm > POST_BUMP_TORQUE_LIMIT_NM {
            match tech {
                CompressorTech::VariableDisplacement => {
                    // Strategy 2: force a destroke.
                    action = IscAction::CompressorDerate;
                    displacement_ratio *= DERATE_FACTOR;
                    avg_power_kw *= DERATE_FACTOR;
                    final_torque_nm *= DERATE_FACTOR;
                }
                CompressorTech::FixedDisplacement => {
                    // A fixed-stroke compressor pulls full load whenever
                    // engaged; the bump stands and the operating point is
                    // a short-cycling risk.
                }
            }
        }
    }

    Intervention {
        action,
        final_torque_nm,
        displacement_ratio,
        avg_power_kw,
    }
}

/// Classify idle stability from the post-intervention torque. Independent
/// of the intervention axis; anything at or above 900 RPM is stable.
pub fn classify_idle(engine_rpm: f64, action: IscAction, final_torque_nm: f64) -> IdleStatus {
    if engine_rpm < IDLE_CLASSIFICATION_RPM && action != IscAction::SystemCutOff {
        if final_torque_nm > 15.0 {
            return IdleStatus::StallRisk;
        }
        if final_torque_nm > 8.0 {
            return IdleStatus::Warning;
        }
    }
    IdleStatus::Stable
}
