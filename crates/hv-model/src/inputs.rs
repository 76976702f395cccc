//! Operating-condition inputs for the steady-state solver.

use hv_core::ensure_in_range;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelResult;

/// Compressor technology variant.
///
/// A closed set: the operating-point solver dispatches on it exactly once
/// per computation. Fixed displacement runs at full stroke and modulates
/// via clutch duty cycle; variable displacement runs clutch-engaged and
/// modulates via stroke ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressorTech {
    FixedDisplacement,
    VariableDisplacement,
}

impl fmt::Display for CompressorTech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedDisplacement => write!(f, "Fixed Displacement"),
            Self::VariableDisplacement => write!(f, "Variable Displacement"),
        }
    }
}

/// Immutable operating conditions for one computation.
///
/// Fields are public for sweep generation (one field substituted per
/// sample); `new` is the validation boundary for externally supplied
/// values. Each solver call is independent: nothing is mutated after a
/// computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimInputs {
    /// Ambient air temperature (degC).
    pub ambient_c: f64,
    /// Target cabin temperature (degC).
    pub target_c: f64,
    /// Engine speed (RPM).
    pub engine_rpm: f64,
    /// Relative humidity (%).
    pub humidity_pct: f64,
    /// Compressor technology variant.
    pub tech: CompressorTech,
}

impl SimInputs {
    /// Validate and build an input record.
    ///
    /// Ranges cover the sweep domain, which is wider than the UI range:
    /// ambient [15, 55], target [16, 26], rpm [600, 6000], humidity
    /// [10, 90]. Out-of-range values are rejected here; the solver itself
    /// never fails.
    pub fn new(
        ambient_c: f64,
        target_c: f64,
        engine_rpm: f64,
        humidity_pct: f64,
        tech: CompressorTech,
    ) -> ModelResult<Self> {
        ensure_in_range(ambient_c, 15.0, 55.0, "ambient temperature (degC)")?;
        ensure_in_range(target_c, 16.0, 26.0, "target cabin temperature (degC)")?;
        ensure_in_range(engine_rpm, 600.0, 6000.0, "engine speed (RPM)")?;
        ensure_in_range(humidity_pct, 10.0, 90.0, "relative humidity (%)")?;
        Ok(Self {
            ambient_c,
            target_c,
            engine_rpm,
            humidity_pct,
            tech,
        })
    }

    /// Same conditions with a substituted ambient temperature.
    pub fn with_ambient(&self, ambient_c: f64) -> Self {
        Self { ambient_c, ..*self }
    }

    /// Same conditions with a substituted engine speed.
    pub fn with_rpm(&self, engine_rpm: f64) -> Self {
        Self {
            engine_rpm,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SimInputs {
        SimInputs::new(35.0, 22.0, 1500.0, 50.0, CompressorTech::VariableDisplacement).unwrap()
    }

    #[test]
    fn accepts_documented_domain() {
        assert!(SimInputs::new(15.0, 16.0, 600.0, 10.0, CompressorTech::FixedDisplacement).is_ok());
        assert!(
            SimInputs::new(55.0, 26.0, 6000.0, 90.0, CompressorTech::VariableDisplacement).is_ok()
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(SimInputs::new(60.0, 22.0, 1500.0, 50.0, CompressorTech::FixedDisplacement).is_err());
        assert!(SimInputs::new(35.0, 30.0, 1500.0, 50.0, CompressorTech::FixedDisplacement).is_err());
        assert!(SimInputs::new(35.0, 22.0, 100.0, 50.0, CompressorTech::FixedDisplacement).is_err());
        assert!(SimInputs::new(35.0, 22.0, 1500.0, 95.0, CompressorTech::FixedDisplacement).is_err());
        assert!(
            SimInputs::new(f64::NAN, 22.0, 1500.0, 50.0, CompressorTech::FixedDisplacement)
                .is_err()
        );
    }

    #[test]
    fn substitution_keeps_other_fields() {
        let inputs = base();
        let swapped = inputs.with_ambient(20.0);
        assert_eq!(swapped.ambient_c, 20.0);
        assert_eq!(swapped.target_c, inputs.target_c);
        assert_eq!(swapped.engine_rpm, inputs.engine_rpm);

        let swapped = inputs.with_rpm(800.0);
        assert_eq!(swapped.engine_rpm, 800.0);
        assert_eq!(swapped.ambient_c, inputs.ambient_c);
    }

    #[test]
    fn tech_display_names() {
        assert_eq!(
            CompressorTech::FixedDisplacement.to_string(),
            "Fixed Displacement"
        );
        assert_eq!(
            CompressorTech::VariableDisplacement.to_string(),
            "Variable Displacement"
        );
    }
}
