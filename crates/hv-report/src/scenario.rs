//! Scenario files: operating conditions as YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ReportResult;
use hv_model::{CompressorTech, SimInputs};

/// A named operating condition, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub ambient_c: f64,
    pub target_c: f64,
    pub engine_rpm: f64,
    pub humidity_pct: f64,
    pub tech: CompressorTech,
}

impl Scenario {
    /// Parse a scenario from YAML text.
    pub fn from_yaml(text: &str) -> ReportResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a scenario from a YAML file.
    pub fn load(path: &Path) -> ReportResult<Self> {
        let text = fs::read_to_string(path)?;
        let scenario = Self::from_yaml(&text)?;
        info!(path = %path.display(), name = ?scenario.name, "scenario loaded");
        Ok(scenario)
    }

    /// Validate the scenario into solver inputs.
    pub fn to_inputs(&self) -> ReportResult<SimInputs> {
        Ok(SimInputs::new(
            self.ambient_c,
            self.target_c,
            self.engine_rpm,
            self.humidity_pct,
            self.tech,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    #[test]
    fn parses_a_minimal_scenario() {
        let yaml = "\
ambient_c: 35.0
target_c: 22.0
engine_rpm: 1500
humidity_pct: 50
tech: variable_displacement
";
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert_eq!(scenario.name, None);
        assert_eq!(scenario.tech, CompressorTech::VariableDisplacement);
        let inputs = scenario.to_inputs().unwrap();
        assert_eq!(inputs.ambient_c, 35.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let yaml = "\
name: too hot
ambient_c: 70.0
target_c: 22.0
engine_rpm: 1500
humidity_pct: 50
tech: fixed_displacement
";
        let scenario = Scenario::from_yaml(yaml).unwrap();
        let err = scenario.to_inputs().unwrap_err();
        assert!(matches!(err, ReportError::InvalidScenario { .. }));
    }

    #[test]
    fn rejects_unknown_technology() {
        let yaml = "\
ambient_c: 35.0
target_c: 22.0
engine_rpm: 1500
humidity_pct: 50
tech: scroll
";
        assert!(Scenario::from_yaml(yaml).is_err());
    }
}
