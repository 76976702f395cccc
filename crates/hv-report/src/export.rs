//! Report assembly and export (JSON report, CSV series).

use std::io::Write;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::fingerprint::input_fingerprint;
use hv_model::{SOLVER_VERSION, SimInputs, SystemMetrics};
use hv_series::ChartData;

/// Provenance for one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportManifest {
    pub fingerprint: String,
    pub timestamp: String,
    pub solver_version: String,
}

/// Full simulation report: inputs, steady-state metrics, derived series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub manifest: ReportManifest,
    pub inputs: SimInputs,
    pub metrics: SystemMetrics,
    pub charts: ChartData,
}

/// Assemble a report from already-computed results.
pub fn build_report(
    inputs: &SimInputs,
    metrics: &SystemMetrics,
    charts: &ChartData,
) -> SimulationReport {
    SimulationReport {
        manifest: ReportManifest {
            fingerprint: input_fingerprint(inputs, SOLVER_VERSION),
            timestamp: Utc::now().to_rfc3339(),
            solver_version: SOLVER_VERSION.to_string(),
        },
        inputs: *inputs,
        metrics: *metrics,
        charts: charts.clone(),
    }
}

impl SimulationReport {
    /// Write the report as pretty JSON.
    pub fn write_json<W: Write>(&self, mut writer: W) -> ReportResult<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Write the pull-down curve as CSV.
pub fn write_pulldown_csv<W: Write>(charts: &ChartData, mut writer: W) -> ReportResult<()> {
    writeln!(writer, "time_min,cabin_temp_c,target_temp_c")?;
    for p in &charts.pull_down_curve {
        writeln!(writer, "{},{},{}", p.time_min, p.cabin_temp_c, p.target_temp_c)?;
    }
    Ok(())
}

/// Write the ambient sweep as CSV.
pub fn write_ambient_csv<W: Write>(charts: &ChartData, mut writer: W) -> ReportResult<()> {
    writeln!(writer, "ambient_c,power_kw,cop,t_cond_c,t_evap_c,torque_nm")?;
    for p in &charts.ambient_sweep {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            p.ambient_c, p.power_kw, p.cop, p.t_cond_c, p.t_evap_c, p.torque_nm
        )?;
    }
    Ok(())
}

/// Write the engine-speed sweep as CSV.
pub fn write_rpm_csv<W: Write>(charts: &ChartData, mut writer: W) -> ReportResult<()> {
    writeln!(writer, "rpm,power_kw,torque_nm")?;
    for p in &charts.rpm_sweep {
        writeln!(writer, "{},{},{}", p.rpm, p.power_kw, p.torque_nm)?;
    }
    Ok(())
}
