//! Narrative-analysis contract.
//!
//! The solver never depends on this: metrics are always computed before
//! an analyst is consulted, and any analyst failure degrades to a fixed
//! fallback string so the rest of the system keeps functioning.

use thiserror::Error;
use tracing::warn;

use hv_model::{IscAction, SimInputs, SystemMetrics};

/// Returned to callers whenever an analyst fails for any reason.
pub const ANALYSIS_FALLBACK: &str =
    "Analysis service unavailable. Simulation metrics remain valid; narrative commentary is degraded.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Service failure: {message}")]
    Service { message: String },
}

/// A narrative-commentary provider.
///
/// Implementations may call out to an external service; the call happens
/// after the computation is complete and its failure must never affect
/// the metrics.
pub trait Analyst {
    fn analyze(&self, inputs: &SimInputs, metrics: &SystemMetrics) -> Result<String, AnalysisError>;
}

/// Consult an analyst, falling back to the fixed degraded-mode string on
/// any failure.
pub fn analyze_or_fallback(
    analyst: &dyn Analyst,
    inputs: &SimInputs,
    metrics: &SystemMetrics,
) -> String {
    match analyst.analyze(inputs, metrics) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "analysis failed, using fallback");
            ANALYSIS_FALLBACK.to_string()
        }
    }
}

/// Build the assessment prompt for a service-backed analyst.
pub fn build_prompt(inputs: &SimInputs, metrics: &SystemMetrics) -> String {
    format!(
        "You are a senior automotive thermal systems calibration engineer. \
         Analyze the following A/C compressor simulation data, focusing on \
         compressor map efficiency, control valve strategy, head pressure and \
         discharge temperature, and powertrain integration.\n\
         \n\
         Context: ambient {ambient} degC, target cabin {target} degC, \
         humidity {humidity} %, engine {rpm} RPM, technology {tech}.\n\
         \n\
         Key indicators: average power {power} kW; torque {torque} Nm \
         (idle status {status}, ISC action {action}); loads sensible \
         {sensible} kW, latent {latent} kW; displacement {disp} %; fuel \
         penalty {fuel} L/h; COP {cop}; discharge {discharge} degC \
         (condensing {tcond} degC).\n\
         \n\
         Provide a technical assessment in at most three paragraphs: \
         thermodynamic efficiency, displacement and fuel trade-off, and \
         driveability / ISC intervention. No markdown headers.",
        ambient = inputs.ambient_c,
        target = inputs.target_c,
        humidity = inputs.humidity_pct,
        rpm = inputs.engine_rpm,
        tech = inputs.tech,
        power = metrics.compressor_power_kw,
        torque = metrics.final_torque_nm,
        status = metrics.idle_status,
        action = metrics.isc_action,
        sensible = metrics.sensible_load_kw,
        latent = metrics.latent_load_kw,
        disp = metrics.displacement_pct,
        fuel = metrics.fuel_penalty_lph,
        cop = metrics.cop,
        discharge = metrics.discharge_temp_c,
        tcond = metrics.t_cond_c,
    )
}

/// Deterministic offline analyst. Produces short commentary from the
/// metrics alone, with no network dependency.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateAnalyst;

impl Analyst for TemplateAnalyst {
    fn analyze(&self, inputs: &SimInputs, metrics: &SystemMetrics) -> Result<String, AnalysisError> {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} at {} RPM delivers a COP of {} against a {} kW total load \
             ({} kW latent).",
            inputs.tech,
            inputs.engine_rpm,
            metrics.cop,
            metrics.cooling_load_kw,
            metrics.latent_load_kw,
        ));

        lines.push(format!(
            "Average shaft power is {} kW for a fuel penalty of {} L/h at \
             {} % stroke.",
            metrics.compressor_power_kw, metrics.fuel_penalty_lph, metrics.displacement_pct,
        ));

        match metrics.isc_action {
            IscAction::None => lines.push(format!(
                "Torque load of {} Nm required no ECU intervention; idle status is {}.",
                metrics.final_torque_nm, metrics.idle_status,
            )),
            action => lines.push(format!(
                "ECU intervention active: {} (idle status {}, final torque {} Nm).",
                action, metrics.idle_status, metrics.final_torque_nm,
            )),
        }

        Ok(lines.join(" "))
    }
}
