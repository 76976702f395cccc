//! hv-series: derived series over the steady-state solver.
//!
//! Provides:
//! - Transient cabin pull-down (fixed-step forward integration)
//! - Ambient and engine-speed parameter sweeps
//!
//! Both generators are strictly repeated applications of the hv-model
//! solver (or its load/capacity sub-steps); they hold no state between
//! samples and recompute from scratch for every input set.

pub mod error;
pub mod pulldown;
pub mod sweeps;

use hv_model::SimInputs;
use serde::{Deserialize, Serialize};

pub use error::{SeriesError, SeriesResult};
pub use pulldown::{PullDownOptions, PullDownPoint, pull_down_curve};
pub use sweeps::{AmbientSweepPoint, RpmSweepPoint, ambient_sweep, rpm_sweep};

/// All derived series for one input set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub pull_down_curve: Vec<PullDownPoint>,
    pub ambient_sweep: Vec<AmbientSweepPoint>,
    pub rpm_sweep: Vec<RpmSweepPoint>,
}

/// Generate the pull-down curve and both sweeps for one input set.
pub fn generate_chart_data(inputs: &SimInputs) -> SeriesResult<ChartData> {
    Ok(ChartData {
        pull_down_curve: pull_down_curve(inputs, &PullDownOptions::default())?,
        ambient_sweep: ambient_sweep(inputs),
        rpm_sweep: rpm_sweep(inputs),
    })
}
