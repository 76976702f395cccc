//! hv-report: collaborator-facing plumbing around the solver.
//!
//! The core computation lives in hv-model / hv-series and is always
//! complete before anything in this crate runs. This crate provides:
//! - scenario file loading (YAML)
//! - result fingerprinting for caller-side caching
//! - JSON report and CSV series export
//! - the narrative-analysis contract with its offline fallback

pub mod analysis;
pub mod error;
pub mod export;
pub mod fingerprint;
pub mod scenario;

pub use analysis::{ANALYSIS_FALLBACK, Analyst, TemplateAnalyst, analyze_or_fallback, build_prompt};
pub use error::{ReportError, ReportResult};
pub use export::{ReportManifest, SimulationReport, build_report};
pub use fingerprint::input_fingerprint;
pub use scenario::Scenario;
