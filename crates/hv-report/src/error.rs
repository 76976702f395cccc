//! Error types for report and scenario operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scenario: {message}")]
    InvalidScenario { message: String },

    #[error("Series error: {0}")]
    Series(#[from] hv_series::SeriesError),
}

pub type ReportResult<T> = Result<T, ReportError>;

impl From<hv_model::ModelError> for ReportError {
    fn from(e: hv_model::ModelError) -> Self {
        ReportError::InvalidScenario {
            message: e.to_string(),
        }
    }
}
