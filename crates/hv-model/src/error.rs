//! Error types for model operations.

use thiserror::Error;

/// Errors raised at the model boundary.
///
/// The solver pipeline itself is total over validated inputs; the only
/// failure surface is input validation.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Core error: {message}")]
    Core { message: String },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<hv_core::HvError> for ModelError {
    fn from(e: hv_core::HvError) -> Self {
        ModelError::Core {
            message: e.to_string(),
        }
    }
}
