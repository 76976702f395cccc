//! Error types for series generation.

use thiserror::Error;

/// Errors encountered while generating derived series.
#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type SeriesResult<T> = Result<T, SeriesError>;
