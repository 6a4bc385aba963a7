//! Property record errors.

use std::path::PathBuf;

use pcm_core::CoreError;
use thiserror::Error;

/// Result type for property operations.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur while building or loading substance records.
#[derive(Error, Debug)]
pub enum PropsError {
    /// A record failed validation (non-positive molar mass, non-finite value, ...).
    #[error("Invalid component data for '{name}': {reason}")]
    InvalidComponentData { name: String, reason: String },

    /// A reference-table row failed validation.
    #[error("Invalid reference entry '{pair}': {reason}")]
    InvalidReferenceData { pair: String, reason: String },

    /// Lookup by name found nothing.
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    #[error("Failed to open table: {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PropsError {
    pub(crate) fn invalid_component(name: &str, err: CoreError) -> Self {
        PropsError::InvalidComponentData {
            name: name.to_string(),
            reason: err.to_string(),
        }
    }
}
