//! Error types for the pcm-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// behind one interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Component data error: {0}")]
    Props(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid solver config: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pcm-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pcm_props::PropsError> for AppError {
    fn from(err: pcm_props::PropsError) -> Self {
        AppError::Props(err.to_string())
    }
}

impl From<pcm_solver::SolverError> for AppError {
    fn from(err: pcm_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialize(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Serialize(err.to_string())
    }
}
