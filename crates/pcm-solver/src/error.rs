//! Error types for solver operations.

use pcm_core::CoreError;
use thiserror::Error;

use crate::quadrature::QuadratureError;

/// Errors that can occur while solving a binary mixture.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error(
        "No liquidus intersection found for x_A in [{start}, {end}) ({samples} samples)"
    )]
    NoIntersectionFound {
        start: f64,
        end: f64,
        samples: usize,
    },

    #[error("State not ready: {what}")]
    StateNotReady { what: &'static str },

    #[error("Domain error: {what}")]
    DomainError { what: String },

    #[error(
        "Integration did not converge after {subdivisions} subdivisions (error estimate {abs_error:e})"
    )]
    IntegrationDidNotConverge { subdivisions: usize, abs_error: f64 },

    #[error("Invalid solver config: {what}")]
    InvalidConfig { what: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<CoreError> for SolverError {
    fn from(err: CoreError) -> Self {
        SolverError::DomainError {
            what: err.to_string(),
        }
    }
}

impl From<QuadratureError> for SolverError {
    fn from(err: QuadratureError) -> Self {
        match err {
            QuadratureError::DidNotConverge {
                subdivisions,
                abs_error,
            } => SolverError::IntegrationDidNotConverge {
                subdivisions,
                abs_error,
            },
            other => SolverError::DomainError {
                what: other.to_string(),
            },
        }
    }
}
