//! Solver configuration.

use pcm_core::units::constants::GAS_CONSTANT;
use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};
use crate::grid::GridConfig;
use crate::quadrature::QuadratureConfig;
use crate::search::RefineConfig;

/// Everything that tunes a eutectic solve.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial YAML document is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Universal gas constant [J/(mol·K)]
    pub gas_constant: f64,
    pub grid: GridConfig,
    pub refine: RefineConfig,
    pub quadrature: QuadratureConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gas_constant: GAS_CONSTANT,
            grid: GridConfig::default(),
            refine: RefineConfig::default(),
            quadrature: QuadratureConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if !self.gas_constant.is_finite() || self.gas_constant <= 0.0 {
            return Err(SolverError::InvalidConfig {
                what: "gas constant must be positive and finite",
            });
        }
        self.grid
            .validate()
            .and_then(|()| self.refine.validate())
            .and_then(|()| self.quadrature.validate())
            .map_err(|what| SolverError::InvalidConfig { what })
    }
}
