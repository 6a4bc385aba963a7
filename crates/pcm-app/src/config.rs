//! Solver configuration loading.

use std::path::Path;

use pcm_solver::SolverConfig;

use crate::error::{AppError, AppResult};

/// Load and validate a solver config from a YAML file.
///
/// Keys left out of the file keep their default values.
pub fn load_solver_config(path: &Path) -> AppResult<SolverConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_solver_config(&content)?;
    tracing::debug!(path = %path.display(), "loaded solver config");
    Ok(config)
}

/// Parse and validate a solver config from YAML text.
pub fn parse_solver_config(content: &str) -> AppResult<SolverConfig> {
    let config: SolverConfig = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("Failed to parse solver config YAML: {}", e)))?;
    config
        .validate()
        .map_err(|e| AppError::Config(e.to_string()))?;
    Ok(config)
}

/// The default solver config rendered as YAML.
pub fn default_config_yaml() -> AppResult<String> {
    serde_yaml::to_string(&SolverConfig::default())
        .map_err(|e| AppError::Serialize(format!("Failed to serialize solver config: {}", e)))
}
