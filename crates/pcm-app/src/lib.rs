//! Shared application service layer for the PCM eutectic tools.
//!
//! Front ends go through this crate to load catalogs and solver configs,
//! analyze component pairs and render the resulting reports.

pub mod analysis;
pub mod config;
pub mod data_service;
pub mod error;
pub mod export;

// Re-export key types for convenience
pub use analysis::{ComponentSummary, MixtureReport, analyze_components, analyze_pair};
pub use config::{default_config_yaml, load_solver_config, parse_solver_config};
pub use data_service::{DEFAULT_RECOMMENDATIONS, list_components, load_catalog, recommend_pairs};
pub use error::{AppError, AppResult};
pub use export::{liquidus_csv, report_json, report_yaml};
