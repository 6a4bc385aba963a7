//! Binary eutectic solver for phase-change materials.
//!
//! This crate locates the eutectic point of a two-component mixture by
//! intersecting the ideal-solution liquidus curves of both components on a
//! mole-fraction grid, then integrates heat-capacity functions along a
//! seven-leg thermodynamic path to obtain the entropy and enthalpy of forming
//! the eutectic liquid from the two pure solids.
//!
//! # Example
//!
//! ```
//! use pcm_props::ComponentProperties;
//! use pcm_solver::EutecticMixture;
//!
//! let capric = ComponentProperties::from_positional(
//!     "Capric acid",
//!     [172.26, 31.5, 153.0, 120.0, 0.9, 0.0, 280.0, 0.5, 0.0, 0.0],
//! )
//! .unwrap();
//! let lauric = ComponentProperties::from_positional(
//!     "Lauric acid",
//!     [200.32, 43.8, 178.0, 150.0, 0.8, 0.0, 300.0, 0.6, 0.0, 0.0],
//! )
//! .unwrap();
//!
//! let mut mixture = EutecticMixture::new(&capric, &lauric);
//! let point = mixture.solve_eutectic_point().unwrap();
//! assert!(point.temperature_k < capric.fusion_temperature_k());
//!
//! let entropy = mixture.compute_entropy().unwrap();
//! let enthalpy = mixture.compute_enthalpy().unwrap();
//! assert_eq!(entropy.legs.len(), 7);
//! assert_eq!(enthalpy.legs[5], 0.0);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod liquidus;
pub mod mixture;
pub mod paths;
pub mod quadrature;
pub mod search;

pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use grid::GridConfig;
pub use liquidus::{LiquidusCurves, LiquidusPair};
pub use mixture::EutecticMixture;
pub use paths::{LEG_COUNT, MixingPath, PathBreakdown, PathQuantity};
pub use quadrature::{Integral, QuadratureConfig, QuadratureError, integrate};
pub use search::{EutecticPoint, RefineConfig, find_bracket, search_eutectic};
