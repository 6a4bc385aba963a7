//! pcm-props: pure-substance property records for phase-change materials.
//!
//! Provides:
//! - Heat-capacity polynomials for the solid and liquid phases
//! - `ComponentRecord`, the structured raw input row
//! - `ComponentProperties`, the validated SI-consistent substance record
//! - `ComponentCatalog`, a CSV-backed table of records
//! - `ReferenceTable`, known eutectic temperatures and nearest-match recommendations
//!
//! # Example
//!
//! ```
//! use pcm_props::{ComponentProperties, ComponentRecord};
//!
//! let record = ComponentRecord {
//!     name: "Lauric acid".into(),
//!     molar_mass: 200.32,
//!     fusion_temperature_c: 43.8,
//!     specific_heat_of_fusion: 178.0,
//!     cp_solid_a: 150.0,
//!     cp_solid_b: 0.8,
//!     cp_solid_c: 0.0,
//!     cp_liquid_a: 300.0,
//!     cp_liquid_b: 0.6,
//!     cp_liquid_c: 0.0,
//!     cp_liquid_d: 0.0,
//! };
//!
//! let lauric = ComponentProperties::from_record(record).unwrap();
//! assert!((lauric.fusion_temperature_k() - 316.95).abs() < 1e-9);
//! ```

pub mod catalog;
pub mod component;
pub mod error;
pub mod heat_capacity;
pub mod reference;

// Re-exports for ergonomics
pub use catalog::ComponentCatalog;
pub use component::{ComponentProperties, ComponentRecord};
pub use error::{PropsError, PropsResult};
pub use heat_capacity::{HeatCapacity, LiquidBlend, LiquidHeatCapacity, SolidHeatCapacity};
pub use reference::{Recommendation, ReferenceEntry, ReferenceTable};
