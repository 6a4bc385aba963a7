//! pcm-core: shared foundation for the PCM eutectic workspace.
//!
//! Contains:
//! - units (uom SI types, constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
