//! pf-core: stable foundation for procflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable compact handles for flowsheet objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
