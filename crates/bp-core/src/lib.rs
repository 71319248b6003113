//! bp-core: stable foundation for the bprime workspace.
//!
//! Contains:
//! - error (shared error types)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom-backed unit types and conversion helpers)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BpError, BpResult};
pub use numeric::*;
pub use units::*;
