//! bp-table: parametric sweep engine and table generation for bprime.
//!
//! Provides:
//! - Range specifications ("x1:dx:x2" or scalar) and axis enumeration
//! - Run configuration assembled from command-line arguments
//! - The 3-D pressure × blowing-rate × temperature sweep engine
//! - Fixed-width ASCII table formatting
//!
//! The thermochemical evaluation behind each grid point lives behind
//! `bp_chem::SurfaceModel`; this crate only enumerates the grid, drives the
//! evaluations, and formats the output rows.

pub mod config;
pub mod range;
pub mod sweep;
pub mod table;

// Re-exports for ergonomics
pub use config::{ParsedArgs, RunConfig, UsageError, parse_args, usage};
pub use range::{AdditiveAxis, GeometricAxis, Range, RangeError};
pub use sweep::{SweepError, SweepSummary, run_sweep};
pub use table::{format_header, format_row};
