//! bp-chem: surface thermochemistry seam for bprime.
//!
//! Provides:
//! - Elemental composition handling (mass-fraction basis)
//! - Wall state representation and numeric-safety validation
//! - SurfaceModel trait for equilibrium surface-state backends
//! - YAML mixture catalog (element/species lists, named compositions)
//! - Correlation-based surrogate backend
//!
//! # Architecture
//!
//! This crate defines a stable API (`SurfaceModel` trait) that isolates the
//! sweep and table machinery from the thermochemical backend. The in-tree
//! `CorrelationSurface` is a closed-form stand-in so the workspace runs and
//! tests end-to-end; deployments with a full equilibrium library implement
//! `SurfaceModel` against it.

pub mod catalog;
pub mod composition;
pub mod error;
pub mod model;
pub mod surrogate;
pub mod wall;

// Re-exports for ergonomics
pub use catalog::{ElementEntry, MixtureFile, load_mixture};
pub use composition::ElementalComposition;
pub use error::{ChemError, ChemResult};
pub use model::SurfaceModel;
pub use surrogate::CorrelationSurface;
pub use wall::{WallState, validate_wall_state};
