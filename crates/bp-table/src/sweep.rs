//! The 3-D sweep engine.
//!
//! Enumerates pressure (multiplicative, outer) × blowing rate (additive,
//! middle) × temperature (additive, inner) and evaluates the surface state
//! at every grid point. Rows are written in enumeration order as soon as the
//! point is evaluated; nothing is retained across points. The signed blowing
//! value is echoed in the table while its absolute value goes into the
//! evaluator.

use crate::range::Range;
use crate::table::{format_header, format_row};
use bp_chem::{ChemError, ElementalComposition, SurfaceModel, validate_wall_state};
use std::io;
use thiserror::Error;

/// Error in sweep execution.
#[derive(Error, Debug)]
pub enum SweepError {
    /// Evaluation or wall-state validation failed; fatal, no per-point skip.
    #[error(transparent)]
    Chem(#[from] ChemError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result of a completed sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    /// Number of grid points evaluated and written.
    pub points: usize,
}

/// Run the full sweep against `model`, writing the header and one row per
/// grid point to `out`.
///
/// `yke` and `ykg` are fixed for the whole run; `ykg` is the all-zero vector
/// when no pyrolysis composition was configured. A failed evaluation aborts
/// the sweep; rows already written stay written.
pub fn run_sweep<M, W>(
    model: &M,
    pressure: Range,
    blowing: Range,
    temperature: Range,
    yke: &ElementalComposition,
    ykg: &ElementalComposition,
    out: &mut W,
) -> Result<SweepSummary, SweepError>
where
    M: SurfaceModel + ?Sized,
    W: io::Write,
{
    tracing::debug!(
        mixture = model.name(),
        n_species = model.n_species(),
        "starting surface-state sweep"
    );

    writeln!(out, "{}", format_header(model.species_names()))?;

    let mut points = 0usize;
    for p_pa in pressure.geometric_points() {
        for bg in blowing.additive_points() {
            for t_k in temperature.additive_points() {
                let wall = model.surface_mass_balance(yke, ykg, t_k, p_pa, bg.abs())?;
                validate_wall_state(&wall, model.n_species())?;
                writeln!(out, "{}", format_row(p_pa, bg, t_k, &wall))?;
                points += 1;
            }
        }
    }

    tracing::info!(points, "sweep complete");
    Ok(SweepSummary { points })
}
