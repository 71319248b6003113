//! Equilibrium wall state returned by surface models.

use crate::error::{ChemError, ChemResult};
use bp_core::numeric::ensure_finite;

/// Equilibrium surface state for one (T, P, B'g) grid point.
///
/// Produced fresh by the backend per evaluation; never cached across grid
/// points.
#[derive(Debug, Clone, PartialEq)]
pub struct WallState {
    /// Char blowing-rate parameter B'c (dimensionless)
    pub bc: f64,
    /// Wall enthalpy [J/kg]
    pub hw_j_per_kg: f64,
    /// Wall species mole fractions, in mixture species order
    pub species_mole_fractions: Vec<f64>,
}

/// Numeric-safety policy applied to every evaluator result.
///
/// Replaces process-wide floating-point traps: a NaN/Inf or a malformed mole
/// fraction vector coming back from the backend is a fatal error at the call
/// site.
pub fn validate_wall_state(state: &WallState, n_species: usize) -> ChemResult<()> {
    ensure_finite(state.bc, "char blowing rate")?;
    ensure_finite(state.hw_j_per_kg, "wall enthalpy")?;
    if state.species_mole_fractions.len() != n_species {
        return Err(ChemError::NonPhysical {
            what: "mole fraction vector length must equal the species count",
        });
    }
    for x in &state.species_mole_fractions {
        ensure_finite(*x, "species mole fraction")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(bc: f64, hw: f64, x: Vec<f64>) -> WallState {
        WallState {
            bc,
            hw_j_per_kg: hw,
            species_mole_fractions: x,
        }
    }

    #[test]
    fn valid_state_passes() {
        let state = wall(0.17, 1.2e6, vec![0.5, 0.5]);
        assert!(validate_wall_state(&state, 2).is_ok());
    }

    #[test]
    fn nan_bc_rejected() {
        let state = wall(f64::NAN, 1.2e6, vec![0.5, 0.5]);
        assert!(validate_wall_state(&state, 2).is_err());
    }

    #[test]
    fn infinite_enthalpy_rejected() {
        let state = wall(0.1, f64::INFINITY, vec![1.0]);
        assert!(validate_wall_state(&state, 1).is_err());
    }

    #[test]
    fn short_mole_fraction_vector_rejected() {
        let state = wall(0.1, 0.0, vec![1.0]);
        assert!(validate_wall_state(&state, 3).is_err());
    }

    #[test]
    fn non_finite_mole_fraction_rejected() {
        let state = wall(0.1, 0.0, vec![0.5, f64::NAN]);
        assert!(validate_wall_state(&state, 2).is_err());
    }
}
