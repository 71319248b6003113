//! Elemental compositions (mass-fraction basis).

use crate::error::{ChemError, ChemResult};
use bp_core::numeric::ensure_finite;

/// Ordered elemental mass-fraction vector, indexed by element position in the
/// owning mixture.
///
/// Constructed once per run (boundary-layer edge and pyrolysis gas) and
/// passed by reference into every surface-state evaluation. Always normalized
/// to sum 1, except for the dedicated all-zero vector used when no pyrolysis
/// composition is given.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementalComposition {
    fractions: Vec<f64>,
}

impl ElementalComposition {
    /// All-zero vector of the given length. Stands for "no pyrolysis gas".
    pub fn zeros(n_elements: usize) -> Self {
        Self {
            fractions: vec![0.0; n_elements],
        }
    }

    /// Create a composition from elemental mass fractions.
    ///
    /// Validates that all fractions are finite, non-negative, and have a
    /// positive sum, then normalizes to sum=1.
    pub fn from_mass_fractions(fractions: Vec<f64>) -> ChemResult<Self> {
        if fractions.is_empty() {
            return Err(ChemError::InvalidArg {
                what: "empty composition",
            });
        }

        let mut sum = 0.0;
        for frac in &fractions {
            ensure_finite(*frac, "mass fraction")?;
            if *frac < 0.0 {
                return Err(ChemError::NonPhysical {
                    what: "negative mass fraction",
                });
            }
            sum += frac;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(ChemError::NonPhysical {
                what: "mass fractions sum to zero or non-finite",
            });
        }

        Ok(Self {
            fractions: fractions.into_iter().map(|f| f / sum).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Mass fraction of the element at `index` (0.0 if out of range).
    pub fn fraction(&self, index: usize) -> f64 {
        self.fractions.get(index).copied().unwrap_or(0.0)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.fractions
    }

    /// True when every entry is exactly zero (the no-pyrolysis vector).
    pub fn is_zero(&self) -> bool {
        self.fractions.iter().all(|f| *f == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn normalization_to_unit_sum() {
        let comp = ElementalComposition::from_mass_fractions(vec![2.0, 8.0]).unwrap();

        let tol = Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        };
        assert!(nearly_equal(comp.fraction(0), 0.2, tol));
        assert!(nearly_equal(comp.fraction(1), 0.8, tol));
    }

    #[test]
    fn zeros_stay_zero() {
        let comp = ElementalComposition::zeros(4);
        assert_eq!(comp.len(), 4);
        assert!(comp.is_zero());
        assert_eq!(comp.fraction(2), 0.0);
    }

    #[test]
    fn out_of_range_fraction_is_zero() {
        let comp = ElementalComposition::from_mass_fractions(vec![1.0]).unwrap();
        assert_eq!(comp.fraction(7), 0.0);
    }

    #[test]
    fn invalid_negative_fraction() {
        let result = ElementalComposition::from_mass_fractions(vec![-0.5, 1.5]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_zero_sum() {
        let result = ElementalComposition::from_mass_fractions(vec![0.0, 0.0]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_non_finite() {
        let result = ElementalComposition::from_mass_fractions(vec![f64::NAN]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_input_rejected() {
        assert!(ElementalComposition::from_mass_fractions(vec![]).is_err());
    }
}
