//! Surface chemistry errors.

use thiserror::Error;

/// Result type for chemistry-seam operations.
pub type ChemResult<T> = Result<T, ChemError>;

/// Errors surfaced by mixture resolution and surface-state evaluation.
#[derive(Error, Debug)]
pub enum ChemError {
    /// Mixture name did not resolve to a definition file.
    #[error("Mixture not found: {name}")]
    MixtureNotFound { name: String },

    /// Named composition is absent from the resolved mixture.
    #[error("Composition not found in mixture: {name}")]
    CompositionNotFound { name: String },

    /// No equilibrium/mass-balance solution for the given inputs.
    #[error("Surface mass balance did not converge at T={t_k} K, P={p_pa} Pa, B'g={bg}")]
    SurfaceBalanceNonconvergence { t_k: f64, p_pa: f64, bg: f64 },

    /// Non-physical values (negative fractions, non-finite results, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Species formula references an element the mixture does not declare.
    #[error("Species {species} references unknown element {symbol}")]
    UnknownElement { species: String, symbol: String },

    /// Mixture file parsed but failed validation.
    #[error("Malformed mixture definition: {what}")]
    MalformedMixture { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<bp_core::BpError> for ChemError {
    fn from(err: bp_core::BpError) -> Self {
        match err {
            bp_core::BpError::NonFinite { what, .. } => ChemError::NonPhysical { what },
            bp_core::BpError::InvalidArg { what } => ChemError::InvalidArg { what },
            bp_core::BpError::Invariant { what } => ChemError::NonPhysical { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ChemError::MixtureNotFound {
            name: "carbonPhenol".into(),
        };
        assert!(err.to_string().contains("carbonPhenol"));

        let err = ChemError::SurfaceBalanceNonconvergence {
            t_k: 300.0,
            p_pa: 101_325.0,
            bg: 0.5,
        };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("did not converge"));
    }
}
