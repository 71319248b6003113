//! Mixture catalog: YAML definition files resolved by name.
//!
//! A mixture file declares the element list (with molar masses), the species
//! list, and the named elemental compositions a run can reference. Element
//! order in the file fixes the index order of every composition vector.

use crate::composition::ElementalComposition;
use crate::error::{ChemError, ChemResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One chemical element of the mixture.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementEntry {
    pub symbol: String,
    /// Molar mass [kg/kmol]
    pub molar_mass: f64,
}

/// Parsed mixture definition.
#[derive(Debug, Clone, Deserialize)]
pub struct MixtureFile {
    pub name: String,
    pub elements: Vec<ElementEntry>,
    pub species: Vec<String>,
    /// Named elemental compositions, mass-fraction basis, keyed by element symbol.
    pub compositions: BTreeMap<String, BTreeMap<String, f64>>,
}

impl MixtureFile {
    /// Parse and validate a mixture definition from YAML text.
    pub fn parse_str(yaml: &str) -> ChemResult<Self> {
        let mixture: MixtureFile = serde_yaml::from_str(yaml)?;
        mixture.validate()?;
        Ok(mixture)
    }

    fn validate(&self) -> ChemResult<()> {
        if self.elements.is_empty() {
            return Err(ChemError::MalformedMixture {
                what: "mixture declares no elements".into(),
            });
        }
        if self.species.is_empty() {
            return Err(ChemError::MalformedMixture {
                what: "mixture declares no species".into(),
            });
        }
        for entry in &self.elements {
            if !entry.molar_mass.is_finite() || entry.molar_mass <= 0.0 {
                return Err(ChemError::MalformedMixture {
                    what: format!("element {} has non-positive molar mass", entry.symbol),
                });
            }
            let count = self
                .elements
                .iter()
                .filter(|e| e.symbol == entry.symbol)
                .count();
            if count > 1 {
                return Err(ChemError::MalformedMixture {
                    what: format!("element {} declared more than once", entry.symbol),
                });
            }
        }
        for (name, fractions) in &self.compositions {
            for symbol in fractions.keys() {
                if self.element_index(symbol).is_none() {
                    return Err(ChemError::MalformedMixture {
                        what: format!("composition {name} references unknown element {symbol}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Index of an element symbol in the mixture's element order.
    pub fn element_index(&self, symbol: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.symbol == symbol)
    }

    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    /// Resolve a named composition to a mass-fraction vector in element order.
    pub fn composition_vector(&self, name: &str) -> ChemResult<ElementalComposition> {
        let fractions = self
            .compositions
            .get(name)
            .ok_or_else(|| ChemError::CompositionNotFound { name: name.into() })?;

        let mut ordered = vec![0.0; self.elements.len()];
        for (symbol, frac) in fractions {
            // validate() guarantees the symbol resolves
            if let Some(index) = self.element_index(symbol) {
                ordered[index] = *frac;
            }
        }
        ElementalComposition::from_mass_fractions(ordered)
    }
}

/// Load a mixture by name.
///
/// The name is tried as a literal path, then `NAME.yaml`, then
/// `mixtures/NAME.yaml` relative to the working directory. An unresolvable
/// name fails with `MixtureNotFound`.
pub fn load_mixture(name: &str) -> ChemResult<MixtureFile> {
    let path = resolve_mixture_path(name).ok_or_else(|| ChemError::MixtureNotFound {
        name: name.to_string(),
    })?;
    tracing::debug!(mixture = name, path = %path.display(), "loading mixture definition");
    let content = std::fs::read_to_string(&path)?;
    MixtureFile::parse_str(&content)
}

fn resolve_mixture_path(name: &str) -> Option<PathBuf> {
    let candidates = [
        PathBuf::from(name),
        PathBuf::from(format!("{name}.yaml")),
        Path::new("mixtures").join(format!("{name}.yaml")),
    ];
    candidates.into_iter().find(|p| p.is_file())
}
