//! Correlation-based surface-state backend.
//!
//! This module provides a closed-form stand-in for a full equilibrium
//! library. The char consumption rate uses the classic carbon-ablation
//! regimes (kinetically attenuated oxidation plateau plus a sublimation
//! term), the wall enthalpy uses a frozen-cp model, and the wall species
//! mole fractions come from a deterministic partition of the wall elemental
//! feed over the species list.
//!
//! The surrogate is NOT a general replacement for an equilibrium solver. It
//! keeps the workspace runnable and testable end-to-end; deployments with a
//! real thermochemical backend implement `SurfaceModel` against it instead.

use crate::catalog::{ElementEntry, MixtureFile};
use crate::composition::ElementalComposition;
use crate::error::{ChemError, ChemResult};
use crate::model::SurfaceModel;
use crate::wall::WallState;

/// Element index paired with its atom count in a species formula.
type Stoichiometry = Vec<(usize, u32)>;

/// Surface model built from a mixture definition and ablation correlations.
#[derive(Debug, Clone)]
pub struct CorrelationSurface {
    mixture: MixtureFile,
    stoichiometry: Vec<Stoichiometry>,
    carbon_index: Option<usize>,
    oxygen_index: Option<usize>,
    /// Frozen specific heat capacity for the wall enthalpy model [J/(kg·K)]
    pub cp_frozen: f64,
    /// Reference enthalpy at `t_ref` [J/kg]
    pub h_ref: f64,
    /// Reference temperature for the enthalpy model [K]
    pub t_ref: f64,
}

impl CorrelationSurface {
    /// Frozen cp default for decomposed-TPS boundary-layer gas [J/(kg·K)]
    pub const CP_FROZEN_J_PER_KG_K: f64 = 1.7e3;
    /// Enthalpy reference temperature [K]
    pub const T_REF_K: f64 = 298.15;

    /// Oxidation kinetics onset temperature [K]
    const KINETIC_ONSET_K: f64 = 1100.0;
    /// Width of the kinetic-to-diffusion transition [K]
    const KINETIC_SCALE_K: f64 = 80.0;
    /// Carbon sublimation activation temperature, ΔH_sub/R [K]
    const SUBLIMATION_ACTIVATION_K: f64 = 8.6e4;
    /// Sublimation prefactor at one atmosphere
    const SUBLIMATION_PREFACTOR: f64 = 2.0e11;
    const ATM_PA: f64 = 101_325.0;

    /// Build a surface model from a validated mixture definition.
    ///
    /// Every species name is parsed as a chemical formula against the
    /// mixture's element list; an unknown symbol fails construction.
    pub fn new(mixture: MixtureFile) -> ChemResult<Self> {
        let stoichiometry = mixture
            .species
            .iter()
            .map(|formula| parse_formula(formula, &mixture.elements))
            .collect::<ChemResult<Vec<_>>>()?;

        let carbon_index = mixture.element_index("C");
        let oxygen_index = mixture.element_index("O");

        Ok(Self {
            mixture,
            stoichiometry,
            carbon_index,
            oxygen_index,
            cp_frozen: Self::CP_FROZEN_J_PER_KG_K,
            h_ref: 0.0,
            t_ref: Self::T_REF_K,
        })
    }

    /// Diffusion-limited oxidation plateau with low-temperature kinetic
    /// attenuation, plus the sublimation contribution.
    fn char_blowing_rate(&self, y_o_feed: f64, t_k: f64, p_pa: f64) -> f64 {
        let Some(c_idx) = self.carbon_index else {
            return 0.0;
        };

        let m_c = self.mixture.elements[c_idx].molar_mass;
        let plateau = match self.oxygen_index {
            Some(o_idx) => (m_c / self.mixture.elements[o_idx].molar_mass) * y_o_feed,
            None => 0.0,
        };

        let kinetic = 1.0 / (1.0 + ((Self::KINETIC_ONSET_K - t_k) / Self::KINETIC_SCALE_K).exp());
        let sublimation = Self::SUBLIMATION_PREFACTOR
            * (Self::ATM_PA / p_pa)
            * (-Self::SUBLIMATION_ACTIVATION_K / t_k).exp();

        plateau * kinetic + sublimation
    }

    /// Frozen-cp wall enthalpy.
    ///
    /// ```text
    /// hw(T) ≈ h_ref + cp_frozen * (T - T_ref)
    /// ```
    fn wall_enthalpy(&self, t_k: f64) -> f64 {
        self.h_ref + self.cp_frozen * (t_k - self.t_ref)
    }

    /// Wall species mole fractions from the wall elemental feed.
    ///
    /// Each species' share is proportional to its limiting element
    /// availability (element moles divided by the formula's atom count),
    /// normalized to sum 1. A coarse partition, not an equilibrium solve.
    fn wall_mole_fractions(&self, wall_feed: &[f64]) -> ChemResult<Vec<f64>> {
        let element_moles: Vec<f64> = wall_feed
            .iter()
            .zip(&self.mixture.elements)
            .map(|(y, e)| y / e.molar_mass)
            .collect();

        let mut fractions = Vec::with_capacity(self.stoichiometry.len());
        for stoich in &self.stoichiometry {
            let availability = stoich
                .iter()
                .map(|(index, count)| element_moles[*index] / f64::from(*count))
                .fold(f64::INFINITY, f64::min);
            fractions.push(availability.max(0.0));
        }

        let total: f64 = fractions.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(ChemError::NonPhysical {
                what: "no species can be assembled from the wall elemental state",
            });
        }

        for x in &mut fractions {
            *x /= total;
        }
        Ok(fractions)
    }
}

impl SurfaceModel for CorrelationSurface {
    fn name(&self) -> &str {
        &self.mixture.name
    }

    fn n_elements(&self) -> usize {
        self.mixture.n_elements()
    }

    fn n_species(&self) -> usize {
        self.mixture.n_species()
    }

    fn species_names(&self) -> &[String] {
        &self.mixture.species
    }

    fn composition(&self, name: &str) -> ChemResult<ElementalComposition> {
        self.mixture.composition_vector(name)
    }

    fn surface_mass_balance(
        &self,
        yke: &ElementalComposition,
        ykg: &ElementalComposition,
        t_k: f64,
        p_pa: f64,
        bg_abs: f64,
    ) -> ChemResult<WallState> {
        if !t_k.is_finite() || t_k <= 0.0 || !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(ChemError::SurfaceBalanceNonconvergence {
                t_k,
                p_pa,
                bg: bg_abs,
            });
        }
        if !bg_abs.is_finite() || bg_abs < 0.0 {
            return Err(ChemError::InvalidArg {
                what: "blowing magnitude must be non-negative and finite",
            });
        }
        if yke.len() != self.n_elements() || ykg.len() != self.n_elements() {
            return Err(ChemError::InvalidArg {
                what: "composition length must match the mixture element count",
            });
        }

        let y_o_feed = match self.oxygen_index {
            Some(o_idx) => yke.fraction(o_idx) + bg_abs * ykg.fraction(o_idx),
            None => 0.0,
        };
        let bc = self.char_blowing_rate(y_o_feed, t_k, p_pa);
        let hw_j_per_kg = self.wall_enthalpy(t_k);

        // Wall elemental feed: edge (1) + pyrolysis (B'g) + char (B'c)
        let denom = 1.0 + bg_abs + bc;
        let wall_feed: Vec<f64> = (0..self.n_elements())
            .map(|i| {
                let char_part = if Some(i) == self.carbon_index { bc } else { 0.0 };
                (yke.fraction(i) + bg_abs * ykg.fraction(i) + char_part) / denom
            })
            .collect();

        let species_mole_fractions = self.wall_mole_fractions(&wall_feed)?;

        Ok(WallState {
            bc,
            hw_j_per_kg,
            species_mole_fractions,
        })
    }
}

/// Parse a species formula ("CO2", "HCN") against the mixture element list.
fn parse_formula(formula: &str, elements: &[ElementEntry]) -> ChemResult<Stoichiometry> {
    let chars: Vec<char> = formula.chars().collect();
    let mut stoich: Stoichiometry = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_uppercase() {
            return Err(ChemError::UnknownElement {
                species: formula.to_string(),
                symbol: chars[i].to_string(),
            });
        }
        let mut symbol = chars[i].to_string();
        i += 1;
        while i < chars.len() && chars[i].is_ascii_lowercase() {
            symbol.push(chars[i]);
            i += 1;
        }

        let mut count: u32 = 0;
        while i < chars.len() && chars[i].is_ascii_digit() {
            count = count * 10 + chars[i].to_digit(10).unwrap_or(0);
            i += 1;
        }
        let count = count.max(1);

        let index = elements
            .iter()
            .position(|e| e.symbol == symbol)
            .ok_or_else(|| ChemError::UnknownElement {
                species: formula.to_string(),
                symbol: symbol.clone(),
            })?;

        match stoich.iter_mut().find(|(idx, _)| *idx == index) {
            Some((_, existing)) => *existing += count,
            None => stoich.push((index, count)),
        }
    }

    if stoich.is_empty() {
        return Err(ChemError::MalformedMixture {
            what: format!("species {formula:?} has an empty formula"),
        });
    }
    Ok(stoich)
}
