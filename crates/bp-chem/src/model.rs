//! Surface-state model trait.

use crate::composition::ElementalComposition;
use crate::error::ChemResult;
use crate::wall::WallState;

/// Trait for equilibrium surface-state backends.
///
/// One instance owns the resolved mixture (species list, element list) and
/// lives for the whole run. Implementations must be thread-safe
/// (Send + Sync). Evaluations are cold per call: implementors may warm-start
/// internally only if the observable result is unchanged within their own
/// tolerance.
pub trait SurfaceModel: Send + Sync {
    /// Backend/mixture name (for diagnostics and logging).
    fn name(&self) -> &str;

    /// Number of elements in the resolved mixture.
    fn n_elements(&self) -> usize;

    /// Number of species in the resolved mixture.
    fn n_species(&self) -> usize;

    /// Species names, in mixture order. Length equals `n_species()`.
    fn species_names(&self) -> &[String];

    /// Resolve a named elemental composition to a mass-fraction vector
    /// ordered by the mixture's element order.
    ///
    /// Fails with `CompositionNotFound` for an unknown name.
    fn composition(&self, name: &str) -> ChemResult<ElementalComposition>;

    /// Solve the equilibrium surface mass balance.
    ///
    /// `yke` and `ykg` are the boundary-layer-edge and pyrolysis-gas
    /// elemental mass fractions; `bg_abs` is the non-negative pyrolysis
    /// blowing magnitude. Fails with `SurfaceBalanceNonconvergence` when no
    /// solution exists; callers do not retry.
    fn surface_mass_balance(
        &self,
        yke: &ElementalComposition,
        ykg: &ElementalComposition,
        t_k: f64,
        p_pa: f64,
        bg_abs: f64,
    ) -> ChemResult<WallState>;
}
