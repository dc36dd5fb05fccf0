//! Steady-state finned heatsink modeling and design search.
//!
//! The core has three layers, each consuming the one below it:
//!
//! 1. `solve`: a fixed-point energy balance giving the base temperature
//!    and material volume of one fixed design.
//! 2. `analyze`: feasibility checks and boundary classification of a
//!    requested design space.
//! 3. `optimize`: routes to the direct, boundary, or search path and
//!    packages an [`OptimizationResult`].

mod analyze;
mod geometry;
mod input;
mod optimize;
mod results;
mod solve;

#[cfg(test)]
pub(super) mod test_support;

pub use analyze::{AnalysisOutcome, Classification, GeometryError, UnrealizableCase};
pub use geometry::MIN_RIB_SPACING;
pub use input::{
    Bounds, Design, Dimension, FasteningError, FasteningStrips, RangeError, RibRange,
    StaticParameters,
};
pub use optimize::{ConfigError, LineSearchConfig, OptimizeConfig, OptimizeError, SearchConfig};
pub use results::{Evaluation, OptimizationResult, Route};
pub use solve::{ApproxState, InitialGuess, MAX_ITERATES, SolverConfig, ThermalSolution};

use uom::si::f64::ThermodynamicTemperature;

use analyze::analyze;
use optimize::optimize;
use solve::solve;

/// Entry point for evaluating and optimizing a finned heatsink.
///
/// A `Heatsink` binds the fixed [`StaticParameters`] of a design problem
/// (base plate, power, ambient, material) to a [`SolverConfig`].
/// Rib geometry is supplied per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heatsink {
    params: StaticParameters,
    config: SolverConfig,
}

impl Heatsink {
    /// Creates a heatsink with the default solver configuration.
    #[must_use]
    pub fn new(params: StaticParameters) -> Self {
        Self::with_config(params, SolverConfig::default())
    }

    /// Creates a heatsink with an explicit solver configuration.
    #[must_use]
    pub fn with_config(params: StaticParameters, config: SolverConfig) -> Self {
        Self { params, config }
    }

    /// Returns the static parameters.
    #[must_use]
    pub fn params(&self) -> &StaticParameters {
        &self.params
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves the steady-state energy balance for one rib design.
    ///
    /// The design does not need to satisfy the minimum rib spacing.
    /// Non-convergence is not an error: after [`MAX_ITERATES`] iterations the
    /// last computed state is returned with [`ThermalSolution::converged`]
    /// set to `false`.
    #[must_use]
    pub fn solve(&self, design: &Design) -> ThermalSolution {
        solve(design, &self.params, &self.config)
    }

    /// Solves one design and reports its temperature and volume.
    #[must_use]
    pub fn evaluate(&self, design: &Design) -> Evaluation {
        let solution = self.solve(design);
        Evaluation {
            design: *design,
            temperature: solution.temperature(),
            volume: solution.volume(),
        }
    }

    /// Checks rib spacing feasibility and classifies a design space.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if no reachable design in the range has a
    /// rib spacing of at least [`MIN_RIB_SPACING`].
    pub fn analyze(
        &self,
        range: &RibRange,
        limit: ThermodynamicTemperature,
    ) -> Result<AnalysisOutcome, GeometryError> {
        analyze(self, range, limit)
    }

    /// Finds the design in `range` that meets `limit` with the least material.
    ///
    /// # Errors
    ///
    /// Returns an [`OptimizeError`] if the geometry is unrealizable, the
    /// search configuration is invalid, or the search fails internally.
    pub fn optimize(
        &self,
        range: &RibRange,
        limit: ThermodynamicTemperature,
        config: &OptimizeConfig,
    ) -> Result<OptimizationResult, OptimizeError> {
        optimize(self, range, limit, config)
    }
}
