use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::models::thermal::heatsink::core::GeometryError;

use super::ConfigError;

/// Errors that can occur while optimizing a heatsink design.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// No reachable design fits on the base.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The search configuration is invalid.
    #[error("invalid search configuration")]
    Config(#[from] ConfigError),

    /// The bisection solver encountered an error.
    #[error("line search failed")]
    LineSearch(#[from] bisection::Error),

    /// The line search reached its iteration limit without converging.
    #[error("line search hit iteration limit after {iters} iterations")]
    LineSearchMaxIters { iters: usize },

    /// The evolutionary search ended without a feasible design.
    #[error("search produced no feasible design")]
    InternalSearchFailure,
}
