//! Result types for design evaluation and optimization.

use std::fmt;

use uom::si::{
    f64::{Length, Mass, MassDensity, ThermodynamicTemperature, Volume},
    thermodynamic_temperature::degree_celsius,
};

use super::{Design, FasteningStrips};

/// A design with its steady-state temperature and material volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub design: Design,
    pub temperature: ThermodynamicTemperature,
    pub volume: Volume,
}

impl Evaluation {
    pub(super) fn celsius(&self) -> f64 {
        self.temperature.get::<degree_celsius>()
    }
}

/// Which path produced an [`OptimizationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Every dimension was fixed; the single design was evaluated.
    Fixed,
    /// The minimum design already meets the limit with margin.
    LowerBound,
    /// Even the maximum design cannot meet the limit with margin.
    UpperBound,
    /// The design space was searched.
    Search,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Route::Fixed => "fixed",
            Route::LowerBound => "lower bound",
            Route::UpperBound => "upper bound",
            Route::Search => "search",
        })
    }
}

/// The design selected by an optimization run.
///
/// The reported design always has a rib spacing of at least
/// [`MIN_RIB_SPACING`](super::MIN_RIB_SPACING).
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    evaluation: Evaluation,
    route: Route,
    status: String,
}

impl OptimizationResult {
    pub(super) fn new(evaluation: Evaluation, route: Route, status: String) -> Self {
        Self {
            evaluation,
            route,
            status,
        }
    }

    #[must_use]
    pub fn design(&self) -> &Design {
        &self.evaluation.design
    }

    #[must_use]
    pub fn best_height(&self) -> Length {
        self.evaluation.design.height
    }

    #[must_use]
    pub fn best_thickness(&self) -> Length {
        self.evaluation.design.thickness
    }

    #[must_use]
    pub fn best_count(&self) -> u32 {
        self.evaluation.design.count
    }

    /// Steady-state base temperature of the selected design.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.evaluation.temperature
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.evaluation.volume
    }

    /// Heatsink mass for a material of the given density.
    #[must_use]
    pub fn mass(&self, density: MassDensity) -> Mass {
        self.evaluation.volume * density
    }

    /// Mass once mounted, adding the fastening strips to the finned body.
    #[must_use]
    pub fn total_mass(&self, strips: &FasteningStrips, density: MassDensity) -> Mass {
        self.mass(density) + strips.mass(density)
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Human-readable summary of how the design was selected.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}
