use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Configuration for the fixed-point thermal solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on the change in base temperature rise between
    /// successive iterates.
    pub tolerance: TemperatureInterval,

    /// Seed state for the iteration.
    pub initial_guess: InitialGuess,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: TemperatureInterval::new::<delta_kelvin>(1e-4),
            initial_guess: InitialGuess::default(),
        }
    }
}

/// Seed values for the first iterate.
///
/// The defaults are small positive values that converge for any physical
/// heatsink; they rarely need changing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialGuess {
    /// Base temperature rise above ambient.
    pub temperature_rise: TemperatureInterval,

    /// Effective film coefficient over the whole surface, in W/(m²·K).
    pub film_coefficient: f64,

    /// Convection coefficient on the fin surfaces, in W/(m²·K).
    pub fin_film_coefficient: f64,
}

impl Default for InitialGuess {
    fn default() -> Self {
        Self {
            temperature_rise: TemperatureInterval::new::<delta_kelvin>(10.0),
            film_coefficient: 10.0,
            fin_film_coefficient: 10.0,
        }
    }
}
