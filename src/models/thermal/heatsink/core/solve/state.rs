use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature, Volume},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume::cubic_meter,
};

use super::config::InitialGuess;

/// One iterate of the fixed-point energy balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxState {
    /// Base temperature rise above ambient, in K.
    pub(super) temperature_rise: f64,
    /// Total conductance divided by the heat-transfer surface, in W/(m²·K).
    pub(super) film_coefficient: f64,
    /// Base temperature, in °C.
    pub(super) base_temperature: f64,
    /// Fin convection coefficient for the next iterate, in W/(m²·K).
    pub(super) fin_film_coefficient: f64,
}

impl ApproxState {
    pub(super) fn seed(guess: &InitialGuess, ambient: f64) -> Self {
        let rise = guess.temperature_rise.get::<delta_kelvin>();
        Self {
            temperature_rise: rise,
            film_coefficient: guess.film_coefficient,
            base_temperature: rise + ambient,
            fin_film_coefficient: guess.fin_film_coefficient,
        }
    }

    #[must_use]
    pub fn temperature_rise(&self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.temperature_rise)
    }

    /// Effective film coefficient over the whole heat-transfer surface, in W/(m²·K).
    #[must_use]
    pub fn film_coefficient(&self) -> f64 {
        self.film_coefficient
    }

    #[must_use]
    pub fn base_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.base_temperature)
    }

    /// Natural-convection coefficient on the fins, in W/(m²·K).
    #[must_use]
    pub fn fin_film_coefficient(&self) -> f64 {
        self.fin_film_coefficient
    }
}

/// Outcome of one thermal solve.
///
/// Owns the full iterate history, starting with the seed state.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalSolution {
    states: Vec<ApproxState>,
    last: ApproxState,
    converged: bool,
    volume: f64,
}

impl ThermalSolution {
    pub(super) fn new(
        states: Vec<ApproxState>,
        last: ApproxState,
        converged: bool,
        volume: f64,
    ) -> Self {
        Self {
            states,
            last,
            converged,
            volume,
        }
    }

    /// Every iterate in order, beginning with the seed.
    #[must_use]
    pub fn states(&self) -> &[ApproxState] {
        &self.states
    }

    /// The final iterate.
    #[must_use]
    pub fn last(&self) -> &ApproxState {
        &self.last
    }

    /// Number of computed iterates, excluding the seed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.states.len() - 1
    }

    /// Returns `false` if the iterate cap was reached first.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Steady-state base temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.last.base_temperature()
    }

    /// Material volume of the base plus ribs.
    #[must_use]
    pub fn volume(&self) -> Volume {
        Volume::new::<cubic_meter>(self.volume)
    }
}
