use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, TemperatureInterval},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::constraint::{Constrained, UnitInterval};

/// Configuration for [`Heatsink::optimize`](super::super::Heatsink::optimize).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OptimizeConfig {
    /// Evolutionary search, used when two or more dimensions are free.
    pub search: SearchConfig,

    /// Bisection, used when exactly one continuous dimension is free.
    pub line_search: LineSearchConfig,
}

/// Evolutionary search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Individuals kept after each generation. Must be at least 2.
    pub population_size: usize,

    /// Number of generations to run. Must be at least 1.
    pub generations: usize,

    /// Probability that a selected pair of parents is recombined.
    pub crossover_probability: Constrained<f64, UnitInterval>,

    /// Probability that uniform crossover swaps each gene.
    pub mix_probability: Constrained<f64, UnitInterval>,

    /// Probability that an offspring has one gene redrawn.
    pub mutation_probability: Constrained<f64, UnitInterval>,

    /// Random seed. `None` draws a seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 60,
            generations: 500,
            crossover_probability: Constrained::new_unchecked(0.75),
            mix_probability: Constrained::new_unchecked(0.5),
            mutation_probability: Constrained::new_unchecked(0.1),
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Checks that the configuration can run a search.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the population has fewer than two
    /// individuals or no generations are requested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        Ok(())
    }
}

/// Invalid [`SearchConfig`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("at least one generation is required")]
    NoGenerations,
}

/// Bisection parameters for single-dimension searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the searched height or thickness.
    pub length_tol: Length,

    /// Absolute tolerance on the temperature residual (achieved − limit).
    pub temp_tol: TemperatureInterval,
}

impl Default for LineSearchConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            length_tol: Length::new::<meter>(1e-7),
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
        }
    }
}

impl LineSearchConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.length_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.temp_tol.get::<delta_kelvin>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_is_valid() {
        assert_eq!(SearchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_search() {
        let lonely = SearchConfig {
            population_size: 1,
            ..SearchConfig::default()
        };
        let idle = SearchConfig {
            generations: 0,
            ..SearchConfig::default()
        };

        assert_eq!(lonely.validate(), Err(ConfigError::PopulationTooSmall(1)));
        assert_eq!(idle.validate(), Err(ConfigError::NoGenerations));
    }

    #[test]
    fn bisection_tolerances_in_si() {
        let config = LineSearchConfig::default().bisection();

        assert_eq!(config.max_iters, 100);
        assert!((config.x_abs_tol - 1e-7).abs() < 1e-20);
        assert!((config.residual_tol - 1e-9).abs() < 1e-20);
    }
}
