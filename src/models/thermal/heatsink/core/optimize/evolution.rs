//! Population-based search over two or three free dimensions.
//!
//! Infeasible designs stay in the population with the worst possible fitness
//! so the population size never changes.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use uom::si::{f64::Length, length::meter};

use crate::models::thermal::heatsink::core::{
    Design, Dimension, Evaluation, Heatsink, RibRange, geometry,
};

use super::{OptimizeError, SearchConfig};

/// A candidate with its fitness `1 / (limit − T)`.
#[derive(Debug, Clone, Copy)]
struct Individual {
    design: Design,
    fitness: f64,
}

struct Search<'a> {
    heatsink: &'a Heatsink,
    range: &'a RibRange,
    active: &'a [Dimension],
    limit: f64,
    config: &'a SearchConfig,
    rng: StdRng,
}

/// Runs the evolutionary search and returns the fittest design, evaluated.
///
/// The caller must have validated `config`.
pub(super) fn search(
    heatsink: &Heatsink,
    range: &RibRange,
    active: &[Dimension],
    limit: f64,
    config: &SearchConfig,
) -> Result<Evaluation, OptimizeError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut search = Search {
        heatsink,
        range,
        active,
        limit,
        config,
        rng,
    };

    let best = search.run();
    if best.fitness == f64::NEG_INFINITY {
        return Err(OptimizeError::InternalSearchFailure);
    }

    Ok(heatsink.evaluate(&best.design))
}

impl Search<'_> {
    fn run(&mut self) -> Individual {
        let size = self.config.population_size;

        let mut population = Vec::with_capacity(2 * size);
        population.push(self.individual(self.range.min_design()));
        while population.len() < size {
            let design = self.random_design();
            population.push(self.individual(design));
        }
        sort(&mut population);

        for _ in 0..self.config.generations {
            let offspring = self.breed(&population);
            population.extend(offspring);
            sort(&mut population);
            population.truncate(size);
        }

        population[0]
    }

    /// Produces one generation of offspring from the fitter half.
    fn breed(&mut self, population: &[Individual]) -> Vec<Individual> {
        let size = self.config.population_size;
        let elite = (size / 2).max(2).min(population.len());
        let mut pool: Vec<Design> = population[..elite].iter().map(|i| i.design).collect();
        let crossover = self.config.crossover_probability.into_inner();
        let mutation = self.config.mutation_probability.into_inner();

        let mut offspring = Vec::with_capacity(size);
        while offspring.len() < size {
            pool.shuffle(&mut self.rng);
            for pair in pool.chunks_exact(2) {
                let (a, b) = if self.rng.gen_bool(crossover) {
                    self.crossover(pair[0], pair[1])
                } else {
                    (pair[0], pair[1])
                };

                for child in [a, b] {
                    let child = if self.rng.gen_bool(mutation) {
                        self.mutate(child)
                    } else {
                        child
                    };
                    offspring.push(self.individual(child));
                }
                if offspring.len() >= size {
                    break;
                }
            }
        }

        offspring.truncate(size);
        offspring
    }

    /// Uniform crossover over the active genes.
    fn crossover(&mut self, mut a: Design, mut b: Design) -> (Design, Design) {
        let mix = self.config.mix_probability.into_inner();
        for &dimension in self.active {
            if self.rng.gen_bool(mix) {
                match dimension {
                    Dimension::Height => std::mem::swap(&mut a.height, &mut b.height),
                    Dimension::Thickness => std::mem::swap(&mut a.thickness, &mut b.thickness),
                    Dimension::Count => std::mem::swap(&mut a.count, &mut b.count),
                }
            }
        }
        (a, b)
    }

    /// Redraws one random active gene.
    fn mutate(&mut self, design: Design) -> Design {
        let active = self.active;
        match active.choose(&mut self.rng).copied() {
            Some(dimension) => self.redraw(design, dimension),
            None => design,
        }
    }

    fn random_design(&mut self) -> Design {
        let active = self.active;
        let mut design = self.range.min_design();
        for &dimension in active {
            design = self.redraw(design, dimension);
        }
        design
    }

    fn redraw(&mut self, design: Design, dimension: Dimension) -> Design {
        match dimension {
            Dimension::Height => Design {
                height: self.draw_length(self.range.height().min, self.range.height().max),
                ..design
            },
            Dimension::Thickness => Design {
                thickness: self.draw_length(self.range.thickness().min, self.range.thickness().max),
                ..design
            },
            Dimension::Count => Design {
                count: self.rng.gen_range(self.range.count().min..=self.range.count().max),
                ..design
            },
        }
    }

    /// Uniform draw rounded to the grid and kept inside the bounds.
    fn draw_length(&mut self, min: Length, max: Length) -> Length {
        let (min, max) = (min.get::<meter>(), max.get::<meter>());
        let value = geometry::round_to_grid(self.rng.gen_range(min..=max)).clamp(min, max);
        Length::new::<meter>(value)
    }

    fn individual(&self, design: Design) -> Individual {
        Individual {
            design,
            fitness: self.fitness(&design),
        }
    }

    fn fitness(&self, design: &Design) -> f64 {
        if !design.is_realizable(self.heatsink.params()) {
            return f64::NEG_INFINITY;
        }
        let temperature = self.heatsink.evaluate(design).celsius();
        let fitness = 1.0 / (self.limit - temperature);
        if fitness.is_nan() {
            f64::NEG_INFINITY
        } else {
            fitness
        }
    }
}

/// Sorts by descending fitness.
fn sort(population: &mut [Individual]) {
    population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermal::heatsink::core::test_support::{range, reference_heatsink};

    fn small(seed: u64) -> SearchConfig {
        SearchConfig {
            population_size: 24,
            generations: 40,
            seed: Some(seed),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn finds_feasible_design_below_limit() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 3.0), (5, 10));
        let active = [Dimension::Height, Dimension::Thickness, Dimension::Count];

        let best = search(&heatsink, &range, &active, 70.0, &small(11)).unwrap();

        assert!(best.design.is_realizable(heatsink.params()));
        assert!(best.celsius() < 70.0);
    }

    #[test]
    fn same_seed_same_result() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 3.0), (5, 10));
        let active = [Dimension::Height, Dimension::Thickness, Dimension::Count];

        let first = search(&heatsink, &range, &active, 70.0, &small(3)).unwrap();
        let second = search(&heatsink, &range, &active, 70.0, &small(3)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn genes_stay_on_grid_and_in_bounds() {
        let heatsink = reference_heatsink();
        let range = range((10.2, 50.0), (1.0, 3.0), (5, 10));
        let active = [Dimension::Height, Dimension::Count];
        let config = small(5);
        let mut search = Search {
            heatsink: &heatsink,
            range: &range,
            active: &active,
            limit: 70.0,
            config: &config,
            rng: StdRng::seed_from_u64(5),
        };

        let bounds = range.height();
        for _ in 0..200 {
            let design = search.random_design();
            let millimetres = design.height.get::<meter>() * 1e3;
            let on_grid = (millimetres - millimetres.round()).abs() < 1e-9;

            assert!(design.height >= bounds.min && design.height <= bounds.max);
            assert!(on_grid || design.height == bounds.min);
            assert!((5..=10).contains(&design.count));
            // Inactive thickness stays at its minimum.
            assert_eq!(design.thickness, range.thickness().min);
        }
    }

    #[test]
    fn infeasible_spacing_has_worst_fitness() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 12.0), (5, 10));
        let active = [Dimension::Thickness, Dimension::Count];
        let config = small(1);
        let search = Search {
            heatsink: &heatsink,
            range: &range,
            active: &active,
            limit: 70.0,
            config: &config,
            rng: StdRng::seed_from_u64(1),
        };

        let crowded = Design {
            thickness: Length::new::<meter>(0.012),
            count: 10,
            ..range.min_design()
        };

        assert_eq!(search.fitness(&crowded), f64::NEG_INFINITY);
        assert!(search.fitness(&range.min_design()).is_finite());
    }

    #[test]
    fn undefined_fitness_is_worst() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 3.0), (5, 10));
        let active = [Dimension::Height, Dimension::Count];
        let config = small(2);
        let design = range.min_design();
        let mut search = Search {
            heatsink: &heatsink,
            range: &range,
            active: &active,
            limit: f64::NAN,
            config: &config,
            rng: StdRng::seed_from_u64(2),
        };

        assert_eq!(search.fitness(&design), f64::NEG_INFINITY);

        // Landing exactly on the limit is the best possible outcome, not NaN.
        search.limit = heatsink.evaluate(&design).celsius();
        assert_eq!(search.fitness(&design), f64::INFINITY);
    }

    #[test]
    fn population_keeps_feasible_elite() {
        let heatsink = reference_heatsink();
        // Most of this space is unrealizable; the seeded minimum corner is not.
        let range = range((10.0, 50.0), (1.0, 15.0), (5, 10));
        let active = [Dimension::Height, Dimension::Thickness, Dimension::Count];

        let best = search(&heatsink, &range, &active, 70.0, &small(9)).unwrap();

        assert!(best.design.is_realizable(heatsink.params()));
    }
}
