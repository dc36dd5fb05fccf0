//! Routing between the fixed, boundary, and search paths.

mod active;
mod config;
mod error;
mod evolution;
mod line_search;

pub use config::{ConfigError, LineSearchConfig, OptimizeConfig, SearchConfig};
pub use error::OptimizeError;

use log::{debug, info};
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::{meter, millimeter},
    thermodynamic_temperature::degree_celsius,
};

use super::{
    Classification, Dimension, Evaluation, Heatsink, OptimizationResult, RibRange, Route,
    geometry::GRID_STEP,
};

use active::active_dimensions;
use line_search::Axis;

const ALL_FIXED: &str = "all rib parameters are fixed; no optimization required";
const TOO_HIGH_MIN: &str = "lower bound of the range is too high to select optimal parameters";
const TOO_LOW_MAX: &str = "upper bound of the range is too low to select optimal parameters";
const SUCCEEDED: &str = "optimization succeeded";

/// Analyzes `range` and takes exactly one of the fixed, boundary, or search
/// paths to pick a design.
pub(super) fn optimize(
    heatsink: &Heatsink,
    range: &RibRange,
    limit: ThermodynamicTemperature,
    config: &OptimizeConfig,
) -> Result<OptimizationResult, OptimizeError> {
    let outcome = heatsink.analyze(range, limit)?;
    let range = outcome.range();

    let (evaluation, route, status) = match outcome.classification() {
        Classification::AllFixed => (
            heatsink.evaluate(&range.min_design()),
            Route::Fixed,
            ALL_FIXED,
        ),
        Classification::TooHighMin => (
            outcome
                .min_corner()
                .copied()
                .unwrap_or_else(|| heatsink.evaluate(&range.min_design())),
            Route::LowerBound,
            TOO_HIGH_MIN,
        ),
        Classification::TooLowMax => (relaxed_max(heatsink, range), Route::UpperBound, TOO_LOW_MAX),
        Classification::Ambiguous => (
            search(heatsink, range, limit.get::<degree_celsius>(), config)?,
            Route::Search,
            SUCCEEDED,
        ),
    };

    debug!("optimization took the {route} route");

    let status = match outcome.note() {
        Some(note) => format!("{status}; {note}"),
        None => status.to_owned(),
    };

    Ok(OptimizationResult::new(evaluation, route, status))
}

/// The maximum design with thickness stepped down until the ribs fit.
fn relaxed_max(heatsink: &Heatsink, range: &RibRange) -> Evaluation {
    let params = heatsink.params();
    let min = range.thickness().min;
    let max = range.thickness().max.get::<meter>();

    let mut design = range.max_design();
    let mut steps = 0_u32;
    while !design.is_realizable(params) && design.thickness > min {
        steps += 1;
        let relaxed = Length::new::<meter>(max - f64::from(steps) * GRID_STEP);
        design.thickness = if relaxed > min { relaxed } else { min };
    }

    heatsink.evaluate(&design)
}

/// Searches the free dimensions of an ambiguous range.
fn search(
    heatsink: &Heatsink,
    range: &RibRange,
    limit: f64,
    config: &OptimizeConfig,
) -> Result<Evaluation, OptimizeError> {
    let active = active_dimensions(range);

    let best = match active.as_slice() {
        [] => heatsink.evaluate(&range.min_design()),
        [Dimension::Height] => {
            line_search::continuous(heatsink, range, Axis::Height, limit, &config.line_search)?
        }
        [Dimension::Thickness] => {
            line_search::continuous(heatsink, range, Axis::Thickness, limit, &config.line_search)?
        }
        [Dimension::Count] => line_search::count(heatsink, range, limit),
        _ => {
            config.search.validate()?;
            evolution::search(heatsink, range, &active, limit, &config.search)?
        }
    };

    info!(
        "search over {active:?} selected {:.1} mm × {:.1} mm × {} ribs at {:.2} °C",
        best.design.height.get::<millimeter>(),
        best.design.thickness.get::<millimeter>(),
        best.design.count,
        best.celsius(),
    );

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use crate::models::thermal::heatsink::core::test_support::{
        celsius, range, reference_heatsink,
    };

    fn quick(seed: u64) -> OptimizeConfig {
        OptimizeConfig {
            search: SearchConfig {
                population_size: 20,
                generations: 30,
                seed: Some(seed),
                ..SearchConfig::default()
            },
            ..OptimizeConfig::default()
        }
    }

    #[test]
    fn all_fixed_reference() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 10.0), (1.0, 1.0), (5, 5));

        let result = heatsink
            .optimize(&range, celsius(80.0), &OptimizeConfig::default())
            .unwrap();

        assert_eq!(result.route(), Route::Fixed);
        assert_eq!(result.status(), ALL_FIXED);
        assert_eq!(result.design(), &range.min_design());
        assert!(result.temperature().get::<degree_celsius>() > 25.0);
        assert_relative_eq!(
            result.temperature().get::<degree_celsius>(),
            95.11,
            epsilon = 0.01
        );
    }

    #[test]
    fn unrealizable_geometry_is_an_error() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 10.0), (10.0, 10.0), (9, 9));

        let err = heatsink
            .optimize(&range, celsius(80.0), &OptimizeConfig::default())
            .unwrap_err();

        assert!(matches!(err, OptimizeError::Geometry(_)));
    }

    #[test]
    fn lower_bound_route() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 2.0), (5, 10));

        let result = heatsink
            .optimize(&range, celsius(120.0), &OptimizeConfig::default())
            .unwrap();

        assert_eq!(result.route(), Route::LowerBound);
        assert_eq!(result.status(), TOO_HIGH_MIN);
        assert_eq!(result.design(), &range.min_design());
    }

    #[test]
    fn upper_bound_route() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 2.0), (5, 10));

        let result = heatsink
            .optimize(&range, celsius(40.0), &OptimizeConfig::default())
            .unwrap();

        assert_eq!(result.route(), Route::UpperBound);
        assert_eq!(result.status(), TOO_LOW_MAX);
        assert_eq!(result.design(), &range.max_design());
        assert_relative_eq!(
            result.temperature().get::<degree_celsius>(),
            46.59,
            epsilon = 0.01
        );
    }

    #[test]
    fn upper_bound_relaxes_thickness() {
        let heatsink = reference_heatsink();
        // Ten 9 mm ribs leave 0.1 mm gaps; 8 mm ribs leave 1.2 mm.
        let range = range((10.0, 50.0), (1.0, 9.0), (5, 10));

        let result = heatsink
            .optimize(&range, celsius(40.0), &OptimizeConfig::default())
            .unwrap();

        assert_eq!(result.route(), Route::UpperBound);
        let thickness = result.best_thickness().get::<millimeter>();
        assert_relative_eq!(thickness, 8.0, epsilon = 1e-9);
        assert_eq!(result.best_count(), 10);
        assert!(result.design().is_realizable(heatsink.params()));
    }

    #[test]
    fn narrowing_note_is_appended() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 20.0), (10.0, 12.0), (5, 50));

        let result = heatsink
            .optimize(&range, celsius(200.0), &OptimizeConfig::default())
            .unwrap();

        assert_eq!(result.route(), Route::LowerBound);
        let note = "maximum realizable rib count for the given ranges: 8";
        assert_eq!(result.status(), format!("{TOO_HIGH_MIN}; {note}"));
    }

    #[test]
    fn single_height_uses_line_search() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 1.0), (5, 5));

        let result = heatsink
            .optimize(&range, celsius(75.0), &OptimizeConfig::default())
            .unwrap();

        assert_eq!(result.route(), Route::Search);
        assert_eq!(result.status(), SUCCEEDED);
        let height = result.best_height().get::<millimeter>();
        assert_relative_eq!(height, 23.0, epsilon = 1e-9);
    }

    #[test]
    fn single_count_uses_scan() {
        let heatsink = reference_heatsink();
        let range = range((20.0, 20.0), (1.0, 1.0), (5, 10));

        let result = heatsink
            .optimize(&range, celsius(70.0), &OptimizeConfig::default())
            .unwrap();

        assert_eq!(result.route(), Route::Search);
        assert_eq!(result.best_count(), 8);
    }

    #[test]
    fn evolutionary_search_meets_limit() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 3.0), (5, 10));

        let result = heatsink
            .optimize(&range, celsius(70.0), &quick(21))
            .unwrap();

        assert_eq!(result.route(), Route::Search);
        assert_eq!(result.status(), SUCCEEDED);
        assert!(result.temperature().get::<degree_celsius>() < 70.0);
        assert!(result.design().is_realizable(heatsink.params()));
    }

    #[test]
    fn invalid_search_config_is_rejected() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 3.0), (5, 10));
        let config = OptimizeConfig {
            search: SearchConfig {
                generations: 0,
                ..SearchConfig::default()
            },
            ..OptimizeConfig::default()
        };

        let err = heatsink
            .optimize(&range, celsius(70.0), &config)
            .unwrap_err();

        assert!(matches!(
            err,
            OptimizeError::Config(ConfigError::NoGenerations)
        ));
    }

    #[test]
    fn invalid_search_config_is_ignored_off_the_search_path() {
        let heatsink = reference_heatsink();
        let range = range((10.0, 50.0), (1.0, 3.0), (5, 10));
        let config = OptimizeConfig {
            search: SearchConfig {
                population_size: 0,
                ..SearchConfig::default()
            },
            ..OptimizeConfig::default()
        };

        let result = heatsink.optimize(&range, celsius(120.0), &config).unwrap();

        assert_eq!(result.route(), Route::LowerBound);
    }

    #[test]
    fn results_are_always_realizable() {
        let heatsink = reference_heatsink();
        let mut rng = StdRng::seed_from_u64(42);

        for seed in 0..12 {
            let h_min = rng.gen_range(5.0..30.0);
            let t_min = rng.gen_range(1.0..4.0);
            let c_min = rng.gen_range(3..8);
            let range = range(
                (h_min, h_min + rng.gen_range(0.0..30.0)),
                (t_min, t_min + rng.gen_range(0.0..8.0)),
                (c_min, c_min + rng.gen_range(0..30)),
            );
            let limit = celsius(rng.gen_range(40.0..110.0));

            let result = heatsink.optimize(&range, limit, &quick(seed)).unwrap();

            assert!(
                result.design().is_realizable(heatsink.params()),
                "{:?} took the {} route to an unrealizable design",
                range,
                result.route()
            );
        }
    }
}
