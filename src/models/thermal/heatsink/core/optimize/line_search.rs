//! Direct searches over a single free dimension.

mod problem;

pub(super) use problem::Axis;

use log::debug;
use twine_solvers::equation::bisection;
use uom::si::length::meter;

use crate::models::thermal::heatsink::core::{
    Design, Evaluation, Heatsink, RibRange,
    geometry::{self, GRID_STEP},
};

use super::{LineSearchConfig, OptimizeError};

use problem::LimitProblem;

/// Smallest grid value of `axis` whose design meets `limit` (°C).
///
/// All other dimensions are held at their minimum. Thickness is capped at the
/// largest realizable value. If even the upper end runs hot, it is returned.
pub(super) fn continuous(
    heatsink: &Heatsink,
    range: &RibRange,
    axis: Axis,
    limit: f64,
    config: &LineSearchConfig,
) -> Result<Evaluation, OptimizeError> {
    let base = range.min_design();
    let (lo, hi) = bracket(heatsink, range, axis);
    let at = |x: f64| heatsink.evaluate(&axis.apply(base, x));

    let low = at(lo);
    if low.celsius() <= limit {
        return Ok(low);
    }
    let high = at(hi);
    if high.celsius() > limit {
        return Ok(high);
    }

    debug!("bisecting {axis:?} over [{lo:.6}, {hi:.6}] m");

    let problem = LimitProblem::new(base, axis, limit);
    let solution = bisection::solve_unobserved(heatsink, &problem, [lo, hi], &config.bisection())?;

    if solution.status != bisection::Status::Converged {
        return Err(OptimizeError::LineSearchMaxIters {
            iters: solution.iters,
        });
    }

    // Snap to the grid, then walk to the smallest grid value meeting the limit.
    let mut x = geometry::ceil_to_grid(solution.x).clamp(lo, hi);
    let mut best = at(x);
    while best.celsius() > limit && x < hi {
        x = (x + GRID_STEP).min(hi);
        best = at(x);
    }
    while x - GRID_STEP >= lo {
        let lower = at(x - GRID_STEP);
        if lower.celsius() > limit {
            break;
        }
        x -= GRID_STEP;
        best = lower;
    }

    debug_assert!(best.design.is_realizable(heatsink.params()));
    Ok(best)
}

/// Search interval in metres, with thickness capped so ribs stay realizable.
fn bracket(heatsink: &Heatsink, range: &RibRange, axis: Axis) -> (f64, f64) {
    let bounds = match axis {
        Axis::Height => range.height(),
        Axis::Thickness => range.thickness(),
    };
    let lo = bounds.min.get::<meter>();
    let mut hi = bounds.max.get::<meter>();

    if axis == Axis::Thickness {
        let length = heatsink.params().length().get::<meter>();
        let cap = geometry::max_realizable_thickness(length, range.count().min);
        if cap < hi {
            hi = geometry::floor_to_grid(cap).max(lo);
        }
    }

    (lo, hi)
}

/// First count, scanning upward, whose design meets `limit` (°C).
///
/// Falls back to the coolest count if none does.
pub(super) fn count(heatsink: &Heatsink, range: &RibRange, limit: f64) -> Evaluation {
    let base = range.min_design();
    let mut coolest = heatsink.evaluate(&base);

    for count in range.count().min..=range.count().max {
        let evaluation = heatsink.evaluate(&Design { count, ..base });
        if evaluation.celsius() <= limit {
            return evaluation;
        }
        if evaluation.celsius() < coolest.celsius() {
            coolest = evaluation;
        }
    }

    coolest
}
