//! Fixed-point solver for the steady-state base temperature.
//!
//! Each iteration sums three parallel conductances (fins, unfinned base,
//! radiation) evaluated at the previous iterate, then divides the dissipated
//! power by the total to get a new temperature rise.

mod conductance;
mod config;
mod film;
mod resolved;
mod state;

pub use config::{InitialGuess, SolverConfig};
pub use state::{ApproxState, ThermalSolution};

use log::warn;
use uom::si::temperature_interval::kelvin as delta_kelvin;

use super::{Design, StaticParameters};

use resolved::Resolved;

/// Maximum number of computed iterates per solve.
///
/// Reaching the cap is not an error; the last state is returned unconverged.
pub const MAX_ITERATES: usize = 5000;

/// Iterates the energy balance for one design until the temperature rise
/// settles within the configured tolerance.
pub(super) fn solve(
    design: &Design,
    params: &StaticParameters,
    config: &SolverConfig,
) -> ThermalSolution {
    let resolved = Resolved::new(design, params);
    let tolerance = config.tolerance.get::<delta_kelvin>();

    let mut prev = ApproxState::seed(&config.initial_guess, resolved.ambient);
    let mut states = vec![prev];

    let converged = loop {
        let next = step(&resolved, &prev, states.len() == 1);
        states.push(next);

        let change = (next.temperature_rise - prev.temperature_rise).abs();
        if change <= tolerance {
            break true;
        }
        if change.is_nan() {
            break false;
        }
        if states.len() > MAX_ITERATES {
            warn!(
                "thermal solve stopped after {MAX_ITERATES} iterates without converging \
                 (last change {change:.3e} K)"
            );
            break false;
        }
        prev = next;
    };

    let last = states[states.len() - 1];
    ThermalSolution::new(states, last, converged, resolved.volume)
}

fn step(r: &Resolved, prev: &ApproxState, first: bool) -> ApproxState {
    let m = conductance::fin_parameter(r, prev.fin_film_coefficient);

    let total = conductance::fins(r, m)
        + conductance::unfinned(r, prev.base_temperature)
        + conductance::radiation(r, prev.base_temperature);
    let rise = r.tdp / total;

    ApproxState {
        temperature_rise: rise,
        film_coefficient: total / r.surface,
        base_temperature: rise + r.ambient,
        fin_film_coefficient: film::fin_film_coefficient(r, m, prev.temperature_rise, first),
    }
}
