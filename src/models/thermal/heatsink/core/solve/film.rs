//! Lagged natural-convection coupling on the fin surfaces.
//!
//! Each outer iteration re-derives the fin convection coefficient from the
//! *previous* iterate's temperature rise and fin parameter. The result only
//! feeds the next iteration, so the whole scheme is a two-level fixed point.

use super::resolved::Resolved;

/// Lower edge of the laminar `Gr·Pr` regime.
const REGIME_FLOOR: f64 = 0.001;

/// Boundary between the near-conduction and laminar regimes.
const LAMINAR_ONSET: f64 = 500.0;

/// Boundary between the laminar and turbulent regimes.
const TURBULENT_ONSET: f64 = 2e7;

/// Fin convection coefficient for the next iterate, in W/(m²·K).
///
/// `m` is the fin parameter computed from the previous coefficient and
/// `theta` is the previous base temperature rise. On the first iteration the
/// fin tip is taken to be at ambient.
pub(super) fn fin_film_coefficient(r: &Resolved, m: f64, theta: f64, first: bool) -> f64 {
    let theta_tip = if first {
        0.0
    } else {
        theta * (m * (r.corrected_height - r.height)).cosh() / (m * r.corrected_height).cosh()
    };
    let fin_mean = 0.5 * (theta_tip + theta) + r.ambient;

    AirFilm::new(r.width, fin_mean, r.ambient).coefficient()
}

/// Air properties at the film temperature between a surface and ambient.
#[derive(Debug, Clone, Copy)]
struct AirFilm {
    /// Characteristic length (the rib width).
    width: f64,
    conductivity: f64,
    /// Rayleigh number `Gr·Pr`.
    gr_pr: f64,
}

impl AirFilm {
    /// Evaluates air properties for a surface at `surface` °C in `ambient` °C air.
    fn new(width: f64, surface: f64, ambient: f64) -> Self {
        let t = 0.5 * (surface + ambient) + 273.0;

        let viscosity = t.powf(1.75) / 1.387e9;
        let conductivity = 1.96e-4 * t.powf(0.861);
        let density = 353.0 / t;
        let heat_capacity = 500.0 * t.powf(0.121);
        let diffusivity = conductivity / (heat_capacity * density);

        let prandtl = viscosity / diffusivity;
        let grashof = 9.8 * width.powi(3) * (surface - ambient) / (t * viscosity.powi(2));

        Self {
            width,
            conductivity,
            gr_pr: grashof * prandtl,
        }
    }

    fn coefficient(&self) -> f64 {
        nusselt(self.gr_pr) * self.conductivity / self.width
    }
}

/// Natural-convection Nusselt number by `Gr·Pr` regime.
///
/// Values at or below the laminar floor, and NaN, fall back to `Nu = 1`.
fn nusselt(gr_pr: f64) -> f64 {
    if gr_pr > TURBULENT_ONSET {
        0.135 * gr_pr.powf(0.33)
    } else if gr_pr > LAMINAR_ONSET {
        0.54 * gr_pr.powf(0.25)
    } else if gr_pr > REGIME_FLOOR {
        1.18 * gr_pr.powf(0.125)
    } else {
        1.0
    }
}
