//! Natural-convection finned heatsink model.
//!
//! This module provides a [`twine_core::Model`] implementation for a
//! straight-fin heatsink and the design optimizer built on top of it.
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_heatsink::models::thermal::heatsink::{Design, Heatsink, StaticParameters};
//! use uom::si::{
//!     f64::{Length, Power, Ratio, ThermalConductivity, ThermodynamicTemperature},
//!     length::millimeter,
//!     power::watt,
//!     ratio::ratio,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let params = StaticParameters::new(
//!     Length::new::<millimeter>(100.0),
//!     Length::new::<millimeter>(50.0),
//!     Length::new::<millimeter>(3.0),
//!     Power::new::<watt>(10.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(200.0),
//!     Ratio::new::<ratio>(0.8),
//! )
//! .unwrap();
//!
//! let heatsink = Heatsink::new(params);
//! let design = Design::new(Length::new::<millimeter>(10.0), Length::new::<millimeter>(1.0), 5);
//! let solution = heatsink.call(&design).unwrap();
//!
//! assert!(solution.converged());
//! assert!(solution.temperature().get::<degree_celsius>() > 25.0);
//! ```

mod core;

pub use self::core::{
    AnalysisOutcome, ApproxState, Bounds, Classification, ConfigError, Design, Dimension,
    Evaluation, FasteningError, FasteningStrips, GeometryError, Heatsink, InitialGuess,
    LineSearchConfig, MAX_ITERATES, MIN_RIB_SPACING, OptimizationResult, OptimizeConfig,
    OptimizeError, RangeError, RibRange, Route, SearchConfig, SolverConfig, StaticParameters,
    ThermalSolution, UnrealizableCase,
};

use std::convert::Infallible;

use twine_core::Model;

/// Exposes the fixed-point thermal solver as a Twine model.
///
/// Every call is independent: the iterate history is owned by the returned
/// [`ThermalSolution`] and nothing is shared between calls.
impl Model for Heatsink {
    type Input = Design;
    type Output = ThermalSolution;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.solve(input))
    }
}
