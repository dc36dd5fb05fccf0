//! Problem formulation for single-dimension limit matching.

use std::convert::Infallible;

use twine_core::EquationProblem;
use uom::si::{f64::Length, length::meter, thermodynamic_temperature::degree_celsius};

use crate::models::thermal::heatsink::core::{Design, ThermalSolution};

/// A continuous rib dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::models::thermal::heatsink::core::optimize) enum Axis {
    Height,
    Thickness,
}

impl Axis {
    /// Returns `design` with this dimension set to `meters`.
    pub(super) fn apply(self, design: Design, meters: f64) -> Design {
        let value = Length::new::<meter>(meters);
        match self {
            Axis::Height => Design {
                height: value,
                ..design
            },
            Axis::Thickness => Design {
                thickness: value,
                ..design
            },
        }
    }
}

/// Equation problem matching the base temperature to a limit.
///
/// Computes the residual as `temperature − limit` in K.
pub(super) struct LimitProblem {
    base: Design,
    axis: Axis,
    limit: f64,
}

impl LimitProblem {
    pub(super) fn new(base: Design, axis: Axis, limit: f64) -> Self {
        Self { base, axis, limit }
    }
}

impl EquationProblem<1> for LimitProblem {
    type Input = Design;
    type Output = ThermalSolution;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(self.axis.apply(self.base, x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.temperature().get::<degree_celsius>() - self.limit])
    }
}
