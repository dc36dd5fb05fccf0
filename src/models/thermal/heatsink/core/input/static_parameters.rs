use uom::si::f64::{Length, Power, Ratio, ThermalConductivity, ThermodynamicTemperature};

use crate::support::constraint::{
    Constrained, ConstraintResult, StrictlyPositive, UnitIntervalLowerOpen,
};

/// Fixed inputs of a heatsink design problem.
///
/// These describe everything except the ribs: the base plate, the heat load,
/// the environment, and the material. They never change during an
/// evaluation or an optimization run.
///
/// All quantities except the ambient temperature are guaranteed to be
/// strictly positive, and the emissivity lies in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticParameters {
    length: Length,
    width: Length,
    base_thickness: Length,
    tdp: Power,
    ambient: ThermodynamicTemperature,
    conductivity: ThermalConductivity,
    emissivity: Ratio,
}

impl StaticParameters {
    /// Constructs validated static parameters.
    ///
    /// Ribs run along the `width` and are stacked along the `length`.
    ///
    /// # Errors
    ///
    /// Returns an error if a length, the power, or the conductivity is not
    /// strictly positive, or if the emissivity is outside `(0, 1]`.
    pub fn new(
        length: Length,
        width: Length,
        base_thickness: Length,
        tdp: Power,
        ambient: ThermodynamicTemperature,
        conductivity: ThermalConductivity,
        emissivity: Ratio,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            length: StrictlyPositive::new(length)?.into_inner(),
            width: StrictlyPositive::new(width)?.into_inner(),
            base_thickness: StrictlyPositive::new(base_thickness)?.into_inner(),
            tdp: StrictlyPositive::new(tdp)?.into_inner(),
            ambient,
            conductivity: StrictlyPositive::new(conductivity)?.into_inner(),
            emissivity: Constrained::<Ratio, UnitIntervalLowerOpen>::new(emissivity)?.into_inner(),
        })
    }

    /// Constructs static parameters without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure every quantity other than `ambient` is strictly
    /// positive and that `emissivity` lies in `(0, 1]`.
    /// Violating this invariant produces NaN temperatures.
    #[must_use]
    pub fn new_unchecked(
        length: Length,
        width: Length,
        base_thickness: Length,
        tdp: Power,
        ambient: ThermodynamicTemperature,
        conductivity: ThermalConductivity,
        emissivity: Ratio,
    ) -> Self {
        Self {
            length,
            width,
            base_thickness,
            tdp,
            ambient,
            conductivity,
            emissivity,
        }
    }

    /// Base length, the direction along which ribs are stacked.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Base width, the direction along which each rib runs.
    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    /// Base plate thickness.
    #[must_use]
    pub fn base_thickness(&self) -> Length {
        self.base_thickness
    }

    /// Dissipated power (thermal design power).
    #[must_use]
    pub fn tdp(&self) -> Power {
        self.tdp
    }

    /// Ambient air temperature.
    #[must_use]
    pub fn ambient(&self) -> ThermodynamicTemperature {
        self.ambient
    }

    /// Thermal conductivity of the heatsink material.
    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity
    }

    /// Surface emissivity of the heatsink material.
    #[must_use]
    pub fn emissivity(&self) -> Ratio {
        self.emissivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;
    use uom::si::{
        length::millimeter, power::watt, ratio::ratio,
        thermal_conductivity::watt_per_meter_kelvin, thermodynamic_temperature::degree_celsius,
    };

    fn build(width_mm: f64, emissivity: f64, ambient_c: f64) -> ConstraintResult<StaticParameters> {
        StaticParameters::new(
            Length::new::<millimeter>(100.0),
            Length::new::<millimeter>(width_mm),
            Length::new::<millimeter>(3.0),
            Power::new::<watt>(10.0),
            ThermodynamicTemperature::new::<degree_celsius>(ambient_c),
            ThermalConductivity::new::<watt_per_meter_kelvin>(200.0),
            Ratio::new::<ratio>(emissivity),
        )
    }

    #[test]
    fn accepts_sub_zero_ambient() {
        assert!(build(50.0, 0.8, -40.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_width() {
        assert_eq!(build(0.0, 0.8, 25.0), Err(ConstraintError::Zero));
        assert_eq!(build(-5.0, 0.8, 25.0), Err(ConstraintError::Negative));
    }

    #[test]
    fn rejects_emissivity_outside_unit_interval() {
        assert_eq!(build(50.0, 0.0, 25.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(build(50.0, 1.5, 25.0), Err(ConstraintError::AboveMaximum));
    }
}
