use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Every geometric dimension of a heatsink, its dissipated power, and its
/// material conductivity are strictly positive.
///
/// # Examples
///
/// ```
/// use twine_heatsink::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Power, power::watt};
///
/// let tdp = StrictlyPositive::new(Power::new::<watt>(10.0)).unwrap();
/// assert_eq!(tdp.into_inner().get::<watt>(), 10.0);
///
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1.5).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermalConductivity},
        length::millimeter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn rib_counts() {
        let count = Constrained::<u32, StrictlyPositive>::new(5).unwrap();
        assert_eq!(count.into_inner(), 5);
        assert!(matches!(
            StrictlyPositive::new(0_u32),
            Err(ConstraintError::Zero)
        ));
    }

    #[test]
    fn lengths() {
        let one = Length::new::<millimeter>(1.0);
        assert!(StrictlyPositive::new(one).is_ok());
        assert!(matches!(
            StrictlyPositive::new(Length::new::<millimeter>(0.0)),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(Length::new::<millimeter>(-3.0)),
            Err(ConstraintError::Negative)
        ));
    }

    #[test]
    fn conductivities() {
        let aluminum = ThermalConductivity::new::<watt_per_meter_kelvin>(200.0);
        assert!(StrictlyPositive::new(aluminum).is_ok());

        let nan = ThermalConductivity::new::<watt_per_meter_kelvin>(f64::NAN);
        assert!(matches!(
            StrictlyPositive::new(nan),
            Err(ConstraintError::NotANumber)
        ));
    }
}
