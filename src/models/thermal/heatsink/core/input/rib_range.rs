use std::fmt;

use num_traits::Zero;
use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::{ConstraintError, StrictlyPositive};

use super::Design;

/// Inclusive `[min, max]` bounds of one design dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialEq> Bounds<T> {
    #[must_use]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Degenerate bounds holding a single value.
    #[must_use]
    pub fn fixed(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Returns `true` if `min == max`, meaning the dimension is not searched.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }
}

/// A searchable rib dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Height,
    Thickness,
    Count,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Height => "height",
            Dimension::Thickness => "thickness",
            Dimension::Count => "count",
        })
    }
}

/// Errors raised when constructing a [`RibRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A bound is zero, negative, or not a number.
    #[error("invalid {dimension} bound")]
    Constraint {
        dimension: Dimension,
        #[source]
        source: ConstraintError,
    },

    /// The lower bound exceeds the upper bound.
    #[error("{dimension} range is inverted: min exceeds max")]
    Inverted { dimension: Dimension },
}

/// Requested design space for rib height, thickness, and count.
///
/// Each dimension is either a range to search or, when `min == max`, a fixed
/// value. All bounds are strictly positive and ordered.
///
/// # Example
///
/// ```
/// use twine_heatsink::models::thermal::heatsink::{Bounds, RibRange};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let mm = |value| Length::new::<millimeter>(value);
/// let range = RibRange::new(
///     Bounds::new(mm(10.0), mm(50.0)),
///     Bounds::fixed(mm(1.0)),
///     Bounds::new(5, 10),
/// )
/// .unwrap();
///
/// assert!(!range.is_height_fixed());
/// assert!(range.is_thickness_fixed());
/// assert!(!range.all_fixed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibRange {
    height: Bounds<Length>,
    thickness: Bounds<Length>,
    count: Bounds<u32>,
}

impl RibRange {
    /// Constructs a validated rib range.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if any bound is not strictly positive or if
    /// any range has `min > max`.
    pub fn new(
        height: Bounds<Length>,
        thickness: Bounds<Length>,
        count: Bounds<u32>,
    ) -> Result<Self, RangeError> {
        check(Dimension::Height, &height)?;
        check(Dimension::Thickness, &thickness)?;
        check(Dimension::Count, &count)?;

        Ok(Self {
            height,
            thickness,
            count,
        })
    }

    /// A range with every dimension fixed at the given design.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if any dimension of the design is not
    /// strictly positive.
    pub fn fixed(design: &Design) -> Result<Self, RangeError> {
        Self::new(
            Bounds::fixed(design.height),
            Bounds::fixed(design.thickness),
            Bounds::fixed(design.count),
        )
    }

    #[must_use]
    pub fn height(&self) -> Bounds<Length> {
        self.height
    }

    #[must_use]
    pub fn thickness(&self) -> Bounds<Length> {
        self.thickness
    }

    #[must_use]
    pub fn count(&self) -> Bounds<u32> {
        self.count
    }

    #[must_use]
    pub fn is_height_fixed(&self) -> bool {
        self.height.is_fixed()
    }

    #[must_use]
    pub fn is_thickness_fixed(&self) -> bool {
        self.thickness.is_fixed()
    }

    #[must_use]
    pub fn is_count_fixed(&self) -> bool {
        self.count.is_fixed()
    }

    /// Returns `true` if no dimension is searchable.
    #[must_use]
    pub fn all_fixed(&self) -> bool {
        self.is_height_fixed() && self.is_thickness_fixed() && self.is_count_fixed()
    }

    /// The design with every dimension at its lower bound.
    #[must_use]
    pub fn min_design(&self) -> Design {
        Design::new(self.height.min, self.thickness.min, self.count.min)
    }

    /// The design with every dimension at its upper bound.
    #[must_use]
    pub fn max_design(&self) -> Design {
        Design::new(self.height.max, self.thickness.max, self.count.max)
    }

    /// Returns a copy with the count upper bound lowered to `max`.
    ///
    /// The caller guarantees `count.min <= max <= count.max`.
    pub(crate) fn with_count_max(self, max: u32) -> Self {
        debug_assert!(self.count.min <= max && max <= self.count.max);
        Self {
            count: Bounds::new(self.count.min, max),
            ..self
        }
    }
}

fn check<T>(dimension: Dimension, bounds: &Bounds<T>) -> Result<(), RangeError>
where
    T: Copy + PartialOrd + Zero,
{
    for value in [bounds.min, bounds.max] {
        StrictlyPositive::new(value)
            .map_err(|source| RangeError::Constraint { dimension, source })?;
    }
    if bounds.min > bounds.max {
        return Err(RangeError::Inverted { dimension });
    }
    Ok(())
}
