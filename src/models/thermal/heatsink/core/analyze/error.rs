use std::fmt;

use thiserror::Error;
use uom::si::{f64::Length, length::millimeter};

/// Which part of the range failed the minimum spacing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnrealizableCase {
    /// Every dimension is fixed and the single design does not fit.
    FixedDesign,
    /// The minimum thickness does not fit at the fixed rib count.
    FixedCount,
    /// The minimum thickness does not fit even at the minimum rib count.
    LowerBound,
}

impl fmt::Display for UnrealizableCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnrealizableCase::FixedDesign => "the fixed rib design is unrealizable",
            UnrealizableCase::FixedCount => {
                "the minimum rib thickness is unrealizable at the fixed rib count"
            }
            UnrealizableCase::LowerBound => "the lower bound of the range is unrealizable",
        })
    }
}

/// Errors raised when no reachable design fits on the base.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("{case}: rib spacing is {:.3} mm, below 1 mm", .spacing.get::<millimeter>())]
    Unrealizable {
        case: UnrealizableCase,

        /// Spacing of the design that failed the check.
        spacing: Length,
    },
}
