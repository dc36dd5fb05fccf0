use uom::si::{f64::Length, length::meter};

use crate::models::thermal::heatsink::core::geometry;

use super::StaticParameters;

/// One point in the rib design space.
///
/// A design is not validated on construction: the thermal solver accepts any
/// positive height and thickness with at least one rib, whether or not the
/// ribs fit on the base. Use [`Design::is_realizable`] to check the minimum
/// spacing before reporting a design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Design {
    /// Rib height above the base plate.
    pub height: Length,

    /// Rib thickness along the base length.
    pub thickness: Length,

    /// Number of ribs.
    pub count: u32,
}

impl Design {
    #[must_use]
    pub fn new(height: Length, thickness: Length, count: u32) -> Self {
        Self {
            height,
            thickness,
            count,
        }
    }

    /// Clear gap between adjacent ribs on the given base.
    ///
    /// Computed as `(L − δ·(z + 1)) / z`, so it is negative when the ribs do
    /// not fit on the base at all.
    #[must_use]
    pub fn rib_spacing(&self, params: &StaticParameters) -> Length {
        Length::new::<meter>(geometry::rib_spacing(
            params.length().get::<meter>(),
            self.thickness.get::<meter>(),
            self.count,
        ))
    }

    /// Returns `true` if the rib spacing is at least [`MIN_RIB_SPACING`].
    ///
    /// [`MIN_RIB_SPACING`]: super::super::MIN_RIB_SPACING
    #[must_use]
    pub fn is_realizable(&self, params: &StaticParameters) -> bool {
        geometry::is_realizable(self.rib_spacing(params).get::<meter>())
    }
}
