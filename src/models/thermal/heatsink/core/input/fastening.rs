use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    f64::{Length, Mass, MassDensity, Volume},
    length::{meter, millimeter},
};

use crate::models::thermal::heatsink::core::geometry;
use crate::support::constraint::{ConstraintError, StrictlyPositive};

use super::StaticParameters;

/// Plain plate extensions at both ends of the base, each screwed to the wall
/// through one hole.
///
/// The base plate grows from the finned length `L` to `wall_length`, with the
/// overhang split evenly between the two ends. Each strip must be at least as
/// wide as the screw head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FasteningStrips {
    wall_length: Length,
    thread_diameter: Length,
    head_diameter: Length,
    strip_width: Length,
    volume: Volume,
}

/// Errors that can occur when laying out the fastening strips.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FasteningError {
    /// A strip dimension is not strictly positive.
    #[error("invalid fastener dimension")]
    Constraint(#[from] ConstraintError),

    /// A strip cannot seat the screw head.
    #[error(
        "fastening strip is {:.1} mm wide, narrower than the {:.1} mm screw head",
        .strip.get::<millimeter>(),
        .head.get::<millimeter>()
    )]
    StripTooNarrow {
        /// Width of each strip, half the overhang.
        strip: Length,
        /// Screw head diameter.
        head: Length,
    },
}

impl FasteningStrips {
    /// Lays out the strips against the base plate in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`FasteningError::Constraint`] if a dimension is not strictly
    /// positive, or [`FasteningError::StripTooNarrow`] if a strip is narrower
    /// than the screw head (including a wall length not beyond `L`).
    pub fn new(
        params: &StaticParameters,
        wall_length: Length,
        thread_diameter: Length,
        head_diameter: Length,
    ) -> Result<Self, FasteningError> {
        let wall_length = StrictlyPositive::new(wall_length)?.into_inner();
        let thread_diameter = StrictlyPositive::new(thread_diameter)?.into_inner();
        let head_diameter = StrictlyPositive::new(head_diameter)?.into_inner();

        let overhang = wall_length - params.length();
        let strip_width = overhang / 2.0;
        if !geometry::is_at_least(strip_width.get::<meter>(), head_diameter.get::<meter>()) {
            return Err(FasteningError::StripTooNarrow {
                strip: strip_width,
                head: head_diameter,
            });
        }

        let thickness = params.base_thickness();
        let plate = overhang * params.width() * thickness;
        let radius = thread_diameter / 2.0;
        let holes = radius * radius * thickness * (2.0 * PI);

        Ok(Self {
            wall_length,
            thread_diameter,
            head_diameter,
            strip_width,
            volume: plate - holes,
        })
    }

    /// Returns the overall base length once mounted.
    #[must_use]
    pub fn wall_length(&self) -> Length {
        self.wall_length
    }

    /// Returns the screw thread diameter.
    #[must_use]
    pub fn thread_diameter(&self) -> Length {
        self.thread_diameter
    }

    /// Returns the screw head diameter.
    #[must_use]
    pub fn head_diameter(&self) -> Length {
        self.head_diameter
    }

    /// Returns the width of each strip.
    #[must_use]
    pub fn strip_width(&self) -> Length {
        self.strip_width
    }

    /// Returns the material volume of both strips, net of the screw holes.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns the mass of both strips for a material of the given density.
    #[must_use]
    pub fn mass(&self, density: MassDensity) -> Mass {
        self.volume * density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass::kilogram, mass_density::kilogram_per_cubic_meter, volume::cubic_meter};

    use crate::models::thermal::heatsink::core::test_support::{mm, reference_params};

    fn strips(
        wall_mm: f64,
        thread_mm: f64,
        head_mm: f64,
    ) -> Result<FasteningStrips, FasteningError> {
        FasteningStrips::new(&reference_params(), mm(wall_mm), mm(thread_mm), mm(head_mm))
    }

    #[test]
    fn strip_volume_excludes_screw_holes() {
        let layout = strips(140.0, 4.0, 7.0).unwrap();

        let width = layout.strip_width().get::<millimeter>();
        assert_relative_eq!(width, 20.0, epsilon = 1e-9);

        // 40 × 50 × 3 mm of plate, less two 4 mm holes through 3 mm.
        let expected = 6e-6 - 2.0 * PI * 0.002 * 0.002 * 0.003;
        let volume = layout.volume().get::<cubic_meter>();
        assert_relative_eq!(volume, expected, epsilon = 1e-15);

        let density = MassDensity::new::<kilogram_per_cubic_meter>(2700.0);
        let mass = layout.mass(density).get::<kilogram>();
        assert_relative_eq!(mass, expected * 2700.0, epsilon = 1e-12);
    }

    #[test]
    fn strip_narrower_than_head_is_rejected() {
        let err = strips(110.0, 4.0, 7.0).unwrap_err();

        let FasteningError::StripTooNarrow { strip, head } = err else {
            panic!("expected a narrow strip, got {err:?}");
        };
        assert_relative_eq!(strip.get::<millimeter>(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(head.get::<millimeter>(), 7.0, epsilon = 1e-9);
        assert_eq!(
            err.to_string(),
            "fastening strip is 5.0 mm wide, narrower than the 7.0 mm screw head"
        );
    }

    #[test]
    fn wall_no_longer_than_base_is_rejected() {
        assert!(matches!(
            strips(100.0, 4.0, 7.0),
            Err(FasteningError::StripTooNarrow { .. })
        ));
        assert!(matches!(
            strips(90.0, 4.0, 7.0),
            Err(FasteningError::StripTooNarrow { .. })
        ));
    }

    #[test]
    fn strip_exactly_as_wide_as_head_fits() {
        // (120 − 100) / 2 lands a hair under 10 mm in floating point.
        assert!(strips(120.0, 6.0, 10.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            strips(0.0, 4.0, 7.0),
            Err(FasteningError::Constraint(ConstraintError::Zero))
        );
        assert_eq!(
            strips(140.0, -4.0, 7.0),
            Err(FasteningError::Constraint(ConstraintError::Negative))
        );
        assert_eq!(
            strips(140.0, 4.0, 0.0),
            Err(FasteningError::Constraint(ConstraintError::Zero))
        );
    }
}
