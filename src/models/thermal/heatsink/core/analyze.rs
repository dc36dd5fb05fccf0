//! Feasibility checks and boundary classification of a design space.

mod error;
mod outcome;

pub use error::{GeometryError, UnrealizableCase};
pub use outcome::{AnalysisOutcome, Classification};

use log::{debug, info};
use uom::si::{
    f64::ThermodynamicTemperature, length::meter, thermodynamic_temperature::degree_celsius,
};

use super::{Design, Heatsink, RibRange, geometry};

/// Safety margin below the limit used by both boundary classifications, in K.
const MARGIN: f64 = 1.0;

/// Checks rib spacing, narrows the count range if needed, and classifies
/// the range by evaluating its extreme designs.
pub(super) fn analyze(
    heatsink: &Heatsink,
    range: &RibRange,
    limit: ThermodynamicTemperature,
) -> Result<AnalysisOutcome, GeometryError> {
    let params = heatsink.params();
    let length = params.length().get::<meter>();

    let min_design = range.min_design();
    if !min_design.is_realizable(params) {
        let case = if range.all_fixed() {
            UnrealizableCase::FixedDesign
        } else if range.is_count_fixed() {
            UnrealizableCase::FixedCount
        } else {
            UnrealizableCase::LowerBound
        };
        return Err(unrealizable(case, &min_design, heatsink));
    }

    if range.all_fixed() {
        debug!("all rib dimensions fixed; skipping classification");
        return Ok(AnalysisOutcome::all_fixed(*range));
    }

    let thickness = range.thickness().min.get::<meter>();
    let count = range.count();
    let mut narrowed_count = None;
    let mut range = *range;

    if !geometry::is_realizable(geometry::rib_spacing(length, thickness, count.max)) {
        // The minimum corner passed above, so a realizable count exists.
        let max = geometry::max_realizable_count(length, thickness, count.min, count.max)
            .unwrap_or(count.min);
        let requested = count.max;
        info!("narrowed rib count ceiling from {requested} to {max}");
        narrowed_count = Some(max);
        range = range.with_count_max(max);
    }

    let min_corner = heatsink.evaluate(&range.min_design());
    let max_corner = heatsink.evaluate(&range.max_design());

    let threshold = limit.get::<degree_celsius>() - MARGIN;
    let classification = if min_corner.celsius() <= threshold {
        Classification::TooHighMin
    } else if max_corner.celsius() >= threshold {
        Classification::TooLowMax
    } else {
        Classification::Ambiguous
    };

    let (min, max) = (min_corner.celsius(), max_corner.celsius());
    debug!(
        "range is {classification:?}: corners {min:.2}/{max:.2} °C, threshold {threshold:.2} °C"
    );

    Ok(AnalysisOutcome::classified(
        range,
        narrowed_count,
        classification,
        min_corner,
        max_corner,
    ))
}

fn unrealizable(case: UnrealizableCase, design: &Design, heatsink: &Heatsink) -> GeometryError {
    GeometryError::Unrealizable {
        case,
        spacing: design.rib_spacing(heatsink.params()),
    }
}
