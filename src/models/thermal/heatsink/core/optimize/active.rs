use crate::models::thermal::heatsink::core::{Dimension, RibRange};

/// Dimensions whose range is not degenerate, in height, thickness, count order.
pub(super) fn active_dimensions(range: &RibRange) -> Vec<Dimension> {
    [
        (Dimension::Height, range.is_height_fixed()),
        (Dimension::Thickness, range.is_thickness_fixed()),
        (Dimension::Count, range.is_count_fixed()),
    ]
    .into_iter()
    .filter_map(|(dimension, fixed)| (!fixed).then_some(dimension))
    .collect()
}
