//! Rib layout helpers shared by the analyzer and the optimizer.
//!
//! Everything here works on plain `f64` metres.

/// Minimum clear gap between adjacent ribs, in metres.
pub const MIN_RIB_SPACING: f64 = 0.001;

/// Design grid step for height and thickness, in metres.
pub(super) const GRID_STEP: f64 = 0.001;

/// Slack absorbing float noise when comparing against the spacing limit or
/// snapping to the grid.
const EPS: f64 = 1e-9;

/// Clear gap between ribs: `(L − δ·(z + 1)) / z`.
pub(super) fn rib_spacing(length: f64, thickness: f64, count: u32) -> f64 {
    let z = f64::from(count);
    (length - thickness * (z + 1.0)) / z
}

pub(super) fn is_realizable(spacing: f64) -> bool {
    is_at_least(spacing, MIN_RIB_SPACING)
}

/// Length comparison tolerant of sub-nanometre float noise.
pub(super) fn is_at_least(value: f64, floor: f64) -> bool {
    value >= floor - EPS * GRID_STEP
}

/// Largest thickness that keeps `count` ribs at least [`MIN_RIB_SPACING`] apart.
pub(super) fn max_realizable_thickness(length: f64, count: u32) -> f64 {
    let z = f64::from(count);
    (length - MIN_RIB_SPACING * z) / (z + 1.0)
}

/// Largest count in `[min, max]` that is realizable at `thickness`.
///
/// Spacing shrinks as ribs are added, so the ceiling comes straight from
/// `z ≤ (L − δ) / (δ + s_min)`.
pub(super) fn max_realizable_count(length: f64, thickness: f64, min: u32, max: u32) -> Option<u32> {
    let fits = |count| is_realizable(rib_spacing(length, thickness, count));

    let ceiling = ((length - thickness) / (thickness + MIN_RIB_SPACING)).floor();
    // Saturating cast; the nudges below absorb rounding at the boundary.
    let mut count = (ceiling as u32).max(min).min(max);
    while count > min && !fits(count) {
        count -= 1;
    }
    while count < max && fits(count + 1) {
        count += 1;
    }

    fits(count).then_some(count)
}

/// Rounds to the nearest grid value.
pub(super) fn round_to_grid(value: f64) -> f64 {
    (value / GRID_STEP).round() * GRID_STEP
}

/// Smallest grid value not below `value`.
pub(super) fn ceil_to_grid(value: f64) -> f64 {
    (value / GRID_STEP - EPS).ceil() * GRID_STEP
}

/// Largest grid value not above `value`.
pub(super) fn floor_to_grid(value: f64) -> f64 {
    (value / GRID_STEP + EPS).floor() * GRID_STEP
}
