//! Parallel heat paths from the base to ambient, in W/K.

use super::resolved::Resolved;

/// Fin parameter `m = √(α·U / (λ·S))` for fin convection coefficient `alpha`.
pub(super) fn fin_parameter(r: &Resolved, alpha: f64) -> f64 {
    (alpha * r.perimeter / (r.conductivity * r.cross_section)).sqrt()
}

/// Conductance of all fins: `z·λ·m·S·tanh(m·h₁)`.
pub(super) fn fins(r: &Resolved, m: f64) -> f64 {
    r.count * r.conductivity * m * r.cross_section * (m * r.corrected_height).tanh()
}

/// Natural convection from the base area between the fins.
pub(super) fn unfinned(r: &Resolved, base_temperature: f64) -> f64 {
    let mean = 0.5 * (base_temperature + r.ambient);
    let rise = base_temperature - r.ambient;

    let alpha = if rise <= (0.840 / r.width).powi(3) {
        let a1 = 1.3866 - 0.0012 * mean;
        a1 * (rise / r.width).powf(0.25)
    } else {
        let a2 = 1.67 - 0.0034 * mean;
        a2 * rise.powf(0.33)
    };

    alpha * r.unfinned_area
}

/// Gray-body radiation from the covering envelope.
pub(super) fn radiation(r: &Resolved, base_temperature: f64) -> f64 {
    let mean = 0.5 * (base_temperature + r.ambient) + 273.0;
    let alpha = 0.227 * r.emissivity * (mean / 100.0).powi(3);
    alpha * r.covering_area
}
