//! Geometry and parameters resolved once per solve.

use uom::si::{
    length::meter, power::watt, ratio::ratio, thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::models::thermal::heatsink::core::{Design, StaticParameters, geometry};

/// Plain SI values used by every iteration.
///
/// Temperatures are in °C because the empirical correlations are stated
/// that way.
#[derive(Debug, Clone, Copy)]
pub(super) struct Resolved {
    pub height: f64,
    pub count: f64,
    pub width: f64,
    pub tdp: f64,
    pub ambient: f64,
    pub conductivity: f64,
    pub emissivity: f64,

    /// Fin cross-section `δ·W`.
    pub cross_section: f64,
    /// Fin perimeter `2(δ + W)`.
    pub perimeter: f64,
    /// Fin height corrected for tip convection.
    pub corrected_height: f64,
    /// Base area not covered by ribs.
    pub unfinned_area: f64,
    /// Radiating envelope: base plus side panels.
    pub covering_area: f64,
    /// Total heat-transfer surface.
    pub surface: f64,
    pub volume: f64,
}

impl Resolved {
    pub fn new(design: &Design, params: &StaticParameters) -> Self {
        let h = design.height.get::<meter>();
        let delta = design.thickness.get::<meter>();
        let z = f64::from(design.count);

        let length = params.length().get::<meter>();
        let width = params.width().get::<meter>();
        let base = params.base_thickness().get::<meter>();

        let spacing = geometry::rib_spacing(length, delta, design.count);
        let cross_section = delta * width;
        let perimeter = 2.0 * (delta + width);
        let profile = (2.0 * h + delta + spacing) * z + 2.0 * h + delta + 2.0 * base;

        Self {
            height: h,
            count: z,
            width,
            tdp: params.tdp().get::<watt>(),
            ambient: params.ambient().get::<degree_celsius>(),
            conductivity: params.conductivity().get::<watt_per_meter_kelvin>(),
            emissivity: params.emissivity().get::<ratio>(),
            cross_section,
            perimeter,
            corrected_height: h + cross_section / perimeter,
            unfinned_area: length * width - z * delta * width,
            covering_area: length * width + 2.0 * (length + width) * (h + base),
            surface: profile * width,
            volume: length * width * base + h * delta * width * (z + 1.0),
        }
    }
}
