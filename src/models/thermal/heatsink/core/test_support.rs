use uom::si::{
    f64::{Length, Power, Ratio, ThermalConductivity, ThermodynamicTemperature},
    length::millimeter,
    power::watt,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{Bounds, Design, Heatsink, RibRange, StaticParameters};

/// 100 × 50 mm base, 3 mm thick, 10 W in 25 °C air, aluminium-like material.
pub(crate) fn reference_params() -> StaticParameters {
    StaticParameters::new(
        mm(100.0),
        mm(50.0),
        mm(3.0),
        Power::new::<watt>(10.0),
        celsius(25.0),
        ThermalConductivity::new::<watt_per_meter_kelvin>(200.0),
        Ratio::new::<ratio>(0.8),
    )
    .unwrap()
}

pub(crate) fn reference_heatsink() -> Heatsink {
    Heatsink::new(reference_params())
}

pub(crate) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Builds a design from millimetre dimensions.
pub(crate) fn design(height_mm: f64, thickness_mm: f64, count: u32) -> Design {
    Design::new(mm(height_mm), mm(thickness_mm), count)
}

/// Builds a range from millimetre bounds.
pub(crate) fn range(
    height_mm: (f64, f64),
    thickness_mm: (f64, f64),
    count: (u32, u32),
) -> RibRange {
    RibRange::new(
        Bounds::new(mm(height_mm.0), mm(height_mm.1)),
        Bounds::new(mm(thickness_mm.0), mm(thickness_mm.1)),
        Bounds::new(count.0, count.1),
    )
    .unwrap()
}
