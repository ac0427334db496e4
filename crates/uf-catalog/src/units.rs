//! Static unit tables.
//!
//! Each linear category lists its units in display order. The factor is
//! "how many of this unit equal one base-unit quantity", so the base unit
//! always carries 1.0 and converting goes value / factor(from) * factor(to).

use uf_core::Real;

/// One unit in a linear category's table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub name: &'static str,
    pub factor: Real,
}

const fn unit(name: &'static str, factor: Real) -> UnitDef {
    UnitDef { name, factor }
}

// Base: Meter
pub(crate) const LENGTH_UNITS: [UnitDef; 8] = [
    unit("Meter", 1.0),
    unit("Kilometer", 0.001),
    unit("Centimeter", 100.0),
    unit("Millimeter", 1000.0),
    unit("Mile", 0.000621371),
    unit("Yard", 1.09361),
    unit("Foot", 3.28084),
    unit("Inch", 39.3701),
];

// Base: Kilogram
pub(crate) const MASS_UNITS: [UnitDef; 7] = [
    unit("Kilogram", 1.0),
    unit("Gram", 1000.0),
    unit("Milligram", 1_000_000.0),
    unit("Metric Ton", 0.001),
    unit("Pound", 2.20462),
    unit("Ounce", 35.274),
    unit("Stone", 0.157473),
];

// Base: Square Meter
pub(crate) const AREA_UNITS: [UnitDef; 10] = [
    unit("Square Meter", 1.0),
    unit("Square Kilometer", 0.000001),
    unit("Square Centimeter", 10000.0),
    unit("Square Millimeter", 1_000_000.0),
    unit("Square Mile", 3.861e-7),
    unit("Square Yard", 1.19599),
    unit("Square Foot", 10.7639),
    unit("Square Inch", 1550.0),
    unit("Acre", 0.000247105),
    unit("Hectare", 0.0001),
];

// Base: Cubic Meter
pub(crate) const VOLUME_UNITS: [UnitDef; 11] = [
    unit("Cubic Meter", 1.0),
    unit("Cubic Centimeter", 1_000_000.0),
    unit("Liter", 1000.0),
    unit("Milliliter", 1_000_000.0),
    unit("Gallon (US)", 264.172),
    unit("Quart (US)", 1056.69),
    unit("Pint (US)", 2113.38),
    unit("Cup (US)", 4226.75),
    unit("Fluid Ounce (US)", 33814.0),
    unit("Cubic Inch", 61023.7),
    unit("Cubic Foot", 35.3147),
];

// Base: Meter per second
pub(crate) const SPEED_UNITS: [UnitDef; 5] = [
    unit("Meter per second", 1.0),
    unit("Kilometer per hour", 3.6),
    unit("Mile per hour", 2.23694),
    unit("Foot per second", 3.28084),
    unit("Knot", 1.94384),
];

// Base: Second
pub(crate) const TIME_UNITS: [UnitDef; 9] = [
    unit("Second", 1.0),
    unit("Millisecond", 1000.0),
    unit("Microsecond", 1_000_000.0),
    unit("Minute", 1.0 / 60.0),
    unit("Hour", 1.0 / 3600.0),
    unit("Day", 1.0 / 86400.0),
    unit("Week", 1.0 / 604800.0),
    unit("Month (30 days)", 1.0 / 2592000.0),
    unit("Year (365 days)", 1.0 / 31536000.0),
];

/// Temperature units carry no factor; the engine handles them with
/// dedicated affine formulas anchored on Celsius.
pub const TEMPERATURE_UNITS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];
