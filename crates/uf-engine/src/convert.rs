//! Value conversion.

use crate::error::EngineResult;
use crate::formula::formula_text;
use serde::Serialize;
use uf_catalog::{Category, CatalogError, ConversionRule};

/// One converted value with the formula that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub original: f64,
    pub converted: f64,
    pub formula: String,
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Linear categories go through the implicit base unit
/// (value / factor(from) * factor(to)); Temperature normalizes to Celsius
/// and projects to the target. Identity pairs return the value unchanged.
pub fn convert(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> EngineResult<Conversion> {
    let converted = match category.rule() {
        rule @ ConversionRule::LinearFactor { .. } => {
            convert_linear(rule, category, value, from_unit, to_unit)?
        }
        ConversionRule::AffineTemperature => {
            convert_temperature(category, value, from_unit, to_unit)?
        }
    };

    Ok(Conversion {
        original: value,
        converted,
        formula: formula_text(category, from_unit, to_unit)?,
    })
}

/// Convert every element of `values`, preserving order and count.
pub fn convert_many(
    category: Category,
    values: &[f64],
    from_unit: &str,
    to_unit: &str,
) -> EngineResult<Vec<Conversion>> {
    values
        .iter()
        .map(|&value| convert(category, value, from_unit, to_unit))
        .collect()
}

fn convert_linear(
    rule: ConversionRule,
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> EngineResult<f64> {
    // Look up both factors even for identity pairs so a unit outside the
    // category fails loudly instead of passing through.
    let f_from = rule.factor(category, from_unit)?;
    let f_to = rule.factor(category, to_unit)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    // No catalog factor is zero; the guard keeps the unreachable branch
    // from dividing anyway.
    debug_assert!(f_from != 0.0, "zero factor in catalog for {from_unit}");
    let base = if f_from == 0.0 { 0.0 } else { value / f_from };
    Ok(base * f_to)
}

fn convert_temperature(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> EngineResult<f64> {
    let rule = category.rule();
    for unit in [from_unit, to_unit] {
        if !rule.contains(unit) {
            return Err(CatalogError::UnknownUnit {
                unit: unit.to_string(),
                category,
            }
            .into());
        }
    }

    if from_unit == to_unit {
        return Ok(value);
    }

    // Normalize to Celsius, then project to the target unit.
    let celsius = match from_unit {
        "Fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "Kelvin" => value - 273.15,
        _ => value,
    };
    Ok(match to_unit {
        "Fahrenheit" => celsius * 9.0 / 5.0 + 32.0,
        "Kelvin" => celsius + 273.15,
        _ => celsius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uf_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn meter_to_foot() {
        let c = convert(Category::Length, 1.0, "Meter", "Foot").unwrap();
        assert!(close(c.converted, 3.28084));
    }

    #[test]
    fn kilogram_to_pound() {
        let c = convert(Category::Mass, 2.0, "Kilogram", "Pound").unwrap();
        assert!(close(c.converted, 4.40924));
    }

    #[test]
    fn seconds_to_hours() {
        let c = convert(Category::Time, 3600.0, "Second", "Hour").unwrap();
        assert!(close(c.converted, 1.0));
    }

    #[test]
    fn identity_returns_value_unchanged() {
        let c = convert(Category::Volume, 2.5, "Liter", "Liter").unwrap();
        assert_eq!(c.converted, 2.5);
        assert_eq!(c.formula, crate::NO_CONVERSION);
    }

    #[test]
    fn celsius_to_fahrenheit_freezing_point() {
        let c = convert(Category::Temperature, 0.0, "Celsius", "Fahrenheit").unwrap();
        assert_eq!(c.converted, 32.0);
    }

    #[test]
    fn fahrenheit_to_celsius_freezing_point() {
        let c = convert(Category::Temperature, 32.0, "Fahrenheit", "Celsius").unwrap();
        assert_eq!(c.converted, 0.0);
    }

    #[test]
    fn fahrenheit_to_kelvin_goes_through_celsius() {
        let c = convert(Category::Temperature, 32.0, "Fahrenheit", "Kelvin").unwrap();
        assert!(close(c.converted, 273.15));
    }

    #[test]
    fn temperature_identity_skips_both_steps() {
        let c = convert(Category::Temperature, -40.0, "Kelvin", "Kelvin").unwrap();
        assert_eq!(c.converted, -40.0);
    }

    #[test]
    fn convert_many_preserves_order_and_count() {
        let values = [1.0, 2.0, 3.0];
        let results = convert_many(Category::Length, &values, "Meter", "Centimeter").unwrap();
        assert_eq!(results.len(), values.len());
        for (value, result) in values.iter().zip(&results) {
            assert_eq!(result.original, *value);
            assert!(close(result.converted, value * 100.0));
        }
    }

    #[test]
    fn unknown_unit_is_a_loud_error() {
        let err = convert(Category::Length, 1.0, "Meter", "Kilogram").unwrap_err();
        assert!(matches!(err, crate::EngineError::Catalog(_)));

        // Identity spelling of a foreign unit must not slip through either.
        let err = convert(Category::Length, 1.0, "Kilogram", "Kilogram").unwrap_err();
        assert!(matches!(err, crate::EngineError::Catalog(_)));
    }
}
