//! Human-readable formula text for a unit pair.

use crate::error::EngineResult;
use uf_catalog::{Category, CatalogError, ConversionRule};
use uf_core::format_sig;

/// Reported for every identity pair, in every category.
pub const NO_CONVERSION: &str = "No conversion needed";

/// The formula applied when converting `from_unit` to `to_unit`.
///
/// Independent of any input value: linear pairs report their multiplier to
/// 6 significant digits, temperature pairs come from a fixed table of the
/// six ordered non-identity pairs.
pub fn formula_text(category: Category, from_unit: &str, to_unit: &str) -> EngineResult<String> {
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
        return Ok(NO_CONVERSION.to_string());
    }

    match rule {
        ConversionRule::LinearFactor { .. } => {
            let f_from = rule.factor(category, from_unit)?;
            let f_to = rule.factor(category, to_unit)?;
            Ok(format!("Multiply by {}", format_sig(f_to / f_from, 6)))
        }
        ConversionRule::AffineTemperature => {
            // Membership was checked above, so the pair table is total here.
            let text = temperature_formula(from_unit, to_unit).ok_or_else(|| {
                CatalogError::UnknownUnit {
                    unit: from_unit.to_string(),
                    category,
                }
            })?;
            Ok(text.to_string())
        }
    }
}

fn temperature_formula(from_unit: &str, to_unit: &str) -> Option<&'static str> {
    match (from_unit, to_unit) {
        ("Celsius", "Fahrenheit") => Some("°F = (°C × 9/5) + 32"),
        ("Fahrenheit", "Celsius") => Some("°C = (°F - 32) × 5/9"),
        ("Celsius", "Kelvin") => Some("K = °C + 273.15"),
        ("Kelvin", "Celsius") => Some("°C = K - 273.15"),
        ("Fahrenheit", "Kelvin") => Some("K = (°F - 32) × 5/9 + 273.15"),
        ("Kelvin", "Fahrenheit") => Some("°F = (K - 273.15) × 9/5 + 32"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_formula_reports_multiplier() {
        let text = formula_text(Category::Length, "Meter", "Foot").unwrap();
        assert_eq!(text, "Multiply by 3.28084");

        let text = formula_text(Category::Time, "Second", "Hour").unwrap();
        assert_eq!(text, "Multiply by 0.000277778");
    }

    #[test]
    fn identity_pairs_need_no_conversion() {
        let text = formula_text(Category::Length, "Meter", "Meter").unwrap();
        assert_eq!(text, NO_CONVERSION);

        let text = formula_text(Category::Temperature, "Kelvin", "Kelvin").unwrap();
        assert_eq!(text, NO_CONVERSION);
    }

    #[test]
    fn all_six_temperature_pairs_are_covered() {
        let units = ["Celsius", "Fahrenheit", "Kelvin"];
        for from in units {
            for to in units {
                if from == to {
                    continue;
                }
                let text = formula_text(Category::Temperature, from, to).unwrap();
                assert_ne!(text, NO_CONVERSION, "missing formula for {from} -> {to}");
            }
        }
    }

    #[test]
    fn celsius_to_fahrenheit_canonical_text() {
        let text = formula_text(Category::Temperature, "Celsius", "Fahrenheit").unwrap();
        assert_eq!(text, "°F = (°C × 9/5) + 32");
    }

    #[test]
    fn foreign_unit_fails_loudly() {
        let err = formula_text(Category::Temperature, "Meter", "Kelvin").unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::Catalog(CatalogError::UnknownUnit { .. })
        ));
    }
}
