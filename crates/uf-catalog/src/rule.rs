//! Conversion rule dispatch.
//!
//! Linear categories relate units by one multiplicative factor each;
//! Temperature relates its units by affine formulas and has no factors.
//! Carrying the distinction as a tagged enum keeps the engine free of
//! per-call-site category branching.

use crate::Category;
use crate::error::{CatalogError, CatalogResult};
use crate::units::{TEMPERATURE_UNITS, UnitDef};
use uf_core::Real;

/// How a category converts between its units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionRule {
    /// value / factor(from) * factor(to), relative to an implicit base unit.
    LinearFactor { units: &'static [UnitDef] },
    /// Celsius-anchored affine formulas (Celsius, Fahrenheit, Kelvin).
    AffineTemperature,
}

impl ConversionRule {
    /// Factor lookup for a linear category.
    ///
    /// Unknown units (and any unit under `AffineTemperature`) are a wiring
    /// bug in the caller, reported loudly rather than coerced.
    pub fn factor(&self, category: Category, unit: &str) -> CatalogResult<Real> {
        match self {
            ConversionRule::LinearFactor { units } => units
                .iter()
                .find(|def| def.name == unit)
                .map(|def| def.factor)
                .ok_or_else(|| CatalogError::UnknownUnit {
                    unit: unit.to_string(),
                    category,
                }),
            ConversionRule::AffineTemperature => Err(CatalogError::UnknownUnit {
                unit: unit.to_string(),
                category,
            }),
        }
    }

    pub fn contains(&self, unit: &str) -> bool {
        match self {
            ConversionRule::LinearFactor { units } => units.iter().any(|def| def.name == unit),
            ConversionRule::AffineTemperature => TEMPERATURE_UNITS.contains(&unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_lookup_finds_known_units() {
        let rule = Category::Length.rule();
        assert_eq!(rule.factor(Category::Length, "Meter").unwrap(), 1.0);
        assert_eq!(rule.factor(Category::Length, "Foot").unwrap(), 3.28084);
    }

    #[test]
    fn factor_lookup_rejects_foreign_units() {
        let rule = Category::Length.rule();
        let err = rule.factor(Category::Length, "Kilogram").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownUnit { .. }));
    }

    #[test]
    fn temperature_has_no_factors() {
        let rule = Category::Temperature.rule();
        assert!(rule.factor(Category::Temperature, "Celsius").is_err());
        assert!(rule.contains("Celsius"));
    }
}
