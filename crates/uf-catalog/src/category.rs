//! Measurement categories.

use crate::error::CatalogError;
use crate::rule::ConversionRule;
use crate::units::{
    AREA_UNITS, LENGTH_UNITS, MASS_UNITS, SPEED_UNITS, TEMPERATURE_UNITS, TIME_UNITS, VOLUME_UNITS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measurement category. Determines which unit set and conversion rule
/// apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Area,
    Volume,
    Speed,
    Time,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Mass,
        Category::Temperature,
        Category::Area,
        Category::Volume,
        Category::Speed,
        Category::Time,
    ];

    /// Display name, as shown in category selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Weight/Mass",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Time => "Time",
        }
    }

    /// The conversion rule governing this category.
    pub fn rule(&self) -> ConversionRule {
        match self {
            Category::Length => ConversionRule::LinearFactor {
                units: &LENGTH_UNITS,
            },
            Category::Mass => ConversionRule::LinearFactor { units: &MASS_UNITS },
            Category::Temperature => ConversionRule::AffineTemperature,
            Category::Area => ConversionRule::LinearFactor { units: &AREA_UNITS },
            Category::Volume => ConversionRule::LinearFactor {
                units: &VOLUME_UNITS,
            },
            Category::Speed => ConversionRule::LinearFactor {
                units: &SPEED_UNITS,
            },
            Category::Time => ConversionRule::LinearFactor { units: &TIME_UNITS },
        }
    }

    /// Ordered unit names for display.
    pub fn unit_names(&self) -> Vec<&'static str> {
        match self.rule() {
            ConversionRule::LinearFactor { units } => units.iter().map(|def| def.name).collect(),
            ConversionRule::AffineTemperature => TEMPERATURE_UNITS.to_vec(),
        }
    }

    /// Whether `unit` belongs to this category's unit set.
    pub fn contains(&self, unit: &str) -> bool {
        match self.rule() {
            ConversionRule::LinearFactor { units } => units.iter().any(|def| def.name == unit),
            ConversionRule::AffineTemperature => TEMPERATURE_UNITS.contains(&unit),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight/mass" | "weight" | "mass" => Ok(Category::Mass),
            "temperature" => Ok(Category::Temperature),
            "area" => Ok(Category::Area),
            "volume" => Ok(Category::Volume),
            "speed" => Ok(Category::Speed),
            "time" => Ok(Category::Time),
            _ => Err(CatalogError::UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_category_once() {
        let mut seen = std::collections::HashSet::new();
        for cat in Category::ALL {
            assert!(seen.insert(cat), "duplicate category: {cat}");
        }
        assert_eq!(Category::ALL.len(), 7);
    }

    #[test]
    fn mass_displays_as_weight_mass() {
        assert_eq!(Category::Mass.to_string(), "Weight/Mass");
    }

    #[test]
    fn parse_is_case_insensitive_with_aliases() {
        assert_eq!("length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("Weight/Mass".parse::<Category>().unwrap(), Category::Mass);
        assert_eq!("mass".parse::<Category>().unwrap(), Category::Mass);
        assert_eq!("WEIGHT".parse::<Category>().unwrap(), Category::Mass);
        assert!("furlongs".parse::<Category>().is_err());
    }

    #[test]
    fn unit_names_preserve_table_order() {
        let names = Category::Length.unit_names();
        assert_eq!(names.first(), Some(&"Meter"));
        assert_eq!(names.last(), Some(&"Inch"));
    }

    #[test]
    fn contains_scopes_units_to_their_category() {
        assert!(Category::Length.contains("Meter"));
        assert!(!Category::Length.contains("Kilogram"));
        assert!(Category::Temperature.contains("Kelvin"));
        assert!(!Category::Temperature.contains("Meter"));
    }
}
