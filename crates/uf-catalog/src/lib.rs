//! uf-catalog: the static unit catalog for unitflow.
//!
//! Provides:
//! - Measurement categories (Length, Weight/Mass, Temperature, ...)
//! - Per-category unit tables with factors relative to a base unit
//! - ConversionRule dispatch between linear-factor and affine-temperature
//!   categories
//!
//! All data is process-wide constant; nothing here is mutable at runtime.
//! Temperature is the one category without factors: its units are related
//! by affine formulas, handled by the conversion engine.

pub mod category;
pub mod error;
pub mod rule;
pub mod units;

// Re-exports for ergonomics
pub use category::Category;
pub use error::{CatalogError, CatalogResult};
pub use rule::ConversionRule;
pub use units::{TEMPERATURE_UNITS, UnitDef};
