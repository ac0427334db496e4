//! uf-engine: the conversion engine for unitflow.
//!
//! Pure functions over the static catalog in `uf-catalog`: convert one or
//! many values between two units of a category and describe the formula
//! applied. No state, no I/O.
//!
//! # Example
//!
//! ```
//! use uf_catalog::Category;
//! use uf_engine::convert;
//!
//! let c = convert(Category::Length, 1.0, "Meter", "Foot").unwrap();
//! assert!((c.converted - 3.28084).abs() < 1e-9);
//! assert_eq!(c.formula, "Multiply by 3.28084");
//! ```

pub mod convert;
pub mod error;
pub mod formula;
pub mod parse;

// Re-exports for ergonomics
pub use convert::{Conversion, convert, convert_many};
pub use error::{EngineError, EngineResult};
pub use formula::{NO_CONVERSION, formula_text};
pub use parse::parse_values;
