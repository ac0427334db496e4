//! uf-core: stable foundation for unitflow.
//!
//! Contains:
//! - numeric (Real + tolerances + significant-digit formatting)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{UfError, UfResult};
pub use numeric::*;
