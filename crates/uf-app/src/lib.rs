//! Shared application service layer for unitflow.
//!
//! This crate provides a unified interface for both the CLI and GUI
//! frontends, centralizing catalog listing, conversion, and history
//! recording. Frontends call these functions and render the output; they
//! never reach into the engine or catalog directly.

pub mod error;
pub mod service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use service::{
    ConversionOutcome, convert_input, convert_values, history_json, list_categories, list_history,
    list_units, record_conversion,
};
