//! Application-layer errors.

use thiserror::Error;
use uf_catalog::CatalogError;
use uf_engine::EngineError;

/// Result type for service operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to the frontends.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("History serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    /// Whether this is bad user input (as opposed to a frontend wiring bug).
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Engine(EngineError::InvalidNumber { .. }))
    }
}
