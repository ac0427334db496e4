//! Conversion engine errors.

use thiserror::Error;
use uf_catalog::CatalogError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while converting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A token in the (comma-separated) numeric input did not parse.
    /// Validation-class: surfaced to the user, nothing is converted.
    #[error("Invalid numeric value: '{token}'")]
    InvalidNumber { token: String },

    /// A unit/category pairing the frontends should make impossible.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_number_names_the_token() {
        let err = EngineError::InvalidNumber {
            token: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));
    }
}
