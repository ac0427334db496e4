//! Catalog lookup errors.

use crate::Category;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by catalog lookups.
///
/// Frontends derive their unit choices from the active category's own
/// tables, so these indicate a wiring bug rather than bad user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Unit name not found in the selected category's table.
    #[error("Unit '{unit}' does not belong to category {category}")]
    UnknownUnit { unit: String, category: Category },

    /// Category name did not match any catalog category.
    #[error("Unknown category '{name}'")]
    UnknownCategory { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::UnknownUnit {
            unit: "Furlong".to_string(),
            category: Category::Length,
        };
        assert!(err.to_string().contains("Furlong"));
        assert!(err.to_string().contains("Length"));
    }
}
