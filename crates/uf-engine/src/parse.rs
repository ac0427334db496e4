//! Numeric input parsing.

use crate::error::{EngineError, EngineResult};
use uf_core::ensure_finite;

/// Parse a comma-separated list of numbers.
///
/// Fail-fast: one bad token rejects the whole input, so callers never see
/// a partial value list. Tokens that parse but are not finite ("inf",
/// "nan") are rejected the same way; the engine's arithmetic assumes
/// finite inputs.
pub fn parse_values(input: &str) -> EngineResult<Vec<f64>> {
    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            let invalid = || EngineError::InvalidNumber {
                token: token.to_string(),
            };
            let value = token.parse::<f64>().map_err(|_| invalid())?;
            ensure_finite(value, "input value").map_err(|_| invalid())
        })
        .collect()
}
