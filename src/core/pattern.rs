//! Normalization of user-supplied watch patterns.

use crate::errors::{Error, Result};

/// Lower-cases a pattern for storage and comparison.
///
/// Surrounding whitespace is kept as typed, so the stored pattern is exactly the
/// lower-cased input. A blank pattern would match every message and is rejected.
pub fn normalize_pattern(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Err(Error::InvalidPattern {
            message: "pattern cannot be empty".to_string(),
        });
    }
    Ok(input.to_lowercase())
}
