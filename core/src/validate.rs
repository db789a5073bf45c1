//! Field checks shared by the repositories.
//!
//! RULE: every write validates before touching storage and fails with the
//! most specific error kind.

use crate::error::{DeskError, DeskResult};

/// Required non-empty text. Whitespace-only counts as empty.
pub fn require_text(field: &str, value: &str) -> DeskResult<()> {
    if value.trim().is_empty() {
        return Err(DeskError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Required non-negative finite amount (plan prices, bill amounts).
pub fn require_amount(field: &str, value: f64) -> DeskResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DeskError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_empty() {
        assert!(require_text("name", "  \t").is_err());
        assert!(require_text("name", "Alice").is_ok());
    }

    #[test]
    fn amounts() {
        assert!(require_amount("price", 0.0).is_ok());
        assert!(require_amount("price", 19.99).is_ok());
        assert!(require_amount("price", -1.0).is_err());
        assert!(require_amount("price", f64::NAN).is_err());
        assert!(require_amount("price", f64::INFINITY).is_err());
    }
}
