//! # Validation Utilities
//!
//! Input validation helpers for request fields.

/// Validate that a string is not empty or whitespace-only.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}
