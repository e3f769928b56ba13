//! Precondition helpers for builder validation.
//!
//! Free functions instead of a stateful validator: they carry no state
//! and need no lifecycle.

use crate::error::BuildError;

/// Unwraps a required builder field, or fails with [`BuildError::MissingField`].
///
/// # Example
///
/// ```
/// use ridl_util::required;
///
/// let value = required(Some(1), "count").unwrap();
/// assert_eq!(value, 1);
/// assert!(required::<i32>(None, "count").is_err());
/// ```
pub fn required<T>(value: Option<T>, what: &str) -> Result<T, BuildError> {
    value.ok_or_else(|| BuildError::MissingField(what.to_string()))
}

/// Checks a construction-time invariant, or fails with [`BuildError::InvalidField`].
pub fn require(condition: bool, field: &str, reason: &str) -> Result<(), BuildError> {
    if condition {
        Ok(())
    } else {
        Err(BuildError::InvalidField {
            field: field.to_string(),
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_present() {
        assert_eq!(required(Some("x"), "name").unwrap(), "x");
    }

    #[test]
    fn test_required_absent() {
        let err = required::<u32>(None, "name").unwrap_err();
        assert_eq!(err, BuildError::MissingField("name".to_string()));
    }

    #[test]
    fn test_require() {
        assert!(require(true, "parts", "must be non-empty").is_ok());
        assert!(require(false, "parts", "must be non-empty").is_err());
    }
}
