// src/domain/validation.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Length limits count characters, not bytes, so CJK titles get the same budget as ASCII ones.
pub(crate) fn ensure_char_len(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> DomainResult<()> {
    let len = value.chars().count();
    if min > 0 && value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if len < min {
        return Err(DomainError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    if len > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_positive_id(field: &str, id: i64) -> DomainResult<()> {
    if id <= 0 {
        Err(DomainError::Validation(format!("{field} must be positive")))
    } else {
        Ok(())
    }
}
