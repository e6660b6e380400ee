//! Field validators shared by request DTOs (`#[validate(custom(...))]`).

use std::borrow::Cow;

use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
        assert!(not_blank("TechCorp").is_ok());
    }
}
