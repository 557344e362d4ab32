#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter an email")]
    EmptyEmail,
}

/// Only emptiness is checked; the address format is left to the input element.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() { return Err(ValidationError::EmptyEmail); }
    Ok(())
}
