//! Client-side form validation.
//!
//! Both forms reject bad input with a field-level message before any network
//! call is made; nothing here performs I/O.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter a number")]
    Empty,

    #[error("only half-width digits are allowed")]
    NotDigits,

    #[error("only letters and digits are allowed")]
    NotAlphanumeric,

    #[error("that is not a valid queue number")]
    NotANumber,

    #[error("the ticket number must be greater than zero")]
    Zero,
}

/// Validates an examination-number form value: non-empty, digits only.
///
/// # Errors
///
/// Returns `ValidationError` describing the first rejection reason.
pub fn validate_examination_number(raw: &str) -> Result<u32, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotDigits);
    }
    raw.parse::<u32>().map_err(|_| ValidationError::NotANumber)
}

/// Validates a ticket-number form value: non-empty, alphanumeric, and a
/// positive integer once parsed.
///
/// The character class is wider than the numeric domain on purpose: the input
/// accepts letters so the rejection message can distinguish a stray symbol
/// from a non-numeric ticket.
///
/// # Errors
///
/// Returns `ValidationError` describing the first rejection reason.
pub fn validate_ticket_number(raw: &str) -> Result<u32, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::NotAlphanumeric);
    }
    let number = raw.parse::<u32>().map_err(|_| ValidationError::NotANumber)?;
    if number == 0 {
        return Err(ValidationError::Zero);
    }
    Ok(number)
}
