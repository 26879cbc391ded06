//! User field validation
//!
//! Validators trim their input and return the normalized value so callers
//! store exactly what was checked.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Field '{0}' must be a string")]
    NotAString(&'static str),

    #[error("Field '{0}' must be non-empty")]
    Empty(&'static str),

    #[error("Field '{0}' must be <= {1} characters")]
    TooLong(&'static str, usize),

    #[error("Field 'email' must be a valid email address")]
    InvalidEmail,
}

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_EMAIL_LENGTH: usize = 200;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Validate a user name
///
/// Rules:
/// - Must be present
/// - Non-empty after trimming
/// - Maximum 200 characters
pub fn validate_name(value: Option<&str>) -> Result<String, UserValidationError> {
    validate_text("name", value, MAX_NAME_LENGTH)
}

/// Validate an email address
///
/// Rules:
/// - Must be present
/// - Non-empty after trimming
/// - Maximum 200 characters
/// - Shaped like `local@domain.tld` with no whitespace
pub fn validate_email(value: Option<&str>) -> Result<String, UserValidationError> {
    let email = validate_text("email", value, MAX_EMAIL_LENGTH)?;

    if !EMAIL_RE.is_match(&email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(email)
}

fn validate_text(
    field: &'static str,
    value: Option<&str>,
    max_len: usize,
) -> Result<String, UserValidationError> {
    let value = value.ok_or(UserValidationError::NotAString(field))?.trim();

    if value.is_empty() {
        return Err(UserValidationError::Empty(field));
    }

    if value.chars().count() > max_len {
        return Err(UserValidationError::TooLong(field, max_len));
    }

    Ok(value.to_string())
}
