//! Validation error types and shared field checks

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Loose email shape check: something@something.something
/// Deliverability is the mail provider's problem, not ours.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Validation error for request models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field is below the allowed minimum
    TooSmall { field: &'static str, min: i64 },

    /// String doesn't match required format (e.g., email)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooSmall { field, min } => {
                write!(f, "{} must be at least {}", field, min)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a non-empty string after trimming; returns the trimmed value.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Require a plausible email address.
pub fn required_email(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = required(field, value)?;
    if !EMAIL_RE.is_match(&trimmed) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a valid email address",
        });
    }
    Ok(trimmed)
}
