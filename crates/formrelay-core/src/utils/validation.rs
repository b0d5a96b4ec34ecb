/// Input validation utilities
use crate::error::RelayError;
use regex::Regex;
use std::sync::LazyLock;

// local-part@domain.tld, no whitespace, at least one dot after the @
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_email_address(email: &str) -> Result<(), RelayError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(RelayError::InvalidEmail)
    }
}

/// Returns the trimmed value, or `None` when it is absent or blank
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
