//! Save-gate predicates for contact fields.

use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`, anchored so the whole string must match.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("Failed to compile email regex")
});

/// Returns true if `s` is non-empty and consists only of ASCII letters.
///
/// # Example
///
/// ```
/// use contact_book::validation::is_valid_name;
///
/// assert!(is_valid_name("Jane"));
/// assert!(!is_valid_name("Jane2"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Returns true if every character of `s` is an ASCII digit.
///
/// The empty string passes; phone numbers are made mandatory by the
/// emptiness check in [`is_save_enabled`], not here.
pub fn is_numeric_or_empty(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if `s` looks like `local@domain.tld`.
///
/// The local part allows letters, digits and `._%+-`; the domain allows
/// letters, digits, `.` and `-`; the top-level domain is 2 to 64 letters.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Decide whether the save action is available for the given field values.
///
/// Emptiness is judged on the trimmed value while the pattern checks run on
/// the value exactly as typed.
pub fn is_save_enabled(first_name: &str, last_name: &str, phone: &str, email: &str) -> bool {
    validate_draft_fields(first_name, last_name, phone, email).is_ok()
}

/// Check all four fields and report the first one that fails.
///
/// Fields are checked in form order: first name, last name, phone, email.
pub fn validate_draft_fields(
    first_name: &str,
    last_name: &str,
    phone: &str,
    email: &str,
) -> Result<(), ValidationError> {
    check_name(first_name)?;
    check_name(last_name)?;

    if phone.trim().is_empty() || !is_numeric_or_empty(phone) {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }

    if email.trim().is_empty() || !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !is_valid_name(name) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}
