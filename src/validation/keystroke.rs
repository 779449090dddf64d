//! Per-keystroke acceptance rules.
//!
//! A form asks these predicates about the value a field *would* hold after
//! the keystroke. A rejected value is never committed; the field keeps its
//! previous content.

use super::rules::{is_numeric_or_empty, is_valid_name};

/// Symbols that may be typed into an email field besides `[a-z0-9]`.
const EMAIL_SYMBOLS: &[char] = &['.', '_', '%', '+', '-', '@'];

/// Accept a proposed first/last name value.
pub fn accepts_name_keystroke(proposed: &str) -> bool {
    proposed.is_empty() || is_valid_name(proposed)
}

/// Accept a proposed phone value.
pub fn accepts_phone_keystroke(proposed: &str) -> bool {
    is_numeric_or_empty(proposed)
}

/// Accept a proposed email value.
///
/// Only lowercase letters, digits and `._%+-@` may be typed. The full
/// pattern is checked at save time, not here.
pub fn accepts_email_keystroke(proposed: &str) -> bool {
    proposed
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || EMAIL_SYMBOLS.contains(&c))
}
