//! Field validation rules for contact forms.
//!
//! Every function here is a pure predicate. The same rules gate the save
//! action and decide whether a keystroke is committed to a field.

pub mod keystroke;
pub mod rules;

pub use keystroke::{accepts_email_keystroke, accepts_name_keystroke, accepts_phone_keystroke};
pub use rules::{
    is_numeric_or_empty, is_save_enabled, is_valid_email, is_valid_name, validate_draft_fields,
};
