//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! identifiers, person names, email addresses and phone numbers. Each value
//! object runs the field's validation rule at construction time, so a value
//! that exists has already passed the save gate.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use person_name::PersonName;
pub use phone::PhoneNumber;
