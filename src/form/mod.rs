//! Add/edit form state for a single contact.

mod contact_form;

pub use contact_form::ContactForm;
