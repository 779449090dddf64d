use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactDraft};

/// Repository for managing contacts.
///
/// The single point of mutation for the contact list. Implementations keep
/// insertion order as the canonical order and never re-validate drafts; a
/// [`ContactDraft`] is already made of validated value objects.
pub trait ContactRepository {
    /// Store a new contact built from `draft` and return it.
    ///
    /// A fresh identifier is assigned. An unset date of birth becomes the
    /// current date and an unset image becomes the placeholder.
    fn add(&mut self, draft: ContactDraft) -> Contact;

    /// Snapshot of all contacts in insertion order.
    fn list(&self) -> Vec<Contact>;

    /// Retrieve a single contact by ID.
    fn get(&self, id: ContactId) -> StoreResult<Contact>;

    /// Replace the fields of an existing contact, keeping its ID and position.
    fn update(&mut self, id: ContactId, draft: ContactDraft) -> StoreResult<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
