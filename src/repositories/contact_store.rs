use super::traits::ContactRepository;
use crate::collaborators::{Clock, SystemClock};
use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};
use tracing::debug;

/// Change notification emitted after every successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(ContactId),
    Updated(ContactId),
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// In-memory contact list held for the lifetime of the process.
///
/// Owned by the host and passed to whoever needs it; there is no global
/// instance. Views that render the list register a listener with
/// [`ContactStore::on_change`] to learn when to redraw.
pub struct ContactStore {
    contacts: Vec<Contact>,
    clock: Box<dyn Clock>,
    listeners: Vec<Listener>,
}

impl ContactStore {
    /// Create an empty store that dates new contacts with the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty store using `clock` for default birth dates.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            contacts: Vec::new(),
            clock: Box::new(clock),
            listeners: Vec::new(),
        }
    }

    /// Register a listener called after each add or update.
    pub fn on_change(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Borrow the contacts in insertion order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    fn position(&self, id: ContactId) -> StoreResult<usize> {
        self.contacts
            .iter()
            .position(|c| c.id() == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn notify(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for ContactStore {
    fn add(&mut self, draft: ContactDraft) -> Contact {
        let contact = Contact::from_draft(ContactId::generate(), draft, self.clock.today());
        debug!(id = %contact.id(), total = self.contacts.len() + 1, "Contact added");

        self.contacts.push(contact.clone());
        self.notify(StoreEvent::Added(contact.id()));
        contact
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn get(&self, id: ContactId) -> StoreResult<Contact> {
        let index = self.position(id)?;
        Ok(self.contacts[index].clone())
    }

    fn update(&mut self, id: ContactId, draft: ContactDraft) -> StoreResult<Contact> {
        let index = self.position(id)?;
        let updated = self.contacts[index].replaced_by(draft);
        debug!(id = %id, "Contact updated");

        self.contacts[index] = updated.clone();
        self.notify(StoreEvent::Updated(id));
        Ok(updated)
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::FixedClock;
    use crate::domain::{EmailAddress, PersonName, PhoneNumber};
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn draft(first: &str, last: &str) -> ContactDraft {
        ContactDraft::new(
            PersonName::new(first).unwrap(),
            PersonName::new(last).unwrap(),
            PhoneNumber::new("5551234").unwrap(),
            EmailAddress::new("someone@example.com").unwrap(),
        )
    }

    #[test]
    fn test_add_to_empty_store() {
        let mut store = ContactStore::with_clock(FixedClock(today()));
        let contact = store.add(draft("John", "Doe"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.list(), vec![contact.clone()]);
        assert_eq!(contact.first_name().as_str(), "John");
        assert_eq!(contact.last_name().as_str(), "Doe");
        assert_eq!(contact.date_of_birth(), today());
        assert!(contact.profile_image().is_placeholder());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = ContactStore::with_clock(FixedClock(today()));
        for name in ["Charlie", "Alice", "Bob"] {
            store.add(draft(name, "Smith"));
        }

        let names: Vec<String> = store
            .list()
            .iter()
            .map(|c| c.first_name().to_string())
            .collect();
        assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = ContactStore::new();
        let a = store.add(draft("Ann", "Lee"));
        let b = store.add(draft("Ann", "Lee"));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ContactStore::new();
        let id = ContactId::generate();
        assert_eq!(store.get(id), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = ContactStore::with_clock(FixedClock(today()));
        store.add(draft("Ann", "Lee"));
        let target = store.add(draft("Bob", "Ray"));
        store.add(draft("Cid", "Moe"));

        let updated = store.update(target.id(), draft("Rob", "Ray")).unwrap();

        assert_eq!(updated.id(), target.id());
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[1].first_name().as_str(), "Rob");
        assert_eq!(store.get(target.id()).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_id_leaves_store_untouched() {
        let mut store = ContactStore::new();
        store.add(draft("Ann", "Lee"));
        let before = store.list();

        let id = ContactId::generate();
        assert_eq!(
            store.update(id, draft("Bob", "Ray")),
            Err(StoreError::NotFound(id))
        );
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_listeners_receive_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut store = ContactStore::new();
        store.on_change(move |event| sink.borrow_mut().push(*event));

        let contact = store.add(draft("Ann", "Lee"));
        store.update(contact.id(), draft("Anne", "Lee")).unwrap();
        let _ = store.update(ContactId::generate(), draft("Bob", "Ray"));

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Added(contact.id()),
                StoreEvent::Updated(contact.id())
            ]
        );
    }
}
