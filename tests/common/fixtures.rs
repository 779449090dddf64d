//! Test fixtures and sample data.
//!
//! This module provides reusable drafts, stores and dates for the
//! integration tests.

use chrono::NaiveDate;
use contact_book::{
    ContactDraft, ContactRepository, ContactStore, EmailAddress, FixedClock, PersonName,
    PhoneNumber,
};

/// The date every fixture clock reports.
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid fixture date")
}

pub fn fixture_clock() -> FixedClock {
    FixedClock(fixture_today())
}

/// Create a sample draft with the given names and a valid phone and email.
pub fn sample_draft(first_name: &str, last_name: &str) -> ContactDraft {
    let email = format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    ContactDraft::new(
        PersonName::new(first_name).expect("valid first name"),
        PersonName::new(last_name).expect("valid last name"),
        PhoneNumber::new("5551234").expect("valid phone"),
        EmailAddress::new(email).expect("valid email"),
    )
}

/// Create a store dated by the fixture clock and seeded with `names`.
pub fn seeded_store(names: &[(&str, &str)]) -> ContactStore {
    let mut store = ContactStore::with_clock(fixture_clock());
    for (first, last) in names {
        store.add(sample_draft(first, last));
    }
    store
}
