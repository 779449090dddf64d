//! Filter, sort and section pipeline for the contact list.
//!
//! All functions are pure: they borrow the contacts and return new
//! sequences, leaving the store's canonical order untouched. Grouping looks
//! only at its input sequence, so nothing carries over between renders.

use crate::models::Contact;
use std::cmp::Ordering;
use std::str::FromStr;

/// Direction of the first-name sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Flip the direction, as the list's sort button does.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("Must be asc or desc, got: {}", other)),
        }
    }
}

/// The list view's search box and sort toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub sort_order: SortOrder,
}

impl ListQuery {
    pub fn new(search_text: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            search_text: search_text.into(),
            sort_order,
        }
    }

    /// Filter, sort and group `contacts` for display.
    pub fn run<'a, I>(&self, contacts: I) -> Vec<Section<'a>>
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        let mut visible = filter_contacts(contacts, &self.search_text);
        sort_contacts(&mut visible, self.sort_order);
        group_by_initial(visible)
    }
}

/// Contacts sharing an initial, rendered under one header.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub initial: char,
    pub contacts: Vec<&'a Contact>,
}

/// Keep contacts whose first or last name contains `search_text`,
/// ignoring case. Empty search text keeps everything.
pub fn filter_contacts<'a, I>(contacts: I, search_text: &str) -> Vec<&'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    if search_text.is_empty() {
        return contacts.into_iter().collect();
    }

    let needle = search_text.to_lowercase();
    contacts
        .into_iter()
        .filter(|c| {
            c.first_name().as_str().to_lowercase().contains(&needle)
                || c.last_name().as_str().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort by first name in code-point order.
///
/// The sort is stable in both directions: contacts with equal first names
/// keep their relative insertion order.
pub fn sort_contacts(contacts: &mut [&Contact], order: SortOrder) {
    contacts.sort_by(|a, b| order.apply(a.first_name().as_str().cmp(b.first_name().as_str())));
}

/// Split a sorted sequence into one section per initial.
///
/// Sections appear in the order their initial is first met and each initial
/// gets exactly one section. Code-point order can separate names sharing an
/// initial (`Al`, `Bob`, `amy`); later ones join the existing section.
pub fn group_by_initial<'a, I>(contacts: I) -> Vec<Section<'a>>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut sections: Vec<Section<'a>> = Vec::new();

    for contact in contacts {
        let initial = contact.initial();
        match sections.iter().position(|s| s.initial == initial) {
            Some(index) => sections[index].contacts.push(contact),
            None => sections.push(Section {
                initial,
                contacts: vec![contact],
            }),
        }
    }

    sections
}
