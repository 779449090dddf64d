//! Contact list queries.
//!
//! This module turns the store's insertion-ordered contacts into the list a
//! view renders: filtered by free text, sorted by first name and split into
//! one section per initial.

pub mod list_query;

pub use list_query::{
    filter_contacts, group_by_initial, sort_contacts, ListQuery, Section, SortOrder,
};
