//! Data models for the contact book.
//!
//! This module contains the stored contact record, the draft it is built
//! from, and the profile image payload.

pub mod contact;

pub use contact::{Contact, ContactDraft, ImageData, ProfileImage};
