//! Contact Book - the in-memory core of a single-screen contact book.
//!
//! A host UI renders screens; this library owns everything behind them:
//! the contact list, the field rules that gate saving, and the query that
//! turns the list into searchable, sorted sections.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ids, names, phone numbers, emails)
//! - **validation**: Save-gate and keystroke predicates
//! - **models**: Contacts, drafts and profile images
//! - **repositories**: The contact store and its change notifications
//! - **query**: Filter, sort and group-by-initial
//! - **form**: Add/edit form state
//! - **collaborators**: Clock and image source supplied by the host
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod collaborators;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod query;
pub mod repositories;
pub mod validation;

pub use collaborators::{Clock, FixedClock, ImageSource, NoImageSource, SystemClock};
pub use config::Config;
pub use domain::{ContactId, EmailAddress, PersonName, PhoneNumber, ValidationError};
pub use error::{ConfigError, FormError, StoreError};
pub use form::ContactForm;
pub use models::{Contact, ContactDraft, ImageData, ProfileImage};
pub use query::{ListQuery, Section, SortOrder};
pub use repositories::{ContactRepository, ContactStore, StoreEvent};
