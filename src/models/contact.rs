//! Contact model representing a person in the contact book.

use crate::domain::{ContactId, EmailAddress, PersonName, PhoneNumber};
use chrono::NaiveDate;
use std::sync::Arc;

/// Raw image bytes chosen by the user.
///
/// Cloning is cheap; the bytes are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData(Arc<[u8]>);

impl ImageData {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Arc::from(bytes.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Profile image of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileImage {
    /// No image was chosen; hosts render their default avatar.
    #[default]
    Placeholder,

    /// An image picked by the user.
    Picked(ImageData),
}

impl ProfileImage {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Validated field values for a contact that has not been stored yet.
///
/// Every text field is a domain value object, so holding a draft means the
/// values already passed the form's save gate. Optional fields are filled
/// in by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_image: Option<ProfileImage>,
}

impl ContactDraft {
    /// Create a draft with the four required fields and no date or image.
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        phone: PhoneNumber,
        email: EmailAddress,
    ) -> Self {
        Self {
            first_name,
            last_name,
            phone,
            email,
            date_of_birth: None,
            profile_image: None,
        }
    }

    pub fn with_date_of_birth(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    pub fn with_profile_image(mut self, image: ProfileImage) -> Self {
        self.profile_image = Some(image);
        self
    }
}

/// A contact held by the store.
///
/// Contacts are immutable snapshots: the store hands out clones and the
/// only way to change a record is to replace it through the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    id: ContactId,
    first_name: PersonName,
    last_name: PersonName,
    phone: PhoneNumber,
    email: EmailAddress,
    date_of_birth: NaiveDate,
    profile_image: ProfileImage,
}

impl Contact {
    /// Build a contact from a draft, filling unset fields with `today` and
    /// the placeholder image.
    pub(crate) fn from_draft(id: ContactId, draft: ContactDraft, today: NaiveDate) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            phone: draft.phone,
            email: draft.email,
            date_of_birth: draft.date_of_birth.unwrap_or(today),
            profile_image: draft.profile_image.unwrap_or_default(),
        }
    }

    /// Build the replacement for this contact. Unset draft fields keep the
    /// current date of birth and image.
    pub(crate) fn replaced_by(&self, draft: ContactDraft) -> Self {
        Self {
            id: self.id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            phone: draft.phone,
            email: draft.email,
            date_of_birth: draft.date_of_birth.unwrap_or(self.date_of_birth),
            profile_image: draft
                .profile_image
                .unwrap_or_else(|| self.profile_image.clone()),
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn profile_image(&self) -> &ProfileImage {
        &self.profile_image
    }

    /// "First Last", as shown in list rows.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Section key for the contact list.
    pub fn initial(&self) -> char {
        self.first_name.initial()
    }
}
