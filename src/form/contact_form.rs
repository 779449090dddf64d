//! Contact form state machine.
//!
//! Holds the raw text a user is typing, filters each keystroke, gates the
//! save action and hands a validated draft to the store.

use crate::collaborators::{Clock, ImageSource};
use crate::domain::{ContactId, EmailAddress, PersonName, PhoneNumber, ValidationError};
use crate::error::{FormError, FormResult};
use crate::models::{Contact, ContactDraft, ProfileImage};
use crate::repositories::ContactRepository;
use crate::validation::{
    accepts_email_keystroke, accepts_name_keystroke, accepts_phone_keystroke, is_save_enabled,
};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Form for adding a new contact or editing an existing one.
///
/// In edit mode the form remembers which contact it was opened for, and
/// saving replaces that record instead of appending a new one.
///
/// # Example
///
/// ```
/// use contact_book::collaborators::SystemClock;
/// use contact_book::form::ContactForm;
/// use contact_book::repositories::{ContactRepository, ContactStore};
///
/// let mut store = ContactStore::new();
/// let mut form = ContactForm::new(SystemClock);
///
/// form.set_first_name("John");
/// form.set_last_name("Doe");
/// form.set_phone("5551234");
/// form.set_email("john@doe.com");
/// assert!(form.is_save_enabled());
///
/// form.save(&mut store).unwrap();
/// assert_eq!(store.len(), 1);
/// ```
pub struct ContactForm {
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    date_of_birth: NaiveDate,
    profile_image: ProfileImage,
    editing: Option<ContactId>,
    clock: Box<dyn Clock>,
}

impl ContactForm {
    /// Empty form for a new contact, dated today.
    pub fn new(clock: impl Clock + 'static) -> Self {
        let date_of_birth = clock.today();
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
            date_of_birth,
            profile_image: ProfileImage::Placeholder,
            editing: None,
            clock: Box::new(clock),
        }
    }

    /// Form pre-filled with every field of `contact`.
    pub fn editing(contact: &Contact, clock: impl Clock + 'static) -> Self {
        Self {
            first_name: contact.first_name().to_string(),
            last_name: contact.last_name().to_string(),
            phone: contact.phone().to_string(),
            email: contact.email().to_string(),
            date_of_birth: contact.date_of_birth(),
            profile_image: contact.profile_image().clone(),
            editing: Some(contact.id()),
            clock: Box::new(clock),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn profile_image(&self) -> &ProfileImage {
        &self.profile_image
    }

    /// ID of the contact being edited, if any.
    pub fn editing_id(&self) -> Option<ContactId> {
        self.editing
    }

    /// Commit `proposed` as the first name if the keystroke is accepted.
    ///
    /// Returns whether the value was committed.
    pub fn set_first_name(&mut self, proposed: impl Into<String>) -> bool {
        commit(&mut self.first_name, proposed.into(), accepts_name_keystroke, "first_name")
    }

    pub fn set_last_name(&mut self, proposed: impl Into<String>) -> bool {
        commit(&mut self.last_name, proposed.into(), accepts_name_keystroke, "last_name")
    }

    pub fn set_phone(&mut self, proposed: impl Into<String>) -> bool {
        commit(&mut self.phone, proposed.into(), accepts_phone_keystroke, "phone")
    }

    pub fn set_email(&mut self, proposed: impl Into<String>) -> bool {
        commit(&mut self.email, proposed.into(), accepts_email_keystroke, "email")
    }

    /// Enter all four text fields at once, as pasted text.
    ///
    /// Stops at the first field whose keystroke rule refuses its value; the
    /// fields entered before it keep their new values.
    pub fn enter_fields(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> FormResult<()> {
        enter(&mut self.first_name, first_name.into(), accepts_name_keystroke, "first_name")?;
        enter(&mut self.last_name, last_name.into(), accepts_name_keystroke, "last_name")?;
        enter(&mut self.phone, phone.into(), accepts_phone_keystroke, "phone")?;
        enter(&mut self.email, email.into(), accepts_email_keystroke, "email")
    }

    pub fn set_date_of_birth(&mut self, date: NaiveDate) {
        self.date_of_birth = date;
    }

    /// Ask `source` for a profile image.
    ///
    /// A cancelled pick keeps the current image. Returns whether an image
    /// was chosen.
    pub fn choose_image(&mut self, source: &mut dyn ImageSource) -> bool {
        match source.pick_image() {
            Some(image) => {
                debug!(bytes = image.len(), "Profile image chosen");
                self.profile_image = ProfileImage::Picked(image);
                true
            }
            None => {
                debug!("Image selection cancelled");
                false
            }
        }
    }

    pub fn is_save_enabled(&self) -> bool {
        is_save_enabled(&self.first_name, &self.last_name, &self.phone, &self.email)
    }

    /// Build a validated draft from the current field values.
    pub fn to_draft(&self) -> Result<ContactDraft, ValidationError> {
        let draft = ContactDraft::new(
            PersonName::new(self.first_name.as_str())?,
            PersonName::new(self.last_name.as_str())?,
            PhoneNumber::new(self.phone.as_str())?,
            EmailAddress::new(self.email.as_str())?,
        );

        Ok(draft
            .with_date_of_birth(self.date_of_birth)
            .with_profile_image(self.profile_image.clone()))
    }

    /// Save the form into `store` and reset it.
    ///
    /// A new contact is appended; an edited contact is replaced in place.
    ///
    /// # Errors
    ///
    /// `FormError::SaveDisabled` if any field is invalid, or
    /// `FormError::Store` if the edited contact no longer exists. The form
    /// keeps its values on error.
    pub fn save(&mut self, store: &mut dyn ContactRepository) -> FormResult<Contact> {
        if !self.is_save_enabled() {
            return Err(FormError::SaveDisabled);
        }

        let draft = self.to_draft()?;
        let contact = match self.editing {
            Some(id) => store.update(id, draft)?,
            None => store.add(draft),
        };

        info!(
            id = %contact.id(),
            edited = self.editing.is_some(),
            "Contact saved"
        );

        self.reset();
        Ok(contact)
    }

    /// Clear every field and leave edit mode.
    pub fn reset(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.phone.clear();
        self.email.clear();
        self.date_of_birth = self.clock.today();
        self.profile_image = ProfileImage::Placeholder;
        self.editing = None;
    }
}

fn enter(
    field: &mut String,
    proposed: String,
    accepts: fn(&str) -> bool,
    name: &'static str,
) -> FormResult<()> {
    if accepts(&proposed) {
        *field = proposed;
        Ok(())
    } else {
        debug!(field = name, "Keystroke rejected");
        Err(FormError::Rejected {
            field: name,
            value: proposed,
        })
    }
}

fn commit(
    field: &mut String,
    proposed: String,
    accepts: fn(&str) -> bool,
    name: &'static str,
) -> bool {
    enter(field, proposed, accepts, name).is_ok()
}
