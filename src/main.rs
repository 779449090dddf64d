//! Contact Book - command-line host
//!
//! Reads a JSON array of contact entries from a file (first argument) or
//! stdin, runs each one through the contact form, and prints the resulting
//! list grouped by initial as JSON on stdout.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use contact_book::validation::validate_draft_fields;
use contact_book::{
    Config, Contact, ContactForm, ContactRepository, ContactStore, ListQuery, SystemClock,
};
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// One entry of the input file, as typed into the form.
#[derive(Debug, Deserialize)]
struct EntryInput {
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    #[serde(default)]
    date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct SectionOutput {
    initial: char,
    contacts: Vec<RowOutput>,
}

#[derive(Debug, Serialize)]
struct RowOutput {
    id: String,
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    date_of_birth: NaiveDate,
    has_photo: bool,
}

impl From<&Contact> for RowOutput {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id().to_string(),
            first_name: contact.first_name().to_string(),
            last_name: contact.last_name().to_string(),
            phone: contact.phone().to_string(),
            email: contact.email().to_string(),
            date_of_birth: contact.date_of_birth(),
            has_photo: !contact.profile_image().is_placeholder(),
        }
    }
}

fn read_input() -> Result<String> {
    let mut input = String::new();
    match std::env::args().nth(1) {
        Some(path) => {
            input = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
        }
    }
    Ok(input)
}

/// Enter an entry into a fresh form and save it if the form allows.
fn submit(store: &mut ContactStore, entry: EntryInput) -> bool {
    let mut form = ContactForm::new(SystemClock);
    if let Some(date) = entry.date_of_birth {
        form.set_date_of_birth(date);
    }

    if let Err(e) = form.enter_fields(entry.first_name, entry.last_name, entry.phone, entry.email)
    {
        warn!(error = %e, "Entry rejected");
        return false;
    }

    // Report which field keeps the save gate closed.
    if let Err(reason) =
        validate_draft_fields(form.first_name(), form.last_name(), form.phone(), form.email())
    {
        warn!(first_name = form.first_name(), %reason, "Entry rejected");
        return false;
    }

    match form.save(store) {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Entry rejected");
            false
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Logs go to stderr; stdout carries the JSON result
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let input = read_input()?;
    let entries: Vec<EntryInput> = serde_json::from_str(&input).map_err(|e| {
        error!("Input is not a JSON array of entries: {}", e);
        e
    })?;

    let mut store = ContactStore::new();
    store.on_change(|event| tracing::trace!(?event, "Store changed"));

    let total = entries.len();
    let saved = entries
        .into_iter()
        .map(|entry| submit(&mut store, entry))
        .filter(|saved| *saved)
        .count();
    info!(saved, rejected = total - saved, "Entries processed");

    let query = ListQuery::new(config.search_text.clone(), config.sort_order);
    let sections: Vec<SectionOutput> = query
        .run(store.iter())
        .into_iter()
        .map(|section| SectionOutput {
            initial: section.initial,
            contacts: section.contacts.into_iter().map(RowOutput::from).collect(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&sections)?);
    info!(contacts = store.len(), sections = sections.len(), "Done");
    Ok(())
}
