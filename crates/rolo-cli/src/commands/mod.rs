use crate::error::not_found;
use anyhow::{Context as _, Result};
use rolo_config::AppConfig;
use rolo_core::{AddressBook, Contact};
use rolo_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod addresses;
pub mod birthdays;
pub mod completions;
pub mod contacts;
pub mod emails;
pub mod notes;
pub mod phones;
pub mod shell;

pub struct Context {
    pub book: AddressBook,
    pub store: Store,
    pub config: AppConfig,
    pub json: bool,
}

impl Context {
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.book).context("save snapshot")
    }

    pub fn contact(&self, name: &str) -> Result<&Contact> {
        self.book
            .find_contact(name)
            .ok_or_else(|| not_found(format!("contact not found: '{}'", name)))
    }

    pub fn contact_mut(&mut self, name: &str) -> Result<&mut Contact> {
        self.book
            .find_contact_mut(name)
            .ok_or_else(|| not_found(format!("contact not found: '{}'", name)))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
