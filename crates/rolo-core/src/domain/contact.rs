use crate::domain::{Address, Birthday, ContactId, Email, Name, Note, Phone};
use crate::error::CoreError;
use crate::select::{select_index, Chooser, Selection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            id: ContactId::new(),
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            addresses: Vec::new(),
            notes: Vec::new(),
            birthday: None,
        }
    }

    // phones

    pub fn add_phone(&mut self, phone: Phone) {
        if phone.is_main {
            clear_main(&mut self.phones, |p| &mut p.is_main);
        }
        self.phones.push(phone);
    }

    pub fn select_phone(&self, chooser: &mut dyn Chooser) -> Selection<usize> {
        let options: Vec<String> = self.phones.iter().map(describe_phone).collect();
        select_index("Select phone", &options, chooser)
    }

    pub fn edit_phone(&mut self, index: usize, new_number: &str) -> Result<(), CoreError> {
        self.phones
            .get_mut(index)
            .ok_or(CoreError::ItemNotFound("phone"))?
            .update(new_number)
    }

    pub fn delete_phone(&mut self, index: usize) -> Result<Phone, CoreError> {
        if index >= self.phones.len() {
            return Err(CoreError::ItemNotFound("phone"));
        }
        Ok(self.phones.remove(index))
    }

    pub fn set_main_phone(&mut self, index: usize) -> Result<(), CoreError> {
        set_main(&mut self.phones, index, |p| &mut p.is_main, "phone")
    }

    pub fn main_phone(&self) -> Option<&Phone> {
        self.phones.iter().find(|p| p.is_main)
    }

    // emails

    pub fn add_email(&mut self, email: Email) {
        if email.is_main {
            clear_main(&mut self.emails, |e| &mut e.is_main);
        }
        self.emails.push(email);
    }

    pub fn select_email(&self, chooser: &mut dyn Chooser) -> Selection<usize> {
        let options: Vec<String> = self.emails.iter().map(describe_email).collect();
        select_index("Select email", &options, chooser)
    }

    pub fn edit_email(&mut self, index: usize, new_address: &str) -> Result<(), CoreError> {
        self.emails
            .get_mut(index)
            .ok_or(CoreError::ItemNotFound("email"))?
            .update(new_address)
    }

    pub fn delete_email(&mut self, index: usize) -> Result<Email, CoreError> {
        if index >= self.emails.len() {
            return Err(CoreError::ItemNotFound("email"));
        }
        Ok(self.emails.remove(index))
    }

    pub fn set_main_email(&mut self, index: usize) -> Result<(), CoreError> {
        set_main(&mut self.emails, index, |e| &mut e.is_main, "email")
    }

    pub fn main_email(&self) -> Option<&Email> {
        self.emails.iter().find(|e| e.is_main)
    }

    // addresses

    pub fn add_address(&mut self, address: Address) {
        if address.is_main {
            clear_main(&mut self.addresses, |a| &mut a.is_main);
        }
        self.addresses.push(address);
    }

    pub fn select_address(&self, chooser: &mut dyn Chooser) -> Selection<usize> {
        let options: Vec<String> = self.addresses.iter().map(describe_address).collect();
        select_index("Select address", &options, chooser)
    }

    pub fn edit_address(
        &mut self,
        index: usize,
        country: Option<&str>,
        city: Option<&str>,
        street_address: Option<&str>,
        zip_code: Option<&str>,
    ) -> Result<(), CoreError> {
        self.addresses
            .get_mut(index)
            .ok_or(CoreError::ItemNotFound("address"))?
            .update(country, city, street_address, zip_code)
    }

    pub fn delete_address(&mut self, index: usize) -> Result<Address, CoreError> {
        if index >= self.addresses.len() {
            return Err(CoreError::ItemNotFound("address"));
        }
        Ok(self.addresses.remove(index))
    }

    pub fn set_main_address(&mut self, index: usize) -> Result<(), CoreError> {
        set_main(&mut self.addresses, index, |a| &mut a.is_main, "address")
    }

    pub fn main_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_main)
    }

    // notes

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Indices of notes matching `query` (substring over content, title, tags).
    pub fn find_notes(&self, query: &str) -> Vec<usize> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.matches(query))
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices of notes carrying the exact tag (case-insensitive).
    pub fn notes_with_tag(&self, tag: &str) -> Vec<usize> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.has_tag(tag))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn select_note(&self, query: &str, chooser: &mut dyn Chooser) -> Selection<usize> {
        let matches = self.find_notes(query);
        let options: Vec<String> = matches
            .iter()
            .map(|&index| self.notes[index].summary())
            .collect();
        select_index("Select note", &options, chooser).map(|picked| matches[picked])
    }

    pub fn edit_note(
        &mut self,
        index: usize,
        content: &str,
        title: Option<&str>,
        tags_string: Option<&str>,
    ) -> Result<(), CoreError> {
        self.notes
            .get_mut(index)
            .ok_or(CoreError::ItemNotFound("note"))?
            .update(content, title, tags_string)
    }

    pub fn delete_note(&mut self, index: usize) -> Result<Note, CoreError> {
        if index >= self.notes.len() {
            return Err(CoreError::ItemNotFound("note"));
        }
        Ok(self.notes.remove(index))
    }

    // birthday

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

/// Unsets every main flag, then sets the target. Performed in one pass over
/// the collection so no caller ever observes two mains.
fn set_main<T>(
    items: &mut [T],
    index: usize,
    flag: impl Fn(&mut T) -> &mut bool,
    kind: &'static str,
) -> Result<(), CoreError> {
    if index >= items.len() {
        return Err(CoreError::ItemNotFound(kind));
    }
    for (i, item) in items.iter_mut().enumerate() {
        *flag(item) = i == index;
    }
    Ok(())
}

fn clear_main<T>(items: &mut [T], flag: impl Fn(&mut T) -> &mut bool) {
    for item in items.iter_mut() {
        *flag(item) = false;
    }
}

fn describe_phone(phone: &Phone) -> String {
    if phone.is_main {
        format!("{} [main]", phone.number)
    } else {
        phone.number.clone()
    }
}

fn describe_email(email: &Email) -> String {
    if email.is_main {
        format!("{} [main]", email.address)
    } else {
        email.address.clone()
    }
}

fn describe_address(address: &Address) -> String {
    if address.is_main {
        format!("{} [main]", address)
    } else {
        address.to_string()
    }
}
