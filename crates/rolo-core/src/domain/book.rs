use crate::domain::{Contact, ContactId, Name};
use crate::error::CoreError;
use crate::select::{select_index, Chooser, Selection};
use serde::{Deserialize, Serialize};

/// The whole address book. The active-contact reference is an identifier
/// resolved on each access, never a raw pointer into `contacts`, and it is
/// transient: snapshots do not carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(skip)]
    active: Option<ContactId>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contact(&mut self, name: &str) -> Result<&Contact, CoreError> {
        let name = Name::new(name)?;
        if self
            .contacts
            .iter()
            .any(|contact| contact.name.eq_ignore_case(name.as_str()))
        {
            return Err(CoreError::DuplicateName(name.as_str().to_string()));
        }
        self.contacts.push(Contact::new(name));
        Ok(self.contacts.last().expect("contact just appended"))
    }

    /// Programmatic lookup: case-insensitive exact name match.
    pub fn find_contact(&self, name: &str) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.name.eq_ignore_case(name))
    }

    pub fn find_contact_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|contact| contact.name.eq_ignore_case(name))
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn get_mut(&mut self, id: ContactId) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|contact| contact.id == id)
    }

    /// Interactive lookup among case-insensitive substring candidates.
    pub fn select_contact(&self, query: &str, chooser: &mut dyn Chooser) -> Selection<ContactId> {
        let query = query.trim().to_lowercase();
        let matches: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|contact| contact.name.as_str().to_lowercase().contains(&query))
            .collect();
        let options: Vec<String> = matches
            .iter()
            .map(|contact| contact.name.to_string())
            .collect();
        select_index("Select contact", &options, chooser).map(|index| matches[index].id)
    }

    pub fn select_active_contact(
        &mut self,
        query: &str,
        chooser: &mut dyn Chooser,
    ) -> Selection<ContactId> {
        let selection = self.select_contact(query, chooser);
        if let Selection::Picked(id) = selection {
            self.active = Some(id);
        }
        selection
    }

    pub fn set_active(&mut self, id: ContactId) -> Result<(), CoreError> {
        if self.get(id).is_none() {
            return Err(CoreError::ContactNotFound(id.to_string()));
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn back_to_book(&mut self) {
        self.active = None;
    }

    pub fn active_id(&self) -> Option<ContactId> {
        self.active
    }

    pub fn active(&self) -> Result<&Contact, CoreError> {
        self.active
            .and_then(|id| self.get(id))
            .ok_or(CoreError::NoActiveContact)
    }

    pub fn active_mut(&mut self) -> Result<&mut Contact, CoreError> {
        let id = self.active.ok_or(CoreError::NoActiveContact)?;
        self.get_mut(id).ok_or(CoreError::NoActiveContact)
    }

    pub fn delete_contact(&mut self, id: ContactId) -> Result<Contact, CoreError> {
        let position = self
            .contacts
            .iter()
            .position(|contact| contact.id == id)
            .ok_or_else(|| CoreError::ContactNotFound(id.to_string()))?;
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(self.contacts.remove(position))
    }

    pub fn rename_contact(&mut self, id: ContactId, new_name: &str) -> Result<(), CoreError> {
        let name = Name::new(new_name)?;
        if self
            .contacts
            .iter()
            .any(|contact| contact.id != id && contact.name.eq_ignore_case(name.as_str()))
        {
            return Err(CoreError::DuplicateName(name.as_str().to_string()));
        }
        let contact = self
            .get_mut(id)
            .ok_or_else(|| CoreError::ContactNotFound(id.to_string()))?;
        contact.name = name;
        Ok(())
    }
}
