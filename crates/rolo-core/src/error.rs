use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("phone number cannot be empty")]
    EmptyPhone,
    #[error("phone number contains letters: '{0}'")]
    PhoneContainsLetters(String),
    #[error("phone number contains invalid symbols: '{0}' (only digits and a leading '+' are allowed)")]
    PhoneInvalidSymbols(String),
    #[error("phone number cannot start with zero after '+': '{0}'")]
    PhoneLeadingZero(String),
    #[error("phone number must have 8-15 digits after '+', got {0}")]
    PhoneWrongLength(usize),
    #[error("email address cannot be empty")]
    EmptyEmail,
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),
    #[error("address {0} cannot be empty")]
    EmptyAddressField(&'static str),
    #[error("invalid zip code: '{0}' (expected 2-20 letters, digits, dashes or spaces)")]
    InvalidZipCode(String),
    #[error("invalid birthday: '{0}' (expected DD.MM.YYYY)")]
    InvalidBirthdayFormat(String),
    #[error("birthday cannot be in the future: '{0}'")]
    BirthdayInFuture(String),
    #[error("note content cannot be empty")]
    EmptyNoteContent,
    #[error("contact '{0}' already exists")]
    DuplicateName(String),
    #[error("contact not found: '{0}'")]
    ContactNotFound(String),
    #[error("no matching {0} found")]
    ItemNotFound(&'static str),
    #[error("no active contact selected")]
    NoActiveContact,
}
