use crate::error::CoreError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{7,14}$").expect("valid phone pattern"));

const SEPARATORS: [char; 5] = ['-', '(', ')', '.', '/'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    pub is_main: bool,
}

impl Phone {
    pub fn new(raw: &str, is_main: bool) -> Result<Self, CoreError> {
        let number = normalize_phone(raw)?;
        validate_phone(&number)?;
        Ok(Self { number, is_main })
    }

    /// All-or-nothing: the old number stays in place when the new one fails
    /// validation.
    pub fn update(&mut self, raw: &str) -> Result<(), CoreError> {
        let number = normalize_phone(raw)?;
        validate_phone(&number)?;
        self.number = number;
        Ok(())
    }
}

/// Strips separator characters and guarantees a single leading `+`. Letters
/// and other symbols are kept so validation can name them in its error.
pub fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyPhone);
    }

    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push('+');
    for (idx, ch) in trimmed.chars().enumerate() {
        if ch == '+' && idx == 0 {
            continue;
        }
        if ch.is_whitespace() || SEPARATORS.contains(&ch) {
            continue;
        }
        out.push(ch);
    }

    if out.len() == 1 {
        return Err(CoreError::EmptyPhone);
    }
    Ok(out)
}

fn validate_phone(number: &str) -> Result<(), CoreError> {
    if PHONE_PATTERN.is_match(number) {
        return Ok(());
    }

    let rest = &number[1..];
    if rest.chars().any(char::is_alphabetic) {
        return Err(CoreError::PhoneContainsLetters(number.to_string()));
    }
    if rest.chars().any(|ch| !ch.is_ascii_digit()) {
        return Err(CoreError::PhoneInvalidSymbols(number.to_string()));
    }
    if rest.starts_with('0') {
        return Err(CoreError::PhoneLeadingZero(number.to_string()));
    }
    Err(CoreError::PhoneWrongLength(rest.chars().count()))
}
