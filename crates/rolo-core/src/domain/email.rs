use crate::error::CoreError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub address: String,
    pub is_main: bool,
}

impl Email {
    pub fn new(raw: &str, is_main: bool) -> Result<Self, CoreError> {
        let address = normalize_email(raw)?;
        validate_email(&address)?;
        Ok(Self { address, is_main })
    }

    pub fn update(&mut self, raw: &str) -> Result<(), CoreError> {
        let address = normalize_email(raw)?;
        validate_email(&address)?;
        self.address = address;
        Ok(())
    }
}

pub fn normalize_email(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyEmail);
    }
    Ok(trimmed.to_ascii_lowercase())
}

fn validate_email(address: &str) -> Result<(), CoreError> {
    if EMAIL_PATTERN.is_match(address) {
        Ok(())
    } else {
        Err(CoreError::InvalidEmail(address.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Email;
    use crate::error::CoreError;

    #[test]
    fn email_trims_and_lowercases() {
        let email = Email::new("  Ada@Example.COM ", false).unwrap();
        assert_eq!(email.address, "ada@example.com");
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(Email::new("no-at-sign.example.com", false).is_err());
        assert!(Email::new("ada@example", false).is_err());
        assert!(Email::new("ada@example.c", false).is_err());
        assert_eq!(Email::new("  ", false), Err(CoreError::EmptyEmail));
    }

    #[test]
    fn update_keeps_old_address_on_failure() {
        let mut email = Email::new("ada@example.com", true).unwrap();
        assert!(email.update("broken").is_err());
        assert_eq!(email.address, "ada@example.com");
        assert!(email.is_main);
    }
}
