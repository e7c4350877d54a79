use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Name;

    #[test]
    fn name_trims_input() {
        let name = Name::new("  Ada Lovelace  ").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn name_rejects_blank() {
        assert!(Name::new("   ").is_err());
        assert!(Name::new("").is_err());
    }

    #[test]
    fn name_compares_case_insensitively() {
        let name = Name::new("Ada").unwrap();
        assert!(name.eq_ignore_case("ada"));
        assert!(name.eq_ignore_case(" ADA "));
        assert!(!name.eq_ignore_case("Grace"));
    }
}
