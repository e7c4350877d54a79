use crate::error::CoreError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\- ]{2,20}$").expect("valid zip pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub street_address: String,
    pub zip_code: String,
    pub is_main: bool,
}

impl Address {
    pub fn new(
        country: &str,
        city: &str,
        street_address: &str,
        zip_code: &str,
        is_main: bool,
    ) -> Result<Self, CoreError> {
        let country = require_field("country", country)?.to_uppercase();
        let city = title_case(&require_field("city", city)?);
        let street_address = title_case(&require_field("street address", street_address)?);
        let zip_code = require_field("zip code", zip_code)?.to_uppercase();
        if !ZIP_PATTERN.is_match(&zip_code) {
            return Err(CoreError::InvalidZipCode(zip_code));
        }
        Ok(Self {
            country,
            city,
            street_address,
            zip_code,
            is_main,
        })
    }

    /// Applies the given replacements all-or-nothing: the address is left
    /// untouched when any replacement fails validation.
    pub fn update(
        &mut self,
        country: Option<&str>,
        city: Option<&str>,
        street_address: Option<&str>,
        zip_code: Option<&str>,
    ) -> Result<(), CoreError> {
        let candidate = Self::new(
            country.unwrap_or(&self.country),
            city.unwrap_or(&self.city),
            street_address.unwrap_or(&self.street_address),
            zip_code.unwrap_or(&self.zip_code),
            self.is_main,
        )?;
        *self = candidate;
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.street_address, self.city, self.zip_code, self.country
        )
    }
}

fn require_field(name: &'static str, raw: &str) -> Result<String, CoreError> {
    let collapsed = collapse_whitespace(raw);
    if collapsed.is_empty() {
        return Err(CoreError::EmptyAddressField(name));
    }
    Ok(collapsed)
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn title_case(raw: &str) -> String {
    raw.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
