use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSummaryDto {
    pub id: ContactId,
    pub name: String,
    pub main_phone: Option<String>,
    pub main_email: Option<String>,
    pub birthday: Option<String>,
    pub note_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayDto {
    pub value: String,
    pub age: i32,
    pub has_had_birthday_this_year: bool,
}
