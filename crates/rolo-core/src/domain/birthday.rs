use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    pub value: String,
    pub date: NaiveDate,
}

impl Birthday {
    /// `today` is injected so callers (and tests) control the clock.
    pub fn new(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let date = NaiveDate::parse_from_str(trimmed, BIRTHDAY_FORMAT)
            .map_err(|_| CoreError::InvalidBirthdayFormat(trimmed.to_string()))?;
        if date > today {
            return Err(CoreError::BirthdayInFuture(trimmed.to_string()));
        }
        Ok(Self {
            value: date.format(BIRTHDAY_FORMAT).to_string(),
            date,
        })
    }

    pub fn age(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.date.year();
        if !self.has_had_birthday_this_year(today) {
            age -= 1;
        }
        age
    }

    pub fn has_had_birthday_this_year(&self, today: NaiveDate) -> bool {
        occurrence_in_year(self.date, today.year()) <= today
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The month/day occurrence of `birthday` in `year`. Feb 29 birthdays fall
/// back to Feb 28 in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists"))
}

#[cfg(test)]
mod tests {
    use super::{occurrence_in_year, Birthday};
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn birthday_parses_and_keeps_canonical_value() {
        let birthday = Birthday::new(" 15.03.1990 ", date(2024, 1, 1)).unwrap();
        assert_eq!(birthday.value, "15.03.1990");
        assert_eq!(birthday.date, date(1990, 3, 15));
    }

    #[test]
    fn birthday_rejects_bad_format_and_impossible_dates() {
        let today = date(2024, 1, 1);
        assert_eq!(
            Birthday::new("1990-03-15", today),
            Err(CoreError::InvalidBirthdayFormat("1990-03-15".to_string()))
        );
        assert!(Birthday::new("32.01.1990", today).is_err());
        assert!(Birthday::new("29.02.2023", today).is_err());
    }

    #[test]
    fn birthday_rejects_future_dates() {
        assert_eq!(
            Birthday::new("02.01.2024", date(2024, 1, 1)),
            Err(CoreError::BirthdayInFuture("02.01.2024".to_string()))
        );
    }

    #[test]
    fn age_accounts_for_whether_birthday_passed() {
        let birthday = Birthday::new("15.03.1990", date(2024, 1, 1)).unwrap();
        assert_eq!(birthday.age(date(2024, 3, 14)), 33);
        assert_eq!(birthday.age(date(2024, 3, 15)), 34);
        assert_eq!(birthday.age(date(2024, 12, 31)), 34);
    }

    #[test]
    fn has_had_birthday_this_year_boundaries() {
        let birthday = Birthday::new("15.03.1990", date(2024, 1, 1)).unwrap();
        assert!(!birthday.has_had_birthday_this_year(date(2024, 3, 14)));
        assert!(birthday.has_had_birthday_this_year(date(2024, 3, 15)));
    }

    #[test]
    fn leap_day_occurrence_falls_back_to_feb_28() {
        let leap = date(2000, 2, 29);
        assert_eq!(occurrence_in_year(leap, 2024), date(2024, 2, 29));
        assert_eq!(occurrence_in_year(leap, 2023), date(2023, 2, 28));
    }
}
