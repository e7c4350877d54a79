use crate::domain::{occurrence_in_year, Contact};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Monday-Sunday window containing `today`.
pub fn week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// This year's month/day occurrence, rolled to next year when it already
/// passed. A birthday falling exactly on `today` counts as this year's.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Contacts whose upcoming birthday occurrence falls within the Monday-Sunday
/// week containing `today`, mapped name -> occurrence date.
pub fn birthdays_this_week(contacts: &[Contact], today: NaiveDate) -> BTreeMap<String, NaiveDate> {
    let (monday, sunday) = week_window(today);
    contacts
        .iter()
        .filter_map(|contact| {
            let birthday = contact.birthday.as_ref()?;
            let occurrence = next_occurrence(birthday.date, today);
            (occurrence >= monday && occurrence <= sunday)
                .then(|| (contact.name.as_str().to_string(), occurrence))
        })
        .collect()
}

/// Contacts whose birthday month/day equals today's (birth year ignored),
/// mapped name -> today.
pub fn birthdays_this_day(contacts: &[Contact], today: NaiveDate) -> BTreeMap<String, NaiveDate> {
    contacts
        .iter()
        .filter_map(|contact| {
            let birthday = contact.birthday.as_ref()?;
            (occurrence_in_year(birthday.date, today.year()) == today)
                .then(|| (contact.name.as_str().to_string(), today))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{birthdays_this_day, birthdays_this_week, next_occurrence, week_window};
    use crate::domain::{AddressBook, Birthday};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn book_with_birthday(name: &str, birthday: &str, today: NaiveDate) -> AddressBook {
        let mut book = AddressBook::new();
        book.add_contact(name).unwrap();
        book.find_contact_mut(name)
            .unwrap()
            .set_birthday(Birthday::new(birthday, today).unwrap());
        book
    }

    #[test]
    fn week_window_is_monday_to_sunday() {
        // 2024-03-13 is a Wednesday.
        let (monday, sunday) = week_window(date(2024, 3, 13));
        assert_eq!(monday, date(2024, 3, 11));
        assert_eq!(sunday, date(2024, 3, 17));

        let (monday, sunday) = week_window(date(2024, 3, 11));
        assert_eq!(monday, date(2024, 3, 11));
        assert_eq!(sunday, date(2024, 3, 17));
    }

    #[test]
    fn occurrence_rolls_forward_after_passing() {
        let birthday = date(1990, 3, 15);
        assert_eq!(next_occurrence(birthday, date(2024, 3, 13)), date(2024, 3, 15));
        assert_eq!(next_occurrence(birthday, date(2024, 3, 15)), date(2024, 3, 15));
        assert_eq!(next_occurrence(birthday, date(2024, 3, 16)), date(2025, 3, 15));
    }

    #[test]
    fn birthday_in_current_week_is_reported() {
        let today = date(2024, 3, 13);
        let book = book_with_birthday("Ada", "15.03.1990", today);
        let result = birthdays_this_week(&book.contacts, today);
        assert_eq!(result.get("Ada"), Some(&date(2024, 3, 15)));
    }

    #[test]
    fn birthday_outside_current_week_is_skipped() {
        let today = date(2024, 3, 13);
        let book = book_with_birthday("Ada", "18.03.1990", today);
        assert!(birthdays_this_week(&book.contacts, today).is_empty());

        // Monday of next week never counts, even though it is close.
        let book = book_with_birthday("Bob", "10.03.1990", today);
        assert!(birthdays_this_week(&book.contacts, today).is_empty());
    }

    #[test]
    fn contacts_without_birthday_are_ignored() {
        let mut book = AddressBook::new();
        book.add_contact("Nobody").unwrap();
        let today = date(2024, 3, 13);
        assert!(birthdays_this_week(&book.contacts, today).is_empty());
        assert!(birthdays_this_day(&book.contacts, today).is_empty());
    }

    #[test]
    fn this_day_matches_month_and_day_ignoring_year() {
        let today = date(2024, 3, 15);
        let book = book_with_birthday("Ada", "15.03.1990", today);
        let result = birthdays_this_day(&book.contacts, today);
        assert_eq!(result.get("Ada"), Some(&today));

        let book = book_with_birthday("Ada", "16.03.1990", today);
        assert!(birthdays_this_day(&book.contacts, today).is_empty());
    }
}
