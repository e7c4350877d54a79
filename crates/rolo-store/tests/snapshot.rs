use chrono::NaiveDate;
use rolo_core::{Address, AddressBook, Birthday, Email, Note, Phone};
use rolo_store::{paths, Store};
use std::fs;
use tempfile::TempDir;

fn populated_book() -> AddressBook {
    let mut book = AddressBook::new();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    for (name, number, email) in [
        ("Ada Lovelace", "+4412345678", "ada@example.com"),
        ("Grace Hopper", "+1234567890", "grace@example.com"),
    ] {
        book.add_contact(name).unwrap();
        let contact = book.find_contact_mut(name).unwrap();
        contact.add_phone(Phone::new(number, true).unwrap());
        contact.add_phone(Phone::new("+380674300702", false).unwrap());
        contact.add_email(Email::new(email, true).unwrap());
        contact.add_address(Address::new("GB", "London", "Baker Street 1", "NW1 6XE", true).unwrap());
        contact.add_note(Note::new("likes tea", Some("Prefs"), Some("food, tea"), 1_700_000_000).unwrap());
        contact.set_birthday(Birthday::new("15.03.1990", today).unwrap());
    }
    book
}

#[test]
fn snapshot_round_trips_the_full_graph() {
    let temp = TempDir::new().expect("temp dir");
    let store = Store::open(&paths::snapshot_path_in(temp.path()));

    let mut book = populated_book();
    let active = book.contacts[0].id;
    book.set_active(active).expect("set active");

    store.save(&book).expect("save snapshot");
    let outcome = store.load();

    assert!(!outcome.recovered);
    // Field-by-field equality of the contact graph; the active reference is
    // transient and must not survive the round trip.
    assert_eq!(outcome.book.contacts, book.contacts);
    assert_eq!(outcome.book.active_id(), None);
}

#[test]
fn missing_snapshot_loads_as_empty_book() {
    let temp = TempDir::new().expect("temp dir");
    let store = Store::open(&paths::snapshot_path_in(temp.path()));
    let outcome = store.load();
    assert!(outcome.book.contacts.is_empty());
    assert!(!outcome.recovered);
}

#[test]
fn corrupt_snapshot_degrades_to_empty_book() {
    let temp = TempDir::new().expect("temp dir");
    let path = paths::snapshot_path_in(temp.path());
    fs::write(&path, "{ not json").expect("write corrupt file");

    let store = Store::open(&path);
    let outcome = store.load();
    assert!(outcome.book.contacts.is_empty());
    assert!(outcome.recovered);
}

#[test]
fn save_replaces_previous_snapshot_atomically() {
    let temp = TempDir::new().expect("temp dir");
    let path = paths::snapshot_path_in(temp.path());
    let store = Store::open(&path);

    store.save(&populated_book()).expect("first save");
    let mut book = store.load().book;
    book.add_contact("Katherine Johnson").expect("add contact");
    store.save(&book).expect("second save");

    let reloaded = store.load().book;
    assert_eq!(reloaded.contacts.len(), 3);
    assert!(reloaded.find_contact("katherine johnson").is_some());
    // no stray temp file left behind
    assert!(!path.with_extension("json.tmp").exists());
}
