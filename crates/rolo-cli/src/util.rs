use crate::error::not_found;
use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use rolo_core::{select_index, Chooser, Contact, Selection};

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolves the outcome of the selection protocol for CLI callers: a
/// cancelled selection is not an error, merely "no selection".
pub fn resolve_selection(selection: Selection<usize>, kind: &'static str) -> Result<Option<usize>> {
    match selection {
        Selection::Picked(index) => Ok(Some(index)),
        Selection::Cancelled => Ok(None),
        Selection::NotFound => Err(not_found(format!("no matching {} found", kind))),
    }
}

/// Runs the selection protocol over the subset of `descriptions` whose entry
/// passes `keep`, returning the index into the original collection.
pub fn select_among(
    prompt: &str,
    descriptions: Vec<String>,
    keep: impl Fn(usize) -> bool,
    chooser: &mut dyn Chooser,
) -> Selection<usize> {
    let candidates: Vec<usize> = (0..descriptions.len()).filter(|&i| keep(i)).collect();
    let options: Vec<String> = candidates
        .iter()
        .map(|&i| descriptions[i].clone())
        .collect();
    select_index(prompt, &options, chooser).map(|picked| candidates[picked])
}

pub fn describe_phones(contact: &Contact) -> Vec<String> {
    contact
        .phones
        .iter()
        .map(|p| {
            if p.is_main {
                format!("{} [main]", p.number)
            } else {
                p.number.clone()
            }
        })
        .collect()
}

pub fn describe_emails(contact: &Contact) -> Vec<String> {
    contact
        .emails
        .iter()
        .map(|e| {
            if e.is_main {
                format!("{} [main]", e.address)
            } else {
                e.address.clone()
            }
        })
        .collect()
}

pub fn describe_addresses(contact: &Contact) -> Vec<String> {
    contact
        .addresses
        .iter()
        .map(|a| {
            if a.is_main {
                format!("{} [main]", a)
            } else {
                a.to_string()
            }
        })
        .collect()
}
