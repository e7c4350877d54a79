use crate::error::Result;
use crate::LoadOutcome;
use rolo_core::AddressBook;
use std::fs;
use std::path::Path;

pub(crate) fn load(path: &Path) -> LoadOutcome {
    if !path.exists() {
        return LoadOutcome {
            book: AddressBook::new(),
            recovered: false,
        };
    }

    let parsed = fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str::<AddressBook>(&contents).ok());

    match parsed {
        Some(book) => LoadOutcome {
            book,
            recovered: false,
        },
        None => LoadOutcome {
            book: AddressBook::new(),
            recovered: true,
        },
    }
}

/// Writes the snapshot to a temp file in the target directory, then renames
/// it over the destination so a crash never leaves a torn snapshot behind.
pub(crate) fn save(path: &Path, book: &AddressBook) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(book)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
