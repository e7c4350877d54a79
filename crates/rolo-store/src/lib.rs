pub mod error;
pub mod paths;
mod snapshot;

use crate::error::Result;
use rolo_core::AddressBook;
use std::path::{Path, PathBuf};

/// Persistence collaborator: the full address-book object graph round-trips
/// through one flat JSON snapshot file. The format is opaque to callers.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot. A missing, corrupt or unreadable snapshot degrades
    /// to an empty book; `recovered` tells the caller a snapshot existed but
    /// could not be used.
    pub fn load(&self) -> LoadOutcome {
        snapshot::load(&self.path)
    }

    pub fn save(&self, book: &AddressBook) -> Result<()> {
        snapshot::save(&self.path, book)
    }
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub book: AddressBook,
    pub recovered: bool,
}
