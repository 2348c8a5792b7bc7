//! # Storage Layer
//!
//! The directory is persisted twice, in two formats that are kept in step:
//!
//! 1. **Primary**: a JSON file ([`json::JsonStore`]). Holds every field,
//!    enforces the capacity bound, and recovers from bad entries.
//! 2. **Secondary**: a pipe-delimited text file ([`text::TextStore`]). Easy to
//!    read and diff by hand; strict by default, so one bad line rejects the
//!    file.
//!
//! [`dual::DualStore`] ties them together. The Primary wins when both exist;
//! a missing file is rebuilt from whichever sibling is present. The rebuild is
//! best effort: a failed mirror write is reported to the diagnostics sink and
//! never fails the load that triggered it.
//!
//! ## Load Results
//!
//! A load returns `Ok(None)` when the file does not exist, which is distinct
//! from a file that exists and holds no seniors. Successful loads come back as
//! [`Loaded`]: the cleaned book plus a [`LoadReport`] with what was skipped and
//! why. The same counts go to the sink.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── seniors.json        # Primary
//! ├── seniors.txt         # Secondary
//! └── preferences.json    # UserPrefs
//! ```
//!
//! Writes are plain overwrites. A crash mid-save can leave a partial file.

use crate::error::{Result, StoreError};
use crate::model::SeniorBook;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub mod cleaning;
pub mod codec;
pub mod dual;
pub mod json;
pub mod text;

pub use cleaning::LoadReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Text,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("JSON"),
            Format::Text => f.write_str("text"),
        }
    }
}

/// A successfully loaded book and the report describing the load.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub book: SeniorBook,
    pub report: LoadReport,
}

/// What a save actually wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaveReport {
    pub written: usize,
    /// Trailing seniors left out because of the capacity bound.
    pub dropped: usize,
}

/// A whole-book codec bound to a default file.
pub trait BookStore {
    fn format(&self) -> Format;

    /// The file this store reads and writes by default.
    fn path(&self) -> &Path;

    /// Load a book from `path`. `Ok(None)` if the file does not exist.
    fn load_from(&self, path: &Path) -> Result<Option<Loaded>>;

    /// Write `book` to `path`, creating parent directories as needed.
    fn save_to(&self, book: &SeniorBook, path: &Path) -> Result<SaveReport>;

    fn load(&self) -> Result<Option<Loaded>> {
        self.load_from(self.path())
    }

    fn save(&self, book: &SeniorBook) -> Result<SaveReport> {
        self.save_to(book, self.path())
    }
}

/// Read a whole file, or `None` if it does not exist.
pub(crate) fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
    }
    Ok(())
}
