use super::cleaning::{self, Entry, LoadReport};
use super::codec::{decode_json_entry, json_entry_label, JsonBook, JsonSenior};
use super::{ensure_parent, read_if_exists, BookStore, Format, Loaded, SaveReport};
use crate::config::DEFAULT_CAPACITY;
use crate::diagnostics::SharedSink;
use crate::error::{Result, StoreError};
use crate::model::SeniorBook;
use std::fs;
use std::path::{Path, PathBuf};

/// The Primary store: the whole book as one JSON document.
///
/// Saves never write more than `capacity` seniors; loads run the cleaning
/// pass, which skips bad and duplicate entries and stops at `capacity`.
pub struct JsonStore {
    path: PathBuf,
    capacity: usize,
    sink: SharedSink,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>, sink: SharedSink) -> Self {
        Self {
            path: path.into(),
            capacity: DEFAULT_CAPACITY,
            sink,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl BookStore for JsonStore {
    fn format(&self) -> Format {
        Format::Json
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn load_from(&self, path: &Path) -> Result<Option<Loaded>> {
        let Some(content) = read_if_exists(path)? else {
            self.sink
                .info(format!("JSON data file not found: {}", path.display()));
            return Ok(None);
        };

        if content.trim().is_empty() {
            self.sink
                .info(format!("JSON data file is empty: {}", path.display()));
            return Ok(Some(Loaded {
                book: SeniorBook::new(),
                report: LoadReport::new(Format::Json),
            }));
        }

        let raw: JsonBook<serde_json::Value> = serde_json::from_str(&content)?;
        let entries = raw.seniors.into_iter().enumerate().map(|(i, value)| {
            let label = json_entry_label(&value);
            Entry {
                number: i + 1,
                label,
                decoded: decode_json_entry(value),
            }
        });

        let (book, report) =
            cleaning::clean(Format::Json, entries, Some(self.capacity), &*self.sink);

        if report.entries > 0 && report.loaded == 0 {
            self.sink.error(format!(
                "No valid entries in {}; refusing to load an empty book",
                path.display()
            ));
            return Err(StoreError::NoValidRecords {
                path: path.to_path_buf(),
                entries: report.entries,
            });
        }

        if report.is_clean() {
            self.sink
                .info(format!("Data loaded from {}: {}", path.display(), report));
        } else {
            self.sink
                .warn(format!("Data loaded from {}: {}", path.display(), report));
        }

        Ok(Some(Loaded { book, report }))
    }

    fn save_to(&self, book: &SeniorBook, path: &Path) -> Result<SaveReport> {
        let dropped = book.len().saturating_sub(self.capacity);
        if dropped > 0 {
            self.sink.warn(format!(
                "Directory holds {} seniors, over the limit of {}; the last {} will not be saved",
                book.len(),
                self.capacity,
                dropped
            ));
        }

        let document = JsonBook {
            seniors: book
                .iter()
                .take(self.capacity)
                .map(JsonSenior::from)
                .collect::<Vec<_>>(),
        };
        let written = document.seniors.len();

        ensure_parent(path)?;
        let content = serde_json::to_string_pretty(&document)?;
        fs::write(path, content).map_err(|e| StoreError::io(path, e))?;

        if dropped > 0 {
            self.sink.info(format!(
                "Saved {} seniors to {}; {} excess entries were dropped",
                written,
                path.display(),
                dropped
            ));
        }

        Ok(SaveReport { written, dropped })
    }
}
