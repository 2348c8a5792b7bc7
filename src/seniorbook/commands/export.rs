use crate::commands::{report_messages, save_messages, CmdMessage, CmdResult};
use crate::error::{Result, StoreError};
use crate::model::SeniorBook;
use crate::store::dual::DualStore;
use crate::store::BookStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the default book to `path` in the Primary format.
///
/// Load errors are returned: exporting refreshes the default text file too,
/// and an unreadable store must not overwrite it with an empty book.
pub fn run<P: BookStore, S: BookStore>(store: &DualStore<P, S>, path: &Path) -> Result<CmdResult> {
    if resolve(path) == resolve(store.primary_path()) {
        return Err(StoreError::Api(format!(
            "Refusing to export onto the data file itself: {}",
            path.display()
        )));
    }

    let mut result = CmdResult::default();
    let book = match store.load()? {
        Some(loaded) => {
            for message in report_messages(&loaded.report) {
                result.add_message(message);
            }
            result = result.with_report(loaded.report);
            loaded.book
        }
        None => {
            result.add_message(CmdMessage::info(
                "No saved data found. Exporting an empty directory.",
            ));
            SeniorBook::new()
        }
    };

    let saved = store.save_to(&book, path)?;
    for message in save_messages(&saved) {
        result.add_message(message);
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} senior(s) to {}.",
        saved.written,
        path.display()
    )));
    Ok(result
        .with_saved(saved)
        .with_path("export", path.to_path_buf())
        .with_book(book))
}

/// Canonical form of `path`. A file that does not exist yet is resolved
/// through its parent directory.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
