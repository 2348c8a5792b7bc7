use crate::commands::{report_messages, save_messages, CmdMessage, CmdResult};
use crate::error::{Result, StoreError};
use crate::store::dual::DualStore;
use crate::store::BookStore;
use std::path::Path;

/// Replace the default book with the one in `path` (Primary format).
///
/// Unlike `open`, a missing or unreadable file is an error: the user named it.
pub fn run<P: BookStore, S: BookStore>(store: &DualStore<P, S>, path: &Path) -> Result<CmdResult> {
    let loaded = store
        .load_from(path)?
        .ok_or_else(|| StoreError::Api(format!("File not found: {}", path.display())))?;

    let saved = store.save(&loaded.book)?;

    let mut result = CmdResult::default()
        .with_report(loaded.report)
        .with_saved(saved);
    for message in report_messages(&loaded.report) {
        result.add_message(message);
    }
    for message in save_messages(&saved) {
        result.add_message(message);
    }
    result.add_message(CmdMessage::success(format!(
        "Imported {} senior(s) from {}.",
        saved.written,
        path.display()
    )));
    Ok(result.with_book(loaded.book))
}
