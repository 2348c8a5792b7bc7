use crate::commands::{report_messages, save_messages, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::dual::DualStore;
use crate::store::BookStore;

/// Load the default book and write it back, so both files hold only the
/// cleaned data.
///
/// Load errors are returned instead of being papered over: rewriting a store
/// that could not be read would destroy it.
pub fn run<P: BookStore, S: BookStore>(store: &DualStore<P, S>) -> Result<CmdResult> {
    let Some(loaded) = store.load()? else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No saved data found. Nothing to check."));
        return Ok(result);
    };

    let saved = store.save(&loaded.book)?;
    let mut result = CmdResult::default()
        .with_report(loaded.report)
        .with_saved(saved);

    if loaded.report.is_clean() && saved.dropped == 0 {
        result.add_message(CmdMessage::success(format!(
            "No inconsistencies found in {} senior(s).",
            saved.written
        )));
    } else {
        for message in report_messages(&loaded.report) {
            result.add_message(message);
        }
        for message in save_messages(&saved) {
            result.add_message(message);
        }
        result.add_message(CmdMessage::success(format!(
            "Rewrote both files with {} senior(s).",
            saved.written
        )));
    }

    Ok(result.with_book(loaded.book))
}
