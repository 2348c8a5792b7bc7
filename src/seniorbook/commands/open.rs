use crate::commands::{report_messages, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SeniorBook;
use crate::store::dual::DualStore;
use crate::store::BookStore;

/// Open the default book the way the application does at startup.
///
/// A first run (no files yet) and an unreadable store both start from an
/// empty book; the latter is flagged with a warning.
pub fn run<P: BookStore, S: BookStore>(store: &DualStore<P, S>) -> Result<CmdResult> {
    match store.load() {
        Ok(Some(loaded)) => {
            let mut result = CmdResult::default()
                .with_report(loaded.report)
                .with_book(loaded.book);
            for message in report_messages(&loaded.report) {
                result.add_message(message);
            }
            Ok(result)
        }
        Ok(None) => {
            let mut result = CmdResult::default().with_book(SeniorBook::new());
            result.add_message(CmdMessage::info(
                "No saved data found. Starting with an empty directory.",
            ));
            Ok(result)
        }
        Err(e) => {
            let mut result = CmdResult::default().with_book(SeniorBook::new());
            result.add_message(CmdMessage::warning(format!(
                "Could not load saved data ({}). Starting with an empty directory.",
                e
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::{PrefsStore, UserPrefs};
    use crate::diagnostics::MemorySink;
    use crate::model::{Address, Name, Phone, Senior};
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn setup() -> (TempDir, DualStore) {
        let dir = TempDir::new().unwrap();
        let store = DualStore::from_prefs(
            dir.path(),
            &UserPrefs::default(),
            PrefsStore::in_dir(dir.path()),
            Rc::new(MemorySink::new()),
        );
        (dir, store)
    }

    #[test]
    fn first_run_is_empty_book() {
        let (_dir, store) = setup();
        let res = run(&store).unwrap();
        assert_eq!(res.book_len(), 0);
        assert!(res.report.is_none());
        assert!(res.messages[0].content.contains("No saved data"));
    }

    #[test]
    fn loads_saved_book() {
        let (_dir, store) = setup();
        let mut book = SeniorBook::new();
        book.add(Senior::new(
            Name::parse("Alice").unwrap(),
            Phone::parse("91234567").unwrap(),
            Address::parse("Blk 1").unwrap(),
        ))
        .unwrap();
        store.save(&book).unwrap();

        let res = run(&store).unwrap();
        assert_eq!(res.book, Some(book));
        assert!(res.has_level(MessageLevel::Success));
    }

    #[test]
    fn unreadable_store_falls_back_to_empty_book() {
        let (_dir, store) = setup();
        fs::write(store.primary_path(), "[ not json").unwrap();

        let res = run(&store).unwrap();
        assert_eq!(res.book_len(), 0);
        assert!(res.has_level(MessageLevel::Warning));
    }
}
