use super::json::JsonStore;
use super::text::TextStore;
use super::{BookStore, Loaded, SaveReport};
use crate::config::{PrefsStore, UserPrefs};
use crate::diagnostics::{DiagnosticSink, SharedSink};
use crate::error::Result;
use crate::model::SeniorBook;
use std::path::Path;

/// Keeps the Primary and Secondary stores in step.
///
/// Loads prefer the Primary. Whichever file was read is mirrored into the
/// other so a missing or stale sibling is repaired (`present -> absent`,
/// Primary wins when both exist). Saves write both files.
pub struct DualStore<P: BookStore = JsonStore, S: BookStore = TextStore> {
    primary: P,
    secondary: S,
    prefs: PrefsStore,
    sink: SharedSink,
}

impl DualStore<JsonStore, TextStore> {
    /// Build the default stores for `data_dir` from its preferences file,
    /// falling back to default preferences when there is none.
    pub fn open(data_dir: &Path, sink: SharedSink) -> Result<Self> {
        let prefs_store = PrefsStore::in_dir(data_dir);
        let prefs = prefs_store.read()?.unwrap_or_default();
        Ok(Self::from_prefs(data_dir, &prefs, prefs_store, sink))
    }

    pub fn from_prefs(
        data_dir: &Path,
        prefs: &UserPrefs,
        prefs_store: PrefsStore,
        sink: SharedSink,
    ) -> Self {
        let primary =
            JsonStore::new(prefs.data_file_in(data_dir), sink.clone()).with_capacity(prefs.capacity);
        let secondary =
            TextStore::new(prefs.text_file_in(data_dir), sink.clone()).with_mode(prefs.text_mode);
        Self::new(primary, secondary, prefs_store, sink)
    }
}

impl<P: BookStore, S: BookStore> DualStore<P, S> {
    pub fn new(primary: P, secondary: S, prefs: PrefsStore, sink: SharedSink) -> Self {
        Self {
            primary,
            secondary,
            prefs,
            sink,
        }
    }

    /// Load the default book. `Ok(None)` when neither file exists.
    ///
    /// An error reading the Primary is returned as is; the Secondary is only
    /// consulted when the Primary file is absent.
    pub fn load(&self) -> Result<Option<Loaded>> {
        if let Some(loaded) = self.primary.load()? {
            mirror(&self.secondary, &loaded.book, &*self.sink);
            return Ok(Some(loaded));
        }

        if let Some(mut loaded) = self.secondary.load()? {
            if let Some(saved) = mirror(&self.primary, &loaded.book, &*self.sink) {
                if saved.dropped > 0 {
                    loaded.book = loaded.book.truncated(saved.written);
                }
            }
            return Ok(Some(loaded));
        }

        self.sink.info(format!(
            "No data found at {} or {}",
            self.primary.path().display(),
            self.secondary.path().display()
        ));
        Ok(None)
    }

    /// Write both files. Either failure is returned.
    pub fn save(&self, book: &SeniorBook) -> Result<SaveReport> {
        let saved = self.primary.save(book)?;
        self.secondary.save(book)?;
        self.sink.info(format!(
            "Data saved to both {} and {} formats",
            self.primary.format(),
            self.secondary.format()
        ));
        Ok(saved)
    }

    /// Load a Primary-format file from an explicit path. The Secondary is not
    /// involved.
    pub fn load_from(&self, path: &Path) -> Result<Option<Loaded>> {
        self.primary.load_from(path)
    }

    /// Save in the Primary format to an explicit path, then refresh the
    /// default Secondary file.
    pub fn save_to(&self, book: &SeniorBook, path: &Path) -> Result<SaveReport> {
        let saved = self.primary.save_to(book, path)?;
        self.secondary.save(book)?;
        Ok(saved)
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    pub fn primary_path(&self) -> &Path {
        self.primary.path()
    }

    pub fn secondary_path(&self) -> &Path {
        self.secondary.path()
    }

    pub fn prefs_path(&self) -> &Path {
        self.prefs.path()
    }

    pub fn read_prefs(&self) -> Result<Option<UserPrefs>> {
        self.prefs.read()
    }

    pub fn save_prefs(&self, prefs: &UserPrefs) -> Result<()> {
        self.prefs.save(prefs)
    }
}

/// Best-effort write of `book` into `target`. Failures are reported and
/// swallowed.
fn mirror<T: BookStore>(
    target: &T,
    book: &SeniorBook,
    sink: &dyn DiagnosticSink,
) -> Option<SaveReport> {
    match target.save(book) {
        Ok(saved) => Some(saved),
        Err(e) => {
            sink.warn(format!(
                "Failed to synchronize data to {} format: {}",
                target.format(),
                e
            ));
            None
        }
    }
}
