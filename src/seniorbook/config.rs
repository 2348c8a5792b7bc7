use crate::error::{Result, StoreError};
use crate::store::{ensure_parent, read_if_exists};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const PREFS_FILENAME: &str = "preferences.json";
pub const DEFAULT_DATA_FILE: &str = "seniors.json";
pub const DEFAULT_TEXT_FILE: &str = "seniors.txt";
/// Maximum number of seniors kept in the JSON store.
pub const DEFAULT_CAPACITY: usize = 250;

/// How the text store treats bad lines and duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    /// Any bad line or duplicate rejects the whole file.
    #[default]
    Strict,
    /// Bad lines and duplicates are skipped, like the JSON store does.
    Lenient,
}

/// User preferences, stored in `<data dir>/preferences.json`.
///
/// Relative file paths are resolved against the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPrefs {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_text_file")]
    pub text_file: PathBuf,

    #[serde(default = "default_capacity")]
    pub capacity: usize,

    #[serde(default)]
    pub text_mode: TextMode,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_text_file() -> PathBuf {
    PathBuf::from(DEFAULT_TEXT_FILE)
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            text_file: default_text_file(),
            capacity: DEFAULT_CAPACITY,
            text_mode: TextMode::default(),
        }
    }
}

impl UserPrefs {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(StoreError::Config(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.data_file == self.text_file {
            return Err(StoreError::Config(format!(
                "data_file and text_file must differ (both are {})",
                self.data_file.display()
            )));
        }
        Ok(())
    }

    pub fn data_file_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn text_file_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.text_file)
    }
}

/// Reads and writes [`UserPrefs`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PREFS_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` if there is no preferences file yet.
    pub fn read(&self) -> Result<Option<UserPrefs>> {
        let Some(content) = read_if_exists(&self.path)? else {
            return Ok(None);
        };
        let prefs: UserPrefs = serde_json::from_str(&content)?;
        prefs.validate()?;
        Ok(Some(prefs))
    }

    pub fn save(&self, prefs: &UserPrefs) -> Result<()> {
        prefs.validate()?;
        ensure_parent(&self.path)?;
        let content = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, content).map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }
}
