//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs` and returns `Result<CmdResult>`;
//! it never prints and holds no business logic.
//!
//! `SeniorApi<P, S>` is generic over the two stores wrapped by its
//! [`DualStore`], so tests can run it against any [`BookStore`] pair.

use crate::commands::{self, CmdResult};
use crate::config::UserPrefs;
use crate::diagnostics::SharedSink;
use crate::error::Result;
use crate::store::dual::DualStore;
use crate::store::json::JsonStore;
use crate::store::text::TextStore;
use crate::store::BookStore;
use std::path::Path;

pub struct SeniorApi<P: BookStore = JsonStore, S: BookStore = TextStore> {
    store: DualStore<P, S>,
}

impl SeniorApi<JsonStore, TextStore> {
    /// Open the API over the default stores in `data_dir`.
    pub fn open(data_dir: &Path, sink: SharedSink) -> Result<Self> {
        Ok(Self::new(DualStore::open(data_dir, sink)?))
    }
}

impl<P: BookStore, S: BookStore> SeniorApi<P, S> {
    pub fn new(store: DualStore<P, S>) -> Self {
        Self { store }
    }

    pub fn open_book(&self) -> Result<CmdResult> {
        commands::open::run(&self.store)
    }

    pub fn import_book(&self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&self.store, path)
    }

    pub fn export_book(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        commands::doctor::run(&self.store)
    }

    pub fn paths(&self) -> Result<CmdResult> {
        commands::paths::run(&self.store)
    }

    pub fn preferences(&self) -> Result<UserPrefs> {
        Ok(self.store.read_prefs()?.unwrap_or_default())
    }

    pub fn store(&self) -> &DualStore<P, S> {
        &self.store
    }
}
