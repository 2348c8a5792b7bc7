use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::dual::DualStore;
use crate::store::BookStore;

pub fn run<P: BookStore, S: BookStore>(store: &DualStore<P, S>) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_path("data", store.primary_path().to_path_buf())
        .with_path("text", store.secondary_path().to_path_buf())
        .with_path("preferences", store.prefs_path().to_path_buf()))
}
