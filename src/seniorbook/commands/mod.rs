use crate::model::SeniorBook;
use crate::store::{LoadReport, SaveReport};
use std::path::PathBuf;

pub mod doctor;
pub mod export;
pub mod import;
pub mod open;
pub mod paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub book: Option<SeniorBook>,
    pub report: Option<LoadReport>,
    pub saved: Option<SaveReport>,
    /// Labelled paths, in display order.
    pub paths: Vec<(&'static str, PathBuf)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_book(mut self, book: SeniorBook) -> Self {
        self.book = Some(book);
        self
    }

    pub fn with_report(mut self, report: LoadReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_saved(mut self, saved: SaveReport) -> Self {
        self.saved = Some(saved);
        self
    }

    pub fn with_path(mut self, label: &'static str, path: PathBuf) -> Self {
        self.paths.push((label, path));
        self
    }

    /// Number of seniors in the resulting book, zero if there is none.
    pub fn book_len(&self) -> usize {
        self.book.as_ref().map_or(0, SeniorBook::len)
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// Turn a load report into user-facing messages. Clean loads get a single
/// success line; anything skipped is spelled out as a warning.
pub(crate) fn report_messages(report: &LoadReport) -> Vec<CmdMessage> {
    if report.is_clean() {
        return vec![CmdMessage::success(format!(
            "Loaded {} senior(s) from {}.",
            report.loaded, report.format
        ))];
    }

    let mut messages = vec![CmdMessage::warning(format!(
        "Loaded {} of {} {} entries:",
        report.loaded, report.entries, report.format
    ))];
    if report.duplicates > 0 {
        messages.push(CmdMessage::info(format!(
            "  - Skipped {} duplicate entr{}.",
            report.duplicates,
            plural_y(report.duplicates)
        )));
    }
    if report.invalid > 0 {
        messages.push(CmdMessage::info(format!(
            "  - Skipped {} invalid entr{}.",
            report.invalid,
            plural_y(report.invalid)
        )));
    }
    if report.over_limit > 0 {
        messages.push(CmdMessage::info(format!(
            "  - Left out {} entr{} over the capacity limit.",
            report.over_limit,
            plural_y(report.over_limit)
        )));
    }
    messages
}

pub(crate) fn save_messages(saved: &SaveReport) -> Vec<CmdMessage> {
    if saved.dropped == 0 {
        return Vec::new();
    }
    vec![CmdMessage::warning(format!(
        "Only the first {} senior(s) were saved; {} over the capacity limit were dropped.",
        saved.written, saved.dropped
    ))]
}

fn plural_y(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}
