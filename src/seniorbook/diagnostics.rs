//! Diagnostics emitted by the stores.
//!
//! Stores never log through a process-wide logger directly. They receive a
//! [`DiagnosticSink`] at construction and report per-entry warnings and
//! per-load summaries to it. Production code uses [`TracingSink`]; tests use
//! [`MemorySink`] and assert on what was recorded.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);

    fn info(&self, message: String) {
        self.emit(Diagnostic::info(message));
    }

    fn warn(&self, message: String) {
        self.emit(Diagnostic::warning(message));
    }

    fn error(&self, message: String) {
        self.emit(Diagnostic::error(message));
    }
}

/// Shared handle to a sink. Single-threaded, so `Rc` is enough.
pub type SharedSink = Rc<dyn DiagnosticSink>;

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn shared() -> SharedSink {
        Rc::new(TracingSink)
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Info => tracing::info!(target: "seniorbook::store", "{}", diagnostic.message),
            Level::Warning => tracing::warn!(target: "seniorbook::store", "{}", diagnostic.message),
            Level::Error => tracing::error!(target: "seniorbook::store", "{}", diagnostic.message),
        }
    }
}

/// Records diagnostics in memory.
///
/// Uses `RefCell` so the sink can be shared through `Rc` and still written to
/// through `&self`.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .map(|d| d.message.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages_at(Level::Warning)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|d| d.message.contains(needle))
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}
