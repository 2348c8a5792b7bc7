//! The cleaning pass run over decoded entries during a load.
//!
//! Entries are taken in file order. Each one is either accepted, skipped as
//! invalid, or skipped as a duplicate of an earlier accepted entry (first
//! seen wins). Once the book holds `capacity` seniors the pass stops and
//! whatever is left is counted as over the limit without being looked at.

use super::Format;
use crate::diagnostics::DiagnosticSink;
use crate::error::DecodeError;
use crate::model::{Senior, SeniorBook};
use std::fmt;

/// One entry as seen by the cleaning pass.
pub struct Entry {
    /// 1-based entry number (array index for JSON, line number for text).
    pub number: usize,
    /// Human-readable name/phone label for diagnostics.
    pub label: String,
    pub decoded: Result<Senior, DecodeError>,
}

/// Counts describing what a load did with the file's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub format: Format,
    pub entries: usize,
    pub loaded: usize,
    pub duplicates: usize,
    pub invalid: usize,
    pub over_limit: usize,
}

impl LoadReport {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            entries: 0,
            loaded: 0,
            duplicates: 0,
            invalid: 0,
            over_limit: 0,
        }
    }

    pub fn skipped(&self) -> usize {
        self.duplicates + self.invalid + self.over_limit
    }

    /// True when every entry in the file made it into the book.
    pub fn is_clean(&self) -> bool {
        self.skipped() == 0
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loaded {} of {} {} entries ({} duplicate, {} invalid, {} over limit)",
            self.loaded, self.entries, self.format, self.duplicates, self.invalid, self.over_limit
        )
    }
}

/// Run the cleaning pass. `capacity` of `None` means unbounded.
///
/// Entries are pulled lazily, so entries past the capacity stop are never
/// decoded when the iterator decodes on demand.
pub fn clean<I>(
    format: Format,
    entries: I,
    capacity: Option<usize>,
    sink: &dyn DiagnosticSink,
) -> (SeniorBook, LoadReport)
where
    I: IntoIterator<Item = Entry>,
    I::IntoIter: ExactSizeIterator,
{
    let mut entries = entries.into_iter();
    let mut report = LoadReport::new(format);
    report.entries = entries.len();
    let mut book = SeniorBook::new();

    loop {
        if let Some(cap) = capacity {
            if book.len() >= cap {
                report.over_limit = entries.len();
                if report.over_limit > 0 {
                    sink.warn(format!(
                        "Limit of {} seniors reached; {} remaining entries were not loaded",
                        cap, report.over_limit
                    ));
                }
                break;
            }
        }

        let Some(entry) = entries.next() else {
            break;
        };

        match entry.decoded {
            Err(err) => {
                report.invalid += 1;
                sink.warn(format!(
                    "Invalid {} skipped - entry {}: {} ({})",
                    format, entry.number, entry.label, err
                ));
            }
            Ok(senior) => match book.add(senior) {
                Ok(()) => report.loaded += 1,
                Err(_) => {
                    report.duplicates += 1;
                    sink.warn(format!(
                        "Duplicate entry skipped - entry {}: {}",
                        entry.number, entry.label
                    ));
                }
            },
        }
    }

    (book, report)
}
