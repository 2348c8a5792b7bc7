use super::cleaning::{self, Entry, LoadReport};
use super::codec::{decode_line, encode_line, FIELD_SEPARATOR};
use super::{ensure_parent, BookStore, Format, Loaded, SaveReport};
use crate::config::TextMode;
use crate::diagnostics::SharedSink;
use crate::error::{DecodeError, Result, StoreError};
use crate::model::{Identity, Senior, SeniorBook};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// The Secondary store: one `NAME|PHONE|ADDRESS|EMAIL|TAGS` line per senior.
///
/// In [`TextMode::Strict`] a single bad line or a single duplicate rejects the
/// whole file. [`TextMode::Lenient`] runs the same cleaning pass as the JSON
/// store instead, without a capacity bound.
pub struct TextStore {
    path: PathBuf,
    mode: TextMode,
    sink: SharedSink,
}

impl TextStore {
    pub fn new(path: impl Into<PathBuf>, sink: SharedSink) -> Self {
        Self {
            path: path.into(),
            mode: TextMode::default(),
            sink,
        }
    }

    pub fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }

    /// Non-blank lines, trimmed, with their 1-based line numbers. A line that
    /// is not valid UTF-8 is kept as a `Malformed` decode error.
    fn read_lines(&self, path: &Path) -> Result<Option<Vec<RawLine>>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let mut lines = Vec::new();
        for (idx, bytes) in BufReader::new(file).split(b'\n').enumerate() {
            let bytes = bytes.map_err(|e| StoreError::io(path, e))?;
            let line = match String::from_utf8(bytes) {
                Ok(text) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    Ok(trimmed.to_string())
                }
                Err(e) => Err(DecodeError::Malformed(format!(
                    "not valid UTF-8 ({})",
                    e.utf8_error()
                ))),
            };
            lines.push((idx + 1, line));
        }
        Ok(Some(lines))
    }

    fn load_strict(&self, path: &Path, lines: Vec<RawLine>) -> Result<Loaded> {
        let mut parsed: Vec<(usize, Senior)> = Vec::with_capacity(lines.len());
        for (line_no, line) in lines {
            let senior = line.and_then(|line| decode_line(&line)).map_err(|source| {
                self.sink.error(format!(
                    "Invalid data in {} at line {}: {}",
                    path.display(),
                    line_no,
                    source
                ));
                StoreError::InvalidLine {
                    line: line_no,
                    source,
                }
            })?;
            parsed.push((line_no, senior));
        }

        let mut seen: HashMap<Identity, usize> = HashMap::with_capacity(parsed.len());
        for (line_no, senior) in &parsed {
            if let Some(first_line) = seen.insert(senior.identity(), *line_no) {
                self.sink.error(format!(
                    "Duplicate entries in {}: {} ({}) at lines {} and {}",
                    path.display(),
                    senior.name,
                    senior.phone,
                    first_line,
                    line_no
                ));
                return Err(StoreError::DuplicateIdentity {
                    name: senior.name.to_string(),
                    phone: senior.phone.to_string(),
                    first_line,
                    second_line: *line_no,
                });
            }
        }

        let mut report = LoadReport::new(Format::Text);
        report.entries = parsed.len();
        let mut book = SeniorBook::new();
        for (_, senior) in parsed {
            book.add(senior)?;
        }
        report.loaded = book.len();
        Ok(Loaded { book, report })
    }

    fn load_lenient(&self, path: &Path, lines: Vec<RawLine>) -> Result<Loaded> {
        let entries: Vec<Entry> = lines
            .into_iter()
            .map(|(number, line)| match line {
                Ok(line) => Entry {
                    number,
                    label: line_label(&line),
                    decoded: decode_line(&line),
                },
                Err(err) => Entry {
                    number,
                    label: "<unreadable>".to_string(),
                    decoded: Err(err),
                },
            })
            .collect();

        let (book, report) = cleaning::clean(Format::Text, entries, None, &*self.sink);
        if report.entries > 0 && report.loaded == 0 {
            return Err(StoreError::NoValidRecords {
                path: path.to_path_buf(),
                entries: report.entries,
            });
        }
        Ok(Loaded { book, report })
    }
}

/// A line number and the trimmed line, or why it could not be read as text.
type RawLine = (usize, std::result::Result<String, DecodeError>);

/// "name (phone)" from the first two fields of a raw line.
fn line_label(line: &str) -> String {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
    match (fields.next(), fields.next()) {
        (Some(name), Some(phone)) => format!("{} ({})", name, phone),
        (Some(name), None) => name.to_string(),
        _ => "<unnamed>".to_string(),
    }
}

impl BookStore for TextStore {
    fn format(&self) -> Format {
        Format::Text
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn load_from(&self, path: &Path) -> Result<Option<Loaded>> {
        let Some(lines) = self.read_lines(path)? else {
            self.sink
                .info(format!("Text data file not found: {}", path.display()));
            return Ok(None);
        };

        let loaded = match self.mode {
            TextMode::Strict => self.load_strict(path, lines)?,
            TextMode::Lenient => self.load_lenient(path, lines)?,
        };

        if loaded.report.is_clean() {
            self.sink.info(format!(
                "Data loaded from {}: {}",
                path.display(),
                loaded.report
            ));
        } else {
            self.sink.warn(format!(
                "Data loaded from {}: {}",
                path.display(),
                loaded.report
            ));
        }
        Ok(Some(loaded))
    }

    fn save_to(&self, book: &SeniorBook, path: &Path) -> Result<SaveReport> {
        ensure_parent(path)?;
        let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        for senior in book {
            writeln!(writer, "{}", encode_line(senior)).map_err(|e| StoreError::io(path, e))?;
        }
        writer.flush().map_err(|e| StoreError::io(path, e))?;

        Ok(SaveReport {
            written: book.len(),
            dropped: 0,
        })
    }
}
