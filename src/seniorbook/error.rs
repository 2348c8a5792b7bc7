use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A field of a senior record, used to tag decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Address,
    Email,
    Remark,
    Tag,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::Email => "email",
            Field::Remark => "remark",
            Field::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Why a single persisted record could not be turned into a `Senior`.
///
/// These are per-record failures: the JSON store folds them into its load
/// report and moves on, the strict text store aborts on the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{0} field is missing")]
    MissingField(Field),

    #[error("invalid {field}: {reason}")]
    InvalidFormat { field: Field, reason: String },

    #[error("expected 4 or 5 fields but found {found}")]
    FieldCount { found: usize },

    #[error("malformed entry: {0}")]
    Malformed(String),
}

impl DecodeError {
    pub fn invalid(field: Field, reason: impl Into<String>) -> Self {
        DecodeError::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    /// The field this error is about, if it is about a single field.
    pub fn field(&self) -> Option<Field> {
        match self {
            DecodeError::MissingField(field) => Some(*field),
            DecodeError::InvalidFormat { field, .. } => Some(*field),
            DecodeError::FieldCount { .. } | DecodeError::Malformed(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Invalid data at line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: DecodeError,
    },

    #[error(
        "Duplicate entries found: {name} ({phone}) appears at lines {first_line} and {second_line}"
    )]
    DuplicateIdentity {
        name: String,
        phone: String,
        first_line: usize,
        second_line: usize,
    },

    #[error("No valid records in {} ({entries} entries were rejected)", path.display())]
    NoValidRecords { path: PathBuf, entries: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
