//! Core data types: the [`Senior`] record and the [`SeniorBook`] collection.

use std::collections::BTreeSet;

pub mod book;
pub mod fields;

pub use book::SeniorBook;
pub use fields::{Address, Email, Name, Phone, Remark, Tag};

/// One person in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Senior {
    pub name: Name,
    pub phone: Phone,
    pub address: Address,
    pub email: Email,
    pub remark: Remark,
    pub tags: BTreeSet<Tag>,
}

impl Senior {
    pub fn new(name: Name, phone: Phone, address: Address) -> Self {
        Self {
            name,
            phone,
            address,
            email: Email::empty(),
            remark: Remark::empty(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn identity(&self) -> Identity {
        Identity {
            phone: self.phone.as_str().to_string(),
            folded_name: self.name.folded(),
        }
    }

    /// Two records are the same person when phone matches exactly and the
    /// names match ignoring case. Address, email, remark and tags are ignored.
    pub fn is_same_senior(&self, other: &Senior) -> bool {
        self.phone == other.phone && self.name.folded() == other.name.folded()
    }
}

/// The (phone, case-folded name) pair used to detect duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub phone: String,
    pub folded_name: String,
}
