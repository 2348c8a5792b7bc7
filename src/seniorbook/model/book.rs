use super::{Identity, Senior};
use crate::error::{Result, StoreError};
use std::collections::HashSet;

/// Ordered collection of seniors with unique identities.
///
/// Order is insertion order, which for a loaded book is file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeniorBook {
    seniors: Vec<Senior>,
    identities: HashSet<Identity>,
}

impl SeniorBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a senior, rejecting one whose identity is already present.
    pub fn add(&mut self, senior: Senior) -> Result<()> {
        if !self.identities.insert(senior.identity()) {
            return Err(StoreError::DuplicateIdentity {
                name: senior.name.to_string(),
                phone: senior.phone.to_string(),
                first_line: self.position_of(&senior).map_or(0, |i| i + 1),
                second_line: self.seniors.len() + 1,
            });
        }
        self.seniors.push(senior);
        Ok(())
    }

    pub fn position_of(&self, senior: &Senior) -> Option<usize> {
        self.seniors.iter().position(|s| s.is_same_senior(senior))
    }

    pub fn seniors(&self) -> &[Senior] {
        &self.seniors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Senior> {
        self.seniors.iter()
    }

    pub fn len(&self) -> usize {
        self.seniors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seniors.is_empty()
    }

    /// A copy holding only the first `limit` seniors.
    pub fn truncated(&self, limit: usize) -> SeniorBook {
        let seniors: Vec<Senior> = self.seniors.iter().take(limit).cloned().collect();
        let identities = seniors.iter().map(Senior::identity).collect();
        SeniorBook {
            seniors,
            identities,
        }
    }
}

impl<'a> IntoIterator for &'a SeniorBook {
    type Item = &'a Senior;
    type IntoIter = std::slice::Iter<'a, Senior>;

    fn into_iter(self) -> Self::IntoIter {
        self.seniors.iter()
    }
}
