//! Ordered, in-memory history of calculations.
//!
//! Entries are addressed by their 1-based position in display order.
//! Positions are not stable keys: deleting an entry shifts every later
//! entry down by one.

use tracing::debug;

use super::record::Calculation;
use crate::error::{CalcError, Result};

#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<Calculation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a calculation to the end. Returns its position.
    pub fn append(&mut self, calculation: Calculation) -> usize {
        self.entries.push(calculation);
        self.entries.len()
    }

    /// All entries in insertion order.
    pub fn get_all(&self) -> &[Calculation] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&Calculation> {
        self.index_of(position).ok().map(|index| &self.entries[index])
    }

    /// Remove the entry at `position` and return it.
    pub fn delete_at(&mut self, position: usize) -> Result<Calculation> {
        let index = self.index_of(position)?;
        let removed = self.entries.remove(index);
        debug!(position, remaining = self.entries.len(), "history entry deleted");
        Ok(removed)
    }

    /// Replace the entry at `position`, keeping its place in the order.
    /// Returns the entry that was replaced.
    pub fn update_at(&mut self, position: usize, calculation: Calculation) -> Result<Calculation> {
        let index = self.index_of(position)?;
        let previous = std::mem::replace(&mut self.entries[index], calculation);
        debug!(position, "history entry updated");
        Ok(previous)
    }

    /// Fail with [`CalcError::IndexOutOfRange`] unless `position` addresses an entry.
    pub fn check_position(&self, position: usize) -> Result<()> {
        self.index_of(position).map(|_| ())
    }

    pub fn clear(&mut self) {
        debug!(removed = self.entries.len(), "history cleared");
        self.entries.clear();
    }

    /// Translate a 1-based position into a vector index.
    fn index_of(&self, position: usize) -> Result<usize> {
        if position >= 1 && position <= self.entries.len() {
            Ok(position - 1)
        } else {
            Err(CalcError::IndexOutOfRange {
                position,
                len: self.entries.len(),
            })
        }
    }
}
