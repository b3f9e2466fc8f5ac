//! Calculation tape
//!
//! Keeps the most recent completed computations, oldest evicted first.

use crate::core::state::Computation;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::trace;

/// Bounded record of completed computations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// The recorded computations, oldest first
    entries: VecDeque<Computation>,
    /// Maximum number of entries to keep
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a tape with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a tape holding at most `max_entries` computations.
    ///
    /// A capacity of zero records nothing.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Appends a computation, evicting the oldest when full
    pub fn record(&mut self, computation: Computation) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.entries.pop_front() {
                trace!(line = %evicted.display(), "tape full, evicted oldest entry");
            }
        }
        self.entries.push_back(computation);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Computation> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &Computation> {
        self.entries.iter().rev()
    }

    /// The most recent computation
    #[must_use]
    pub fn last(&self) -> Option<&Computation> {
        self.entries.back()
    }

    /// Formatted tape lines, oldest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(Computation::display).collect()
    }
}
