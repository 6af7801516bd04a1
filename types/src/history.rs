use std::collections::{vec_deque, VecDeque};

use crate::round_record::HistoryEntry;

pub const MAX_HISTORY: usize = 100;

/// Chronological log of the most recent rounds. Once `capacity` is reached the
/// oldest entry is dropped for every new one.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Appends `entry`, returning the evicted oldest entry if the log was full.
    pub fn append(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Oldest first.
    pub fn all(&self) -> vec_deque::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// At most `n` entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl FromIterator<HistoryEntry> for HistoryLog {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        let mut log = HistoryLog::default();
        for entry in iter {
            log.append(entry);
        }
        log
    }
}
