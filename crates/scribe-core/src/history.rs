//! Linear undo/redo log.
//!
//! The stack always holds at least the baseline entry, so the cursor is a
//! valid index at every point: `0 <= cursor < len`. Pushing after an undo
//! discards the entries past the cursor; there is no redo tree.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    entries: VecDeque<T>,
    cursor: usize,
    limit: Option<usize>,
}

impl<T> HistoryStack<T> {
    pub fn new(baseline: T) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(baseline);
        Self {
            entries,
            cursor: 0,
            limit: None,
        }
    }

    /// Keep at most `limit` entries, evicting the oldest first.
    /// A limit of zero is treated as one: the current entry always survives.
    pub fn with_limit(baseline: T, limit: usize) -> Self {
        let mut stack = Self::new(baseline);
        stack.limit = Some(limit.max(1));
        stack
    }

    pub fn push(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(snapshot);
        self.cursor = self.entries.len() - 1;

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
                self.cursor -= 1;
            }
        }
    }

    /// Step back one entry. `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the baseline entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}
