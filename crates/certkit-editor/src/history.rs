//! Linear undo/redo over whole-scene snapshots.
//!
//! One list of serialized snapshots plus a cursor. Undo and redo only move
//! the cursor; the list changes in exactly two ways: a new entry truncates
//! whatever lay ahead of the cursor, and the FIFO cap evicts the oldest
//! entry once the list is full.

use tracing::debug;

/// Maximum number of snapshots kept before the oldest is evicted.
pub const HISTORY_CAP: usize = 50;

/// Snapshot history with a movable cursor.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    entries: Vec<String>,
    /// Index of the entry matching the current scene state. Only
    /// meaningful while `entries` is non-empty.
    cursor: usize,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HISTORY_CAP),
            cursor: 0,
        }
    }

    /// Records a committed snapshot. Entries ahead of the cursor (the redo
    /// future) are discarded first; the cap then evicts from the front.
    pub fn record(&mut self, snapshot: String) {
        if !self.entries.is_empty() && self.cursor + 1 < self.entries.len() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > HISTORY_CAP {
            self.entries.remove(0);
            self.cursor -= 1;
            debug!(cap = HISTORY_CAP, "history cap reached, oldest entry evicted");
        }
    }

    /// Steps the cursor back and returns the snapshot to load, or `None`
    /// at the start of history.
    pub fn undo(&mut self) -> Option<&str> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Steps the cursor forward and returns the snapshot to load, or
    /// `None` at the end of history.
    pub fn redo(&mut self) -> Option<&str> {
        if self.entries.is_empty() || self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Rolls a failed `undo`/`redo` navigation back so the cursor still
    /// points at the last successfully loaded snapshot.
    pub fn revert_to(&mut self, cursor: usize) {
        if cursor < self.entries.len() {
            self.cursor = cursor;
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0 && !self.entries.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops everything. Used on full scene resets and template loads.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(n: usize) -> String {
        format!("snapshot-{n}")
    }

    #[test]
    fn test_empty_history_rejects_navigation() {
        let mut history = HistoryManager::new();
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_walk() {
        let mut history = HistoryManager::new();
        for i in 0..3 {
            history.record(snap(i));
        }
        assert_eq!(history.undo(), Some(snap(1).as_str()));
        assert_eq!(history.undo(), Some(snap(0).as_str()));
        assert!(history.undo().is_none());
        assert_eq!(history.redo(), Some(snap(1).as_str()));
        assert_eq!(history.redo(), Some(snap(2).as_str()));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_record_truncates_redo_future() {
        let mut history = HistoryManager::new();
        for i in 0..5 {
            history.record(snap(i));
        }
        history.undo();
        history.undo();
        history.record(snap(99));
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 4);
        assert_eq!(history.undo(), Some(snap(2).as_str()));
    }

    #[test]
    fn test_fifo_eviction_shifts_cursor() {
        let mut history = HistoryManager::new();
        for i in 0..HISTORY_CAP + 10 {
            history.record(snap(i));
        }
        assert_eq!(history.len(), HISTORY_CAP);
        // Walking all the way back lands on the oldest surviving entry.
        let mut last = None;
        while let Some(s) = history.undo() {
            last = Some(s.to_string());
        }
        assert_eq!(last.as_deref(), Some(snap(10).as_str()));
    }

    #[test]
    fn test_cursor_invariant_holds() {
        let mut history = HistoryManager::new();
        for i in 0..7 {
            history.record(snap(i));
            assert!(history.cursor() < history.len());
        }
        while history.undo().is_some() {
            assert!(history.cursor() < history.len());
        }
    }
}
