use std::collections::VecDeque;

/// Undo/redo history of whole-surface snapshots.
///
/// Every edit stores a full copy of the surface as it was before the edit.
/// This trades memory for simplicity: no per-tool inverse operations are
/// needed, and undo is just a swap. `limit` bounds the memory cost by
/// dropping the oldest snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotHistory<T> {
    /// Snapshots that can be restored by undo, oldest first
    undo_stack: VecDeque<T>,
    /// Snapshots that can be restored by redo, most recent last
    redo_stack: Vec<T>,
    limit: Option<usize>,
}

impl<T> Default for SnapshotHistory<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> SnapshotHistory<T> {
    /// Creates an empty history keeping at most `limit` undo snapshots
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Record the state from before a new edit.
    ///
    /// Any new edit invalidates the redo stack.
    pub fn record(&mut self, snapshot: T) {
        self.undo_stack.push_back(snapshot);
        self.redo_stack.clear();
        self.enforce_limit();
    }

    /// Swap `current` with the most recent undo snapshot.
    ///
    /// Returns false and leaves `current` alone if there is nothing to undo.
    pub fn undo(&mut self, current: &mut T) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };
        let replaced = std::mem::replace(current, previous);
        self.redo_stack.push(replaced);
        log::debug!(
            "Undo: {} undo / {} redo snapshots left",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Swap `current` with the most recent redo snapshot.
    ///
    /// Returns false and leaves `current` alone if there is nothing to redo.
    pub fn redo(&mut self, current: &mut T) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.undo_stack.push_back(replaced);
        self.enforce_limit();
        log::debug!(
            "Redo: {} undo / {} redo snapshots left",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }
}
