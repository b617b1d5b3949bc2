use log::debug;

/// Undo/redo stacks holding full snapshots of the heap array, newest last.
///
/// `History` only moves snapshots around; it never inspects or repairs them.
/// Every snapshot handed to `record` must be an independent copy, so that
/// later in-place mutation of the live array cannot rewrite stored entries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct History<T> {
    undo_stack: Vec<Vec<T>>,
    redo_stack: Vec<Vec<T>>,
    limit: Option<usize>,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: None,
        }
    }

    /// A history that keeps at most `limit` undo entries, evicting the
    /// oldest when a new snapshot is recorded past the cap.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Records `snapshot` as the newest undo entry and discards all redo
    /// entries. Called once per mutation, before the mutation is applied.
    pub fn record(&mut self, snapshot: Vec<T>) {
        if let Some(limit) = self.limit {
            while self.undo_stack.len() >= limit.max(1) {
                self.undo_stack.remove(0);
                debug!("history: limit {} reached, evicted oldest entry", limit);
            }
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Swaps `current` with the newest undo entry, keeping the replaced
    /// state for redo. Returns false (leaving `current` untouched) if there
    /// is nothing to undo.
    pub fn undo(&mut self, current: &mut Vec<T>) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                let replaced = core::mem::replace(current, snapshot);
                self.redo_stack.push(replaced);
                true
            }
            None => false,
        }
    }

    /// Swaps `current` with the newest redo entry, keeping the replaced
    /// state for undo. Returns false if there is nothing to redo.
    pub fn redo(&mut self, current: &mut Vec<T>) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                let replaced = core::mem::replace(current, snapshot);
                self.undo_stack.push(replaced);
                true
            }
            None => false,
        }
    }
}
