// Linear undo timeline over canvas snapshots.
// Writing after an undo throws away the undone states; there is no redo.

use tracing::debug;

/// Ordered snapshots plus a cursor at the one currently on screen.
///
/// States: empty (no cursor) or positioned at `cursor`. Right after any
/// push, `len() == cursor + 1`; undo only moves the cursor, the entries
/// past it are dropped by the next push.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: Option<usize>,
    capacity: Option<usize>, // None = unbounded
}

impl<T: Clone> History<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), cursor: None, capacity: None }
    }

    /// Keep at most `capacity` entries, dropping the oldest first.
    /// A capacity of 0 is treated as 1 so the current state is always kept.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::new(), cursor: None, capacity: Some(capacity.max(1)) }
    }

    /// Record a new state: truncate past the cursor, append, move the cursor to it.
    pub fn push(&mut self, entry: T) {
        if let Some(c) = self.cursor {
            self.entries.truncate(c + 1);
        }
        self.entries.push(entry);

        if let Some(cap) = self.capacity {
            if self.entries.len() > cap {
                let excess = self.entries.len() - cap;
                self.entries.drain(..excess);
                debug!(evicted = excess, "history at capacity");
            }
        }

        self.cursor = Some(self.entries.len() - 1);
        debug!(cursor = self.entries.len() - 1, len = self.entries.len(), "history push");
    }

    /// Step back one entry and return it; None when already at the oldest.
    pub fn undo(&mut self) -> Option<T> {
        let c = self.cursor?;
        if c == 0 {
            return None;
        }
        self.cursor = Some(c - 1);
        debug!(cursor = c - 1, len = self.entries.len(), "history undo");
        self.entries.get(c - 1).cloned()
    }

    /// The entry `undo` would return, without moving the cursor.
    pub fn peek_undo(&self) -> Option<&T> {
        match self.cursor {
            Some(c) if c > 0 => self.entries.get(c - 1),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as stored, oldest first.
    #[cfg(test)]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
