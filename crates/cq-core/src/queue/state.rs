//! Queue state.
//!
//! Owns the captured snapshots, the browsing cursor and the active flag.
//! All mutation goes through the methods below; each returns the new size
//! or the element under the cursor so callers can observe the effect.

use std::collections::VecDeque;

use super::QueueError;

/// Clipboard snapshot queue.
///
/// 剪贴板快照队列。
///
/// - `items` keeps insertion order, oldest at index 0.
/// - `cursor` is only meaningful while `items` is non-empty and always stays
///   within `[0, len - 1]`; it is reset to 0 when the queue drains.
/// - `active == false` means the queue is paused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueState {
    items: VecDeque<String>,
    cursor: usize,
    active: bool,
    capacity: Option<usize>,
}

impl Default for QueueState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueState {
    /// Empty, active, unbounded queue.
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    /// Empty, active queue that keeps at most `capacity` snapshots.
    ///
    /// A capacity of `Some(0)` is treated as unbounded.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            items: VecDeque::new(),
            cursor: 0,
            active: true,
            capacity: capacity.filter(|c| *c > 0),
        }
    }

    /// Seed a queue with existing snapshots and a cursor position.
    ///
    /// The cursor is clamped into range.
    pub fn from_items<I, S>(items: I, cursor: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new();
        state.items = items.into_iter().map(Into::into).collect();
        state.cursor = cursor;
        state.clamp_cursor();
        state
    }

    /// Push `value` to the tail. Empty strings are accepted.
    ///
    /// When a capacity is set and exceeded, the oldest snapshot is evicted.
    /// Returns the new size.
    pub fn append(&mut self, value: impl Into<String>) -> usize {
        self.items.push_back(value.into());

        if let Some(capacity) = self.capacity {
            while self.items.len() > capacity {
                self.items.pop_front();
                self.shift_cursor_after_head_removal();
                #[cfg(feature = "tracing")]
                tracing::debug!(capacity, "queue full, evicted oldest snapshot");
            }
        }

        self.items.len()
    }

    /// Remove and return the oldest snapshot.
    ///
    /// Fails with [`QueueError::EmptyQueue`] and leaves the state untouched
    /// when there is nothing to pop.
    pub fn pop_front(&mut self) -> Result<String, QueueError> {
        let value = self.items.pop_front().ok_or(QueueError::EmptyQueue)?;
        self.shift_cursor_after_head_removal();
        Ok(value)
    }

    /// Move the cursor one step towards the tail and return the element
    /// now under it.
    pub fn move_cursor_forward(&mut self) -> Result<&str, QueueError> {
        if self.items.is_empty() || self.cursor + 1 >= self.items.len() {
            return Err(QueueError::NoMove);
        }
        self.cursor += 1;
        Ok(self.items[self.cursor].as_str())
    }

    /// Move the cursor one step towards the head and return the element
    /// now under it.
    pub fn move_cursor_backward(&mut self) -> Result<&str, QueueError> {
        if self.items.is_empty() || self.cursor == 0 {
            return Err(QueueError::NoMove);
        }
        self.cursor -= 1;
        Ok(self.items[self.cursor].as_str())
    }

    /// Put the cursor back on `index`, e.g. to undo a move whose replay
    /// failed. Fails with [`QueueError::NoMove`] when `index` is out of range.
    pub fn set_cursor(&mut self, index: usize) -> Result<&str, QueueError> {
        if index >= self.items.len() {
            return Err(QueueError::NoMove);
        }
        self.cursor = index;
        Ok(self.items[index].as_str())
    }

    /// Flip the active flag and return its new value.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Element under the cursor, `None` when empty.
    pub fn current(&self) -> Option<&str> {
        self.get(self.cursor)
    }

    /// Most recently appended snapshot.
    pub fn last(&self) -> Option<&str> {
        self.items.back().map(String::as_str)
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    // Indices shift down by one when the head goes away; keep the cursor
    // on the same snapshot if it still exists.
    fn shift_cursor_after_head_removal(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        self.cursor = match self.items.len() {
            0 => 0,
            len => self.cursor.min(len - 1),
        };
    }
}
