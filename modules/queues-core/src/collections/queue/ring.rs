
use alloc::vec::Vec;

use crate::collections::queue::{
  queue_size::QueueSize,
  traits::{QueueBase, QueueReader, QueueWriter},
};

/// Unbounded circular queue traversed through a wrapping cursor.
///
/// Storage itself never wraps; only the cursor does. Offering appends at the
/// tail without touching the cursor, and [`CircularQueue::next`] walks the
/// sequence endlessly, returning to index 0 after the last element.
///
/// The cursor invariant is `0 <= cursor < len`, with `cursor == 0` when
/// empty. Every operation that could strand the cursor past the last valid
/// index resets it to 0.
#[derive(Debug)]
pub struct CircularQueue<E> {
  items:  Vec<E>,
  cursor: usize,
}

impl<E> CircularQueue<E> {
  /// Creates an empty circular queue with the cursor at 0.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: Vec::new(), cursor: 0 }
  }

  /// Returns the element at the cursor, then advances the cursor by one,
  /// wrapping to 0 past the last index. Returns `None` when empty, leaving
  /// the cursor untouched.
  ///
  /// Not an `Iterator`: traversal never terminates and the element stays
  /// owned by the queue.
  #[allow(clippy::should_implement_trait)]
  pub fn next(&mut self) -> Option<&E> {
    if self.items.is_empty() {
      return None;
    }
    let current = self.cursor;
    self.cursor = if current + 1 > self.items.len() - 1 { 0 } else { current + 1 };
    self.items.get(current)
  }

  /// Moves the cursor back to 0.
  pub fn reset(&mut self) {
    self.cursor = 0;
  }

  /// Sets the cursor to `value` when `value <= len - 1`.
  ///
  /// An out-of-range value is rejected: the cursor stays where it was and a
  /// `tracing` warning is emitted. The rejection is not observable through a
  /// return value.
  pub fn set_index(&mut self, value: usize) {
    if value < self.items.len() {
      self.cursor = value;
    } else {
      tracing::warn!(value, len = self.items.len(), "set_index received an out-of-range value, ignoring request");
    }
  }

  /// The current cursor position.
  #[must_use]
  pub const fn index(&self) -> usize {
    self.cursor
  }
}

impl<E> Default for CircularQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> QueueBase<E> for CircularQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.items.len())
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl<E> QueueWriter<E> for CircularQueue<E> {
  fn offer_mut(&mut self, element: E) {
    self.items.push(element);
  }
}

impl<E> QueueReader<E> for CircularQueue<E> {
  /// Removes and returns the tail element. If the removal strands the
  /// cursor past the last valid index, the cursor resets to 0.
  fn poll_mut(&mut self) -> Option<E> {
    let element = self.items.pop()?;
    if self.cursor >= self.items.len() {
      self.cursor = 0;
    }
    Some(element)
  }

  /// Borrows the element at the cursor without advancing.
  fn peek(&self) -> Option<&E> {
    self.items.get(self.cursor)
  }

  fn clean_up_mut(&mut self) {
    self.items.clear();
    self.cursor = 0;
  }
}
