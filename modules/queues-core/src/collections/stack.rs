#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use crate::collections::queue::{QueueBase, QueueReader, QueueSize, QueueWriter};

/// Unbounded LIFO stack.
///
/// Shares the container contract with the queue types; `poll_mut` and `peek`
/// address the most-recently-offered element.
#[derive(Debug)]
pub struct Stack<E> {
  items: Vec<E>,
}

impl<E> Stack<E> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: Vec::new() }
  }
}

impl<E> Default for Stack<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> QueueBase<E> for Stack<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.items.len())
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl<E> QueueWriter<E> for Stack<E> {
  fn offer_mut(&mut self, element: E) {
    self.items.push(element);
  }
}

impl<E> QueueReader<E> for Stack<E> {
  fn poll_mut(&mut self) -> Option<E> {
    self.items.pop()
  }

  fn peek(&self) -> Option<&E> {
    self.items.last()
  }

  fn clean_up_mut(&mut self) {
    self.items.clear();
  }
}
