
use alloc::collections::VecDeque;

use crate::collections::queue::{
  queue_size::QueueSize,
  traits::{QueueBase, QueueReader, QueueWriter},
};

/// Unbounded FIFO queue.
///
/// Elements poll back in the exact order they were offered: the nth poll
/// returns the nth-offered element regardless of interleaving with other
/// operations.
#[derive(Debug)]
pub struct SimpleQueue<E> {
  items: VecDeque<E>,
}

impl<E> SimpleQueue<E> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: VecDeque::new() }
  }
}

impl<E> Default for SimpleQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> QueueBase<E> for SimpleQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.items.len())
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl<E> QueueWriter<E> for SimpleQueue<E> {
  fn offer_mut(&mut self, element: E) {
    self.items.push_back(element);
  }
}

impl<E> QueueReader<E> for SimpleQueue<E> {
  fn poll_mut(&mut self) -> Option<E> {
    self.items.pop_front()
  }

  fn peek(&self) -> Option<&E> {
    self.items.front()
  }

  fn clean_up_mut(&mut self) {
    self.items.clear();
  }
}
