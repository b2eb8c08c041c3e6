use crate::collections::queue::traits::queue_base::QueueBase;

/// Trait providing read and removal operations for mutable references.
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes and returns the next element, or `None` when empty.
  ///
  /// Which element is "next" is the defining property of each container:
  /// FIFO head, LIFO top, priority maximum, or the circular queue's tail.
  fn poll_mut(&mut self) -> Option<E>;

  /// Borrows the element `peek` addresses without removing it, or `None`
  /// when empty.
  fn peek(&self) -> Option<&E>;

  /// Discards all elements, leaving the container empty but usable.
  ///
  /// Calling this on an already-empty container is a no-op.
  fn clean_up_mut(&mut self);
}
