use crate::collections::queue::queue_size::QueueSize;

/// Common trait defining basic container observations.
pub trait QueueBase<E> {
  /// Returns the current number of held elements.
  fn len(&self) -> QueueSize;

  /// Returns the container capacity.
  fn capacity(&self) -> QueueSize;

  /// Checks if the container holds no elements.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == QueueSize::Limited(0)
  }
}
