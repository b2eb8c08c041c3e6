use crate::collections::queue::traits::queue_base::QueueBase;

/// Trait providing write operations for mutable references.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Adds an element to the container.
  ///
  /// The containers in this crate are unbounded, so offering never fails.
  fn offer_mut(&mut self, element: E);

  /// Adds an element when one is present; offering `None` is a silent no-op.
  fn offer_opt_mut(&mut self, element: Option<E>) {
    if let Some(element) = element {
      self.offer_mut(element);
    }
  }
}
