
use alloc::{boxed::Box, vec::Vec};
use core::{cmp::Ordering, fmt};

use crate::collections::queue::{
  queue_size::QueueSize,
  traits::{QueueBase, QueueReader, QueueWriter},
};

/// Ordering function injected into a [`PriorityQueue`] at construction.
pub type Comparator<E> = Box<dyn Fn(&E, &E) -> Ordering>;

/// Trait for elements carrying their own numeric priority.
///
/// [`PriorityQueue::new`] orders elements ascending by this value when no
/// custom comparator is supplied.
pub trait HasPriority {
  /// Gets the element priority. Higher values poll first.
  fn priority(&self) -> i64;
}

/// Unbounded priority queue ordered by a runtime-pluggable comparator.
///
/// The internal sequence is kept fully sorted ascending after every offer.
/// `poll_mut` removes the **maximum** element while `peek` shows the
/// **minimum**; the two deliberately address opposite ends of the order.
/// This asymmetry is part of the contract and is pinned down by tests; do
/// not reconcile the two without changing both.
///
/// Tie-break: equal elements poll back oldest-first. A freshly offered
/// element is inserted at the front before the stable re-sort, so it ends up
/// behind nothing and ahead of every equal element already present, and the
/// tail poll reaches it last.
pub struct PriorityQueue<E> {
  items:      Vec<E>,
  comparator: Comparator<E>,
}

impl<E: HasPriority + 'static> PriorityQueue<E> {
  /// Creates an empty queue ordered ascending by [`HasPriority::priority`].
  #[must_use]
  pub fn new() -> Self {
    Self::with_comparator(|a: &E, b: &E| a.priority().cmp(&b.priority()))
  }
}

impl<E: HasPriority + 'static> Default for PriorityQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> PriorityQueue<E> {
  /// Creates an empty queue ordered by the supplied comparator.
  ///
  /// The comparator expresses ascending order: it returns `Ordering::Less`
  /// when its first argument sorts before its second.
  #[must_use]
  pub fn with_comparator(comparator: impl Fn(&E, &E) -> Ordering + 'static) -> Self {
    Self {
      items:      Vec::new(),
      comparator: Box::new(comparator),
    }
  }
}

impl<E: fmt::Debug> fmt::Debug for PriorityQueue<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PriorityQueue").field("items", &self.items).finish_non_exhaustive()
  }
}

impl<E> QueueBase<E> for PriorityQueue<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.items.len())
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }
}

impl<E> QueueWriter<E> for PriorityQueue<E> {
  fn offer_mut(&mut self, element: E) {
    self.items.insert(0, element);
    // Full re-sort on every offer; O(n log n) is accepted at this scale.
    let comparator = &self.comparator;
    self.items.sort_by(|a, b| comparator(a, b));
  }
}

impl<E> QueueReader<E> for PriorityQueue<E> {
  /// Removes and returns the maximum-priority element.
  fn poll_mut(&mut self) -> Option<E> {
    self.items.pop()
  }

  /// Borrows the minimum-priority element. See the type-level note on the
  /// peek/poll asymmetry.
  fn peek(&self) -> Option<&E> {
    self.items.first()
  }

  fn clean_up_mut(&mut self) {
    self.items.clear();
  }
}
