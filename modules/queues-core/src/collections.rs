//! alloc-only container collections.
//!
//! Four independent containers, each owning its elements exclusively. The
//! shared contract lives in [`QueueBase`], [`QueueWriter`] and
//! [`QueueReader`]; the circular queue adds cursor traversal operations of
//! its own.

mod queue;
mod stack;

pub use queue::{
  CircularQueue, Comparator, HasPriority, PriorityQueue, QueueBase, QueueReader, QueueSize, QueueWriter, SimpleQueue,
};
pub use stack::Stack;
