//! Queue variants and the traits they share.

mod priority;
mod queue_size;
mod ring;
mod simple;
mod traits;

pub use priority::{Comparator, HasPriority, PriorityQueue};
pub use queue_size::QueueSize;
pub use ring::CircularQueue;
pub use simple::SimpleQueue;
pub use traits::{QueueBase, QueueReader, QueueWriter};
