//! queues-core-rs
//!
//! A small library of four container abstractions sharing a common
//! offer/poll/peek contract: a FIFO queue, a LIFO stack, a priority queue
//! ordered by an injected comparator, and a circular queue with a wrapping
//! traversal cursor.
//!
//! Each container is an independent value type owning its elements; exclusive
//! mutable access is enforced through `&mut self` receivers rather than any
//! internal locking. Absence is expressed as `Option`, never as an error.
//!
//! # Example Usage
//! ```
//! use queues_core_rs::collections::{
//!   CircularQueue, PriorityQueue, QueueReader, QueueWriter, SimpleQueue, Stack,
//! };
//!
//! // A FIFO queue.
//! let mut queue = SimpleQueue::new();
//! queue.offer_mut("first");
//! queue.offer_mut("second");
//! assert_eq!(queue.poll_mut(), Some("first"));
//!
//! // A LIFO stack.
//! let mut stack = Stack::new();
//! stack.offer_mut("first");
//! stack.offer_mut("second");
//! assert_eq!(stack.poll_mut(), Some("second"));
//!
//! // A priority queue; poll_mut takes the maximum element.
//! let mut priority = PriorityQueue::with_comparator(|a: &i32, b: &i32| a.cmp(b));
//! priority.offer_mut(2);
//! priority.offer_mut(4);
//! priority.offer_mut(1);
//! assert_eq!(priority.peek(), Some(&1));
//! assert_eq!(priority.poll_mut(), Some(4));
//!
//! // A circular queue; next() wraps past the last index.
//! let mut ring = CircularQueue::new();
//! ring.offer_mut(20);
//! ring.offer_mut(40);
//! assert_eq!(ring.next().copied(), Some(20));
//! assert_eq!(ring.next().copied(), Some(40));
//! assert_eq!(ring.next().copied(), Some(20));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::disallowed_types))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Container collections sharing the offer/poll/peek contract.
#[cfg(feature = "alloc")]
pub mod collections;
