use super::Stack;
use crate::collections::{QueueBase, QueueReader, QueueSize, QueueWriter};

#[test]
fn poll_returns_elements_in_lifo_order() {
  let mut stack = Stack::new();
  stack.offer_mut("a");
  stack.offer_mut("b");
  stack.offer_mut("c");
  stack.offer_mut("d");

  assert_eq!(stack.poll_mut(), Some("d"));
  assert_eq!(stack.poll_mut(), Some("c"));
  assert_eq!(stack.poll_mut(), Some("b"));
  assert_eq!(stack.poll_mut(), Some("a"));
  assert_eq!(stack.poll_mut(), None);
}

#[test]
fn peek_borrows_top_without_removing() {
  let mut stack = Stack::new();
  assert_eq!(stack.peek(), None);

  stack.offer_mut(10);
  stack.offer_mut(20);
  assert_eq!(stack.peek(), Some(&20));
  assert_eq!(stack.len(), QueueSize::limited(2));
}

#[test]
fn len_tracks_offers_and_polls() {
  let mut stack = Stack::new();
  assert!(stack.is_empty());
  assert!(stack.capacity().is_limitless());

  stack.offer_mut(1);
  stack.offer_mut(2);
  assert_eq!(stack.len(), QueueSize::limited(2));

  let _ = stack.poll_mut();
  assert_eq!(stack.len(), QueueSize::limited(1));
}

#[test]
fn offer_opt_none_is_a_silent_noop() {
  let mut stack = Stack::new();
  stack.offer_opt_mut(None);
  assert!(stack.is_empty());

  stack.offer_opt_mut(Some(5));
  assert_eq!(stack.peek(), Some(&5));
}

#[test]
fn clean_up_empties_and_leaves_stack_usable() {
  let mut stack = Stack::new();
  stack.offer_mut(1);
  stack.offer_mut(2);

  stack.clean_up_mut();
  assert_eq!(stack.len(), QueueSize::limited(0));
  assert_eq!(stack.poll_mut(), None);
  assert_eq!(stack.peek(), None);

  stack.offer_mut(3);
  assert_eq!(stack.poll_mut(), Some(3));
}

#[test]
fn clean_up_on_empty_stack_is_a_noop() {
  let mut stack: Stack<i32> = Stack::new();
  stack.clean_up_mut();
  stack.clean_up_mut();
  assert_eq!(stack.len(), QueueSize::limited(0));
}
