//! Stack implementations
//!
//! This module provides the `Stack<T>` abstract data type and one sequential
//! implementation of it, the array-based `ArrayStack`. The top of an
//! `ArrayStack` is the last slot of its backing `Vec<T>`, so pushing 1, 2, 3
//! stores `[1, 2, 3]` with 3 on top.
//!
//! Operations that need a top element (`pop` and `peek`) return an
//! `EmptyStackError` when the stack is empty instead of a sentinel.

mod array;

pub use self::array::{ArrayStack, IntoIter, Iter};

use crate::error::Result;

/// The `Stack<T>` abstract data type.
pub trait Stack<T> {
  /// Top-to-bottom iterator returned by `iter`.
  type Iter<'a>: Iterator<Item = &'a T>
  where Self: 'a, T: 'a;

  /// Creates a new, empty `Stack<T>`.
  fn new() -> Self;

  /// Pushes an element onto the stack.
  fn push(&mut self, elem: T);

  /// Removes and returns the top element.
  fn pop(&mut self) -> Result<T>;

  /// Returns the top element without removing it.
  fn peek(&self) -> Result<&T>;

  /// Removes every element.
  fn clear(&mut self);

  /// Returns the number of elements in the stack.
  fn len(&self) -> usize;

  /// Returns the number of elements in the stack. Always equal to `len`.
  fn size(&self) -> usize {
    self.len()
  }

  /// Predicate that tests if the stack is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Truthiness of the stack: true iff it holds at least one element.
  fn as_bool(&self) -> bool {
    !self.is_empty()
  }

  /// Iterates from the top of the stack down to the bottom. Every call
  /// starts a fresh traversal.
  fn iter(&self) -> Self::Iter<'_>;
}
