use std::fmt;
use std::iter::{FromIterator, FusedIterator, Rev};
use std::slice;
use std::vec;
use log::{debug, trace};
use crate::error::{EmptyStackError, Result, StackOp};
use super::*;

/// A simple array-based `Stack<T>`. Uses Rust's `Vec<T>`, whose last slot is
/// the top of the stack.
///
/// Two stacks are equal when they hold equal elements in the same
/// bottom-to-top positions. A stack is mutable, so it deliberately has no
/// `Hash` implementation and cannot key a hash map:
///
/// ```compile_fail
/// use std::collections::HashSet;
/// use lifo::stack::{ArrayStack, Stack};
///
/// let mut set = HashSet::new();
/// set.insert(ArrayStack::<i32>::new());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
  elems: Vec<T>,
}

impl<T> ArrayStack<T> {
  /// Creates an empty stack with room for `capacity` elements before the
  /// backing array has to grow.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      elems: Vec::with_capacity(capacity),
    }
  }

  /// Creates a stack from an ordered sequence. The sequence is collected
  /// into a buffer owned by the stack; its last element becomes the top.
  ///
  /// ```
  /// use lifo::stack::{ArrayStack, Stack};
  ///
  /// let stack = ArrayStack::from_seq(vec![1, 2, 3]);
  /// assert_eq!(stack.peek(), Ok(&3));
  /// assert_eq!(stack.to_string(), "ArrayStack([1, 2, 3])");
  /// ```
  pub fn from_seq<I>(seq: I) -> Self
  where I: IntoIterator<Item = T> {
    let elems: Vec<T> = seq.into_iter().collect();
    trace!("array stack seeded with {} elements", elems.len());

    Self {
      elems: elems,
    }
  }

  /// The backing array, bottom to top.
  pub fn as_slice(&self) -> &[T] {
    &self.elems
  }

  /// Consumes the stack, returning the backing array bottom to top.
  pub fn into_vec(self) -> Vec<T> {
    self.elems
  }
}

impl<T> Stack<T> for ArrayStack<T> {
  type Iter<'a> = Iter<'a, T> where T: 'a;

  fn new() -> Self {
    Self {
      elems: Vec::new(),
    }
  }

  fn push(&mut self, elem: T) {
    self.elems.push(elem)
  }

  fn pop(&mut self) -> Result<T> {
    self.elems.pop().ok_or_else(|| {
      debug!("pop on empty array stack");
      EmptyStackError::new(StackOp::Pop)
    })
  }

  fn peek(&self) -> Result<&T> {
    self.elems.last().ok_or_else(|| {
      debug!("peek on empty array stack");
      EmptyStackError::new(StackOp::Peek)
    })
  }

  fn clear(&mut self) {
    trace!("clearing array stack of {} elements", self.elems.len());
    self.elems.clear()
  }

  fn len(&self) -> usize {
    self.elems.len()
  }

  fn iter(&self) -> Self::Iter<'_> {
    Iter {
      inner: self.elems.iter().rev(),
    }
  }
}

impl<T> Default for ArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> FromIterator<T> for ArrayStack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_seq(iter)
  }
}

impl<T> From<Vec<T>> for ArrayStack<T> {
  fn from(elems: Vec<T>) -> Self {
    Self::from_seq(elems)
  }
}

impl<'a, T: Clone> From<&'a [T]> for ArrayStack<T> {
  fn from(elems: &'a [T]) -> Self {
    Self::from_seq(elems.iter().cloned())
  }
}

impl<T> Extend<T> for ArrayStack<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for elem in iter {
      self.push(elem);
    }
  }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "ArrayStack([")?;
    for (i, elem) in self.elems.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}", elem)?;
    }
    write!(f, "])")
  }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "ArrayStack([")?;
    for (i, elem) in self.elems.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{:?}", elem)?;
    }
    write!(f, "])")
  }
}


///////////////////////////////////////////////////////////////////////////////
//// Iterators
///////////////////////////////////////////////////////////////////////////////

/// Borrowing top-to-bottom iterator over an `ArrayStack<T>`.
pub struct Iter<'a, T> {
  inner: Rev<slice::Iter<'a, T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  fn next_back(&mut self) -> Option<&'a T> {
    self.inner.next_back()
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Consuming top-to-bottom iterator over an `ArrayStack<T>`.
pub struct IntoIter<T> {
  inner: Rev<vec::IntoIter<T>>,
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
  fn next_back(&mut self) -> Option<T> {
    self.inner.next_back()
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<T> IntoIterator for ArrayStack<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> IntoIter<T> {
    IntoIter {
      inner: self.elems.into_iter().rev(),
    }
  }
}
