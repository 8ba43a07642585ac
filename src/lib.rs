//! Last-in-first-out stacks
//!
//! `stack::Stack<T>` is the abstract data type every stack exposes and
//! `stack::ArrayStack<T>` is its array-backed implementation. Popping or
//! peeking an empty stack yields an `error::EmptyStackError`.
//!
//! ```
//! use lifo::stack::{ArrayStack, Stack};
//!
//! let mut stack = ArrayStack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.iter().collect::<Vec<_>>(), vec![&2, &1]);
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.pop().is_err());
//! ```

pub mod error;
pub mod stack;

pub use error::EmptyStackError;
pub use stack::{ArrayStack, Stack};


///////////////////////////////////////////////////////////////////////////////
//// Utilities
///////////////////////////////////////////////////////////////////////////////
