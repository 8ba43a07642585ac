//! Stack errors
//!
//! The only failure a stack can report is an attempt to read the top of an
//! empty stack. `EmptyStackError` records which operation tried it.

/// The stack operation that required a top element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackOp {
  Pop,
  Peek,
}

/// Returned by `pop` and `peek` when the stack holds no elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyStackError {
  op: StackOp,
}

impl EmptyStackError {
  pub fn new(op: StackOp) -> Self {
    Self {
      op: op,
    }
  }

  /// The operation that failed.
  pub fn op(&self) -> StackOp {
    self.op
  }
}

impl std::error::Error for EmptyStackError {}
impl std::fmt::Display for EmptyStackError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self.op {
      StackOp::Pop => write!(f, "pop from an empty stack"),
      StackOp::Peek => write!(f, "peek from an empty stack"),
    }
  }
}

pub type Result<T> = std::result::Result<T, EmptyStackError>;
