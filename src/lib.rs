//! Power-of-Two Heaps for Rust
//!
//! This crate provides a d-ary max-heap whose branching factor is a power of
//! two chosen at construction time, from a unary heap (1 child per node) up to
//! 1024 children per node.
//!
//! # Features
//!
//! - **PowerOfTwoHeap**: O(log_d n) insert; O(d · log_d n) pop-max; O(1) peek
//! - **MaxHeap trait**: a common interface, also implemented for
//!   [`std::collections::BinaryHeap`] so the two can be compared side by side
//! - Explicit errors: invalid arity and popping an empty heap are reported as
//!   [`HeapError`] values rather than panics
//!
//! # Example
//!
//! ```rust
//! use power_of_two_heap::{HeapError, PowerOfTwoHeap};
//!
//! let mut heap = PowerOfTwoHeap::new(1).unwrap();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&9));
//! assert_eq!(heap.pop_max(), Ok(9));
//! assert_eq!(heap.pop_max(), Ok(8));
//! assert_eq!(heap.len(), 4);
//!
//! assert!(matches!(
//!     PowerOfTwoHeap::<i64>::new(11),
//!     Err(HeapError::InvalidArgument { branching_exponent: 11 })
//! ));
//! ```

pub mod power_of_two;
pub mod traits;

// Re-export the main types for convenience
pub use power_of_two::{PowerOfTwoHeap, MAX_BRANCHING_EXPONENT};
pub use traits::{HeapError, MaxHeap};
