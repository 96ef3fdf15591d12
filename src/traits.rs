//! Common traits for max-heap data structures
//!
//! This module provides the error type shared by every heap operation and the
//! [`MaxHeap`] trait, the seam through which tests and benchmarks drive a heap
//! without caring about its arity.
//!
//! [`MaxHeap`] is implemented for [`PowerOfTwoHeap`](crate::power_of_two::PowerOfTwoHeap)
//! and for the standard library's [`BinaryHeap`], which makes the latter usable
//! as a reference oracle.

use std::collections::BinaryHeap;

use thiserror::Error;

use crate::power_of_two::MAX_BRANCHING_EXPONENT;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The branching exponent supplied at construction is out of range
    #[error(
        "branching exponent {branching_exponent} is out of range: expected 0..={max}",
        max = MAX_BRANCHING_EXPONENT
    )]
    InvalidArgument { branching_exponent: i32 },
    /// `pop_max` was called on a heap with no elements
    #[error("cannot pop from an empty heap")]
    EmptyHeap,
}

/// Base trait for max-heap/priority queue data structures
///
/// Values are their own priorities: the greatest value according to `Ord`
/// is always extracted first.
///
/// # Example
///
/// ```rust
/// use power_of_two_heap::{MaxHeap, PowerOfTwoHeap};
///
/// fn drain<H: MaxHeap<i64>>(heap: &mut H) -> Vec<i64> {
///     let mut out = Vec::new();
///     while let Ok(value) = heap.pop_max() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut heap = PowerOfTwoHeap::new(2).unwrap();
/// heap.insert(4);
/// heap.insert(9);
/// heap.insert(1);
/// assert_eq!(drain(&mut heap), vec![9, 4, 1]);
/// ```
pub trait MaxHeap<T: Ord> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n) for the standard binary heap, O(log_d n) for a d-ary heap.
    fn insert(&mut self, value: T);

    /// Returns the maximum value without removing it
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the maximum value
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to remove. The heap
    /// is left untouched in that case.
    fn pop_max(&mut self) -> Result<T, HeapError>;
}

impl<T: Ord> MaxHeap<T> for BinaryHeap<T> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        self.push(value);
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop_max(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::EmptyHeap)
    }
}
