//! Power-of-two d-ary max-heap
//!
//! A complete d-ary max-heap stored in a dense `Vec`, where the branching
//! factor d = 2^k is fixed when the heap is built. Node `i` has its children
//! at `d*i + 1 ..= d*i + d` and its parent at `(i - 1) / d`.
//!
//! Wider heaps are shallower, so sift-up touches fewer levels, while sift-down
//! has to scan more children per level. With k = 0 every node has exactly one
//! child and the storage degenerates into a list kept in descending order.
//!
//! # Time Complexity
//!
//! | Operation | Complexity        |
//! |-----------|-------------------|
//! | `insert`  | O(log_d n)        |
//! | `pop_max` | O(d · log_d n)    |
//! | `peek`    | O(1)              |
//! | `len`     | O(1)              |
//! | `snapshot`| O(n)              |
//!
//! # Example
//!
//! ```rust
//! use power_of_two_heap::PowerOfTwoHeap;
//!
//! // 2^2 = 4 children per node
//! let mut heap = PowerOfTwoHeap::new(2).unwrap();
//! for value in [10, 20, 15, 30, 25, 5] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.num_children(), 4);
//! assert_eq!(heap.pop_max(), Ok(30));
//! assert_eq!(heap.pop_max(), Ok(25));
//! assert_eq!(heap.len(), 4);
//! ```

use crate::traits::{HeapError, MaxHeap};

/// Largest accepted branching exponent, i.e. at most 1024 children per node
pub const MAX_BRANCHING_EXPONENT: i32 = 10;

/// A d-ary max-heap with d = 2^branching_exponent
///
/// Values are their own priorities. The heap owns its storage exclusively;
/// [`snapshot`](Self::snapshot) hands out copies, never the live buffer.
#[derive(Debug, Clone)]
pub struct PowerOfTwoHeap<T: Ord = i64> {
    /// Heap-ordered elements: `data[parent(i)] >= data[i]` for all `i > 0`
    data: Vec<T>,
    /// log2 of `num_children`
    branching_exponent: u32,
    num_children: usize,
}

impl<T: Ord> PowerOfTwoHeap<T> {
    /// Creates an empty heap whose nodes have `2^branching_exponent` children
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] unless
    /// `0 <= branching_exponent <= MAX_BRANCHING_EXPONENT`.
    pub fn new(branching_exponent: i32) -> Result<Self, HeapError> {
        Self::with_capacity(branching_exponent, 0)
    }

    /// Creates an empty heap with room for at least `capacity` elements
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn with_capacity(branching_exponent: i32, capacity: usize) -> Result<Self, HeapError> {
        if !(0..=MAX_BRANCHING_EXPONENT).contains(&branching_exponent) {
            return Err(HeapError::InvalidArgument { branching_exponent });
        }
        Ok(Self::from_exponent(branching_exponent as u32, capacity))
    }

    /// Builds the heap from an exponent already known to be in range
    fn from_exponent(branching_exponent: u32, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            branching_exponent,
            num_children: 1 << branching_exponent,
        }
    }

    /// Number of children per node
    pub fn num_children(&self) -> usize {
        self.num_children
    }

    pub fn branching_exponent(&self) -> u32 {
        self.branching_exponent
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts a value and restores heap order by sifting it up
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the maximum
    ///
    /// The last element takes the root's place and is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements; nothing
    /// is modified in that case.
    pub fn pop_max(&mut self) -> Result<T, HeapError> {
        let last = self.data.pop().ok_or(HeapError::EmptyHeap)?;
        let Some(root) = self.data.first_mut() else {
            return Ok(last);
        };

        let max = std::mem::replace(root, last);
        self.sift_down(0);
        Ok(max)
    }

    /// Removes every element, keeping the arity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its storage in heap-array order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Index of the parent of `index`; `index` must be non-zero
    #[inline]
    fn parent(&self, index: usize) -> usize {
        (index - 1) >> self.branching_exponent
    }

    /// Move element at index up while it is strictly greater than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self.data[index] > self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down, swapping with the largest child
    ///
    /// Ties go to the lowest index: the node itself beats an equal child and
    /// an earlier child beats a later one.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let first_child = match index
                .checked_mul(self.num_children)
                .and_then(|base| base.checked_add(1))
            {
                Some(child) if child < len => child,
                _ => break,
            };
            let end = first_child.saturating_add(self.num_children).min(len);

            let mut largest = index;
            for child in first_child..end {
                if self.data[child] > self.data[largest] {
                    largest = child;
                }
            }

            if largest == index {
                break;
            }
            self.data.swap(index, largest);
            index = largest;
        }
    }
}

impl<T: Ord + Clone> PowerOfTwoHeap<T> {
    /// Returns a copy of the storage in heap-array order (not sorted)
    ///
    /// Mutating the returned vector does not affect the heap.
    pub fn snapshot(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Ord> MaxHeap<T> for PowerOfTwoHeap<T> {
    fn is_empty(&self) -> bool {
        PowerOfTwoHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        PowerOfTwoHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        PowerOfTwoHeap::insert(self, value)
    }

    fn peek(&self) -> Option<&T> {
        PowerOfTwoHeap::peek(self)
    }

    fn pop_max(&mut self) -> Result<T, HeapError> {
        PowerOfTwoHeap::pop_max(self)
    }
}

impl<T: Ord> Default for PowerOfTwoHeap<T> {
    /// A binary heap (two children per node)
    fn default() -> Self {
        Self::from_exponent(1, 0)
    }
}

impl<T: Ord> Extend<T> for PowerOfTwoHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}
