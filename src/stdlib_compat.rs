//! Standard library compatibility layer
//!
//! Conveniences for the common case of a heap over naturally ordered
//! elements, plus the collection traits that let a [`BinaryHeap`] be used like
//! `std::collections::BinaryHeap`.
//!
//! # Differences from `std::collections::BinaryHeap`
//!
//! - **Polarity is a value**: both max- and min-heaps use the same
//!   [`Greater`] policy; no `std::cmp::Reverse` wrapper is needed.
//! - **`PartialOrd` is enough**: floats can be stored directly, as long as
//!   no NaN is inserted.
//! - **Collecting builds by insertion**: `FromIterator` and `Extend` insert
//!   one element at a time, like [`BinaryHeap::new`].
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::BinaryHeap;
//!
//! let heap: BinaryHeap<i32> = [5, 3, 7].into_iter().collect();
//! assert_eq!(heap.peek(), Some(&7)); // max-heap by default
//!
//! let mut low = BinaryHeap::min_heap([2.5, 0.5, 1.5]);
//! assert_eq!(low.extract_top(), Ok(0.5));
//! ```

use crate::binary::BinaryHeap;
use crate::config::HeapConfig;
use crate::traits::{Compare, Greater};

impl<T: PartialOrd> BinaryHeap<T, Greater> {
    /// Builds a max-heap over the natural ordering of `T`
    pub fn max_heap<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self::new(initial, HeapConfig::max(), Greater)
    }

    /// Builds a min-heap over the natural ordering of `T`
    pub fn min_heap<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self::new(initial, HeapConfig::min(), Greater)
    }
}

/// An empty max-heap
impl<T: PartialOrd> Default for BinaryHeap<T, Greater> {
    fn default() -> Self {
        Self::with_config(HeapConfig::default(), Greater)
    }
}

/// Collects into a max-heap
impl<T: PartialOrd> FromIterator<T> for BinaryHeap<T, Greater> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::max_heap(iter)
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
