//! Policy-ordered binary heap
//!
//! An array-backed binary heap whose ordering comes from an injected
//! [`Compare`] policy and a max/min [`Polarity`]. Besides the usual
//! insert/peek/extract-root, it can remove an element at an arbitrary
//! position and produce a sorted copy of its contents without disturbing
//! itself.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `top`         | O(1)       |
//! | `extract_top` | O(log n)   |
//! | `extract_at`  | O(log n)   |
//! | `sort`        | O(n log n) |
//! | `new`         | O(n log n) |
//!
//! Construction inserts elements one at a time rather than heapifying
//! bottom-up, so the layout returned by [`BinaryHeap::as_slice`] right after
//! construction is the one sequential insertion produces.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::{BinaryHeap, Greater, HeapConfig};
//!
//! let heap = BinaryHeap::new([45, 78, 12, 1, 45, 69], HeapConfig::max(), Greater);
//! assert_eq!(heap.sort(), vec![78, 69, 45, 45, 12, 1]);
//!
//! let heap = BinaryHeap::new([45, 78, 12, 1, 45, 69], HeapConfig::min(), Greater);
//! assert_eq!(heap.sort(), vec![1, 12, 45, 45, 69, 78]);
//! ```

use std::fmt;

use log::debug;

use crate::config::{HeapConfig, Polarity};
use crate::sift::Sifter;
use crate::traits::{Compare, Greater, HeapError};

/// A binary heap ordered by a [`Compare`] policy
///
/// With [`HeapConfig::max`] the root is the element the policy prefers over
/// every other; with [`HeapConfig::min`] it is the element every other is
/// preferred over. The policy is always written "greater-than" style.
#[derive(Clone)]
pub struct BinaryHeap<T, C = Greater> {
    /// Complete binary tree in breadth-first order
    elements: Vec<T>,
    config: HeapConfig,
    compare: C,
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Builds a heap by inserting each element of `initial` in order
    pub fn new<I>(initial: I, config: HeapConfig, compare: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self::with_config(config, compare);
        heap.extend(initial);
        heap
    }

    /// Creates an empty heap
    pub fn with_config(config: HeapConfig, compare: C) -> Self {
        Self {
            elements: Vec::new(),
            config,
            compare,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The configuration fixed at construction
    pub fn config(&self) -> HeapConfig {
        self.config
    }

    /// Shorthand for `self.config().polarity()`
    pub fn polarity(&self) -> Polarity {
        self.config.polarity()
    }

    /// Inserts an element
    ///
    /// Returns `false` only if restoring the heap property hit an internal
    /// index fault. The fault is logged and swallowed; the element stays in
    /// the heap either way.
    pub fn insert(&mut self, item: T) -> bool {
        let result = self.sifter().insert(item);
        match result {
            Ok(()) => true,
            // Unreachable while the sifter's index bookkeeping is correct
            Err(err) => {
                debug!("insert: sift-up failed at length {}: {}", self.len(), err);
                false
            }
        }
    }

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// `HeapError::EmptyHeap` if there are no elements.
    pub fn top(&self) -> Result<&T, HeapError> {
        self.elements.first().ok_or(HeapError::EmptyHeap)
    }

    /// Returns the root element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Removes and returns the root element
    ///
    /// # Errors
    /// `HeapError::EmptyHeap` if there are no elements.
    pub fn extract_top(&mut self) -> Result<T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        self.extract_at(0)
    }

    /// Removes and returns the element at position `index` of the internal
    /// layout (see [`as_slice`](Self::as_slice))
    ///
    /// The element is walked down to a leaf along the path of preferred
    /// children before it is removed, so elements on that path each move up
    /// one level even when `index` is not the root.
    ///
    /// # Errors
    /// `HeapError::InvalidIndex` if `index >= self.len()`.
    pub fn extract_at(&mut self, index: usize) -> Result<T, HeapError> {
        self.sifter().extract_at(index)
    }

    /// Returns the contents in extraction order: most preferred first for a
    /// max-heap, least preferred first for a min-heap
    ///
    /// Works on a copy, so the heap is unchanged and repeated calls return
    /// the same result. If draining the copy faults, the fault is logged and
    /// an empty `Vec` is returned instead of a partial result.
    pub fn sort(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut working = self.elements.clone();
        let mut sifter = Sifter::new(&mut working, &self.compare, self.polarity());
        let mut sorted = Vec::with_capacity(self.len());

        while !sifter.is_empty() {
            match sifter.extract_at(0) {
                Ok(value) => sorted.push(value),
                // Unreachable while the sifter's index bookkeeping is correct
                Err(err) => {
                    debug!(
                        "sort: drain failed after {} of {} elements: {}",
                        sorted.len(),
                        self.len(),
                        err
                    );
                    return Vec::new();
                }
            }
        }

        sorted
    }

    /// Consumes the heap, returning its contents in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.extract_top() {
            sorted.push(value);
        }
        sorted
    }

    fn sifter(&mut self) -> Sifter<'_, T, C> {
        Sifter::new(&mut self.elements, &self.compare, self.config.polarity())
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// The elements in internal heap order (not sorted order)
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Snapshot of the elements in internal heap order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Consumes the heap, returning its elements in internal heap order
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("elements", &self.elements)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
