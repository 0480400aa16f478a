//! Error type and comparison policy for the heap
//!
//! The heap does not know how its elements are ordered. Instead it consumes a
//! [`Compare`] policy that answers a single question: "should `a` be strictly
//! preferred over `b`?". The policy is always written "greater-than" style;
//! whether the heap is a max-heap or a min-heap is decided separately by the
//! [`Polarity`](crate::config::Polarity) it is configured with.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap holds no elements
    #[error("heap is empty")]
    EmptyHeap,
    /// The position is outside the populated range `[0, len)`
    #[error("index {index} is out of range for heap of length {len}")]
    InvalidIndex {
        /// The requested position
        index: usize,
        /// Number of elements held at the time of the request
        len: usize,
    },
}

/// Comparison policy consumed by [`BinaryHeap`](crate::binary::BinaryHeap)
///
/// `compare(a, b)` must return `true` iff `a` is strictly preferred over `b`.
/// The relation should be irreflexive and give the same answer for the same
/// pair every time; the heap does not check this, and an inconsistent policy
/// only produces a heap whose layout is meaningless, never memory unsafety.
///
/// Any `Fn(&T, &T) -> bool` is a policy, so closures can be passed directly:
///
/// ```rust
/// use rust_binary_heaps::{BinaryHeap, HeapConfig};
///
/// // Longest string first
/// let mut heap = BinaryHeap::new(
///     ["ab", "abcd", "a"],
///     HeapConfig::max(),
///     |a: &&str, b: &&str| a.len() > b.len(),
/// );
/// assert_eq!(heap.extract_top(), Ok("abcd"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` should be strictly preferred over `b`
    fn compare(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Natural ordering policy: `a` is preferred over `b` when `a > b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    fn compare(&self, a: &T, b: &T) -> bool {
        a > b
    }
}
