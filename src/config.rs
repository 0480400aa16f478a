//! Construction-time heap configuration
//!
//! A heap has exactly one option, its polarity, and it is fixed for the
//! lifetime of the heap.

use crate::traits::Compare;

/// Whether the most- or least-preferred element sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The root is the element the policy prefers over all others
    Max,
    /// The root is the element every other element is preferred over
    Min,
}

impl Polarity {
    /// Applies the polarity to a policy: `compare(a, b)` for [`Polarity::Max`],
    /// `compare(b, a)` for [`Polarity::Min`]
    #[inline]
    pub fn preferred<T: ?Sized, C: Compare<T>>(self, compare: &C, a: &T, b: &T) -> bool {
        match self {
            Polarity::Max => compare.compare(a, b),
            Polarity::Min => compare.compare(b, a),
        }
    }
}

/// Options recognised at construction
///
/// The default is a max-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapConfig {
    /// `true` for a max-heap, `false` for a min-heap
    pub is_max: bool,
}

impl HeapConfig {
    /// Max-heap configuration
    pub const fn max() -> Self {
        Self { is_max: true }
    }

    /// Min-heap configuration
    pub const fn min() -> Self {
        Self { is_max: false }
    }

    /// The polarity selected by `is_max`
    pub fn polarity(&self) -> Polarity {
        if self.is_max {
            Polarity::Max
        } else {
            Polarity::Min
        }
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::max()
    }
}

impl From<Polarity> for HeapConfig {
    fn from(polarity: Polarity) -> Self {
        Self {
            is_max: polarity == Polarity::Max,
        }
    }
}
