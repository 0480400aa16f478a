//! Index arithmetic for a complete binary tree stored breadth-first
//!
//! | Relation | Index |
//! |----------|-------|
//! | parent   | `(i - 1) / 2` (the root is its own parent) |
//! | left     | `2i + 1` |
//! | right    | `2i + 2` |

use crate::traits::HeapError;

/// Returns the parent position of `index`
///
/// The root is treated as its own parent so upward walks terminate at 0.
#[inline]
pub fn parent_index(index: usize) -> usize {
    index.saturating_sub(1) / 2
}

/// Returns the `(left, right)` child positions of `index` in a heap of `len`
/// elements, each `None` when that slot is unoccupied
///
/// # Errors
/// `HeapError::InvalidIndex` if `index` itself is not occupied.
pub fn child_indices(index: usize, len: usize) -> Result<(Option<usize>, Option<usize>), HeapError> {
    check_index(index, len)?;
    let occupied = |i: usize| (i < len).then_some(i);
    // `index < len <= isize::MAX` for any Vec, so these cannot overflow
    let left = 2 * index + 1;
    Ok((occupied(left), occupied(left + 1)))
}

/// Fails with `InvalidIndex` unless `index` lies in `[0, len)`
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<(), HeapError> {
    if index < len {
        Ok(())
    } else {
        Err(HeapError::InvalidIndex { index, len })
    }
}
