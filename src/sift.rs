//! Invariant-restoring operations over a borrowed element vector
//!
//! [`Sifter`] bundles the three things every repair step needs (the elements,
//! the policy, and the polarity) so that both the heap itself and the working
//! copy drained by [`BinaryHeap::sort`](crate::binary::BinaryHeap::sort) share
//! one implementation.
//!
//! Every index access goes through `get`/`check_index`, so a bookkeeping fault
//! surfaces as `HeapError::InvalidIndex` instead of a panic.

use crate::config::Polarity;
use crate::index::{check_index, child_indices, parent_index};
use crate::traits::{Compare, HeapError};

pub(crate) struct Sifter<'a, T, C> {
    elements: &'a mut Vec<T>,
    compare: &'a C,
    polarity: Polarity,
}

impl<'a, T, C: Compare<T>> Sifter<'a, T, C> {
    pub(crate) fn new(elements: &'a mut Vec<T>, compare: &'a C, polarity: Polarity) -> Self {
        Self {
            elements,
            compare,
            polarity,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `item` and sifts it up
    pub(crate) fn insert(&mut self, item: T) -> Result<(), HeapError> {
        self.elements.push(item);
        self.sift_up(self.elements.len() - 1)
    }

    /// Removes and returns the element at `index`
    ///
    /// The element is first walked down to a leaf, then swapped with the last
    /// slot and truncated; whatever was moved into its slot is sifted up.
    pub(crate) fn extract_at(&mut self, index: usize) -> Result<T, HeapError> {
        check_index(index, self.elements.len())?;

        let leaf = self.sift_down(index)?;
        // swap_remove skips the swap when `leaf` is already the last slot
        let value = self.elements.swap_remove(leaf);

        if leaf < self.elements.len() {
            self.sift_up(leaf)?;
        }

        Ok(value)
    }

    /// Moves the element at `index` toward the root while it is preferred
    /// over its parent
    pub(crate) fn sift_up(&mut self, mut index: usize) -> Result<(), HeapError> {
        check_index(index, self.elements.len())?;

        while index > 0 {
            let parent = parent_index(index);
            if !self.preferred(index, parent)? {
                break;
            }
            self.swap(index, parent)?;
            index = parent;
        }

        Ok(())
    }

    /// Walks the element at `index` down to a leaf, always swapping with the
    /// best child, and returns the leaf position it ends at
    ///
    /// Each step promotes the best child into the parent slot, so every
    /// element other than the one being walked keeps the heap property.
    pub(crate) fn sift_down(&mut self, mut index: usize) -> Result<usize, HeapError> {
        while let Some(child) = self.best_child_index(index)? {
            self.swap(index, child)?;
            index = child;
        }

        Ok(index)
    }

    /// Returns the child of `index` that should sit above its sibling, or
    /// `None` if `index` is a leaf
    ///
    /// Ties go to the right child.
    pub(crate) fn best_child_index(&self, index: usize) -> Result<Option<usize>, HeapError> {
        match child_indices(index, self.elements.len())? {
            (None, None) => Ok(None),
            (Some(only), None) | (None, Some(only)) => Ok(Some(only)),
            (Some(left), Some(right)) => {
                if self.preferred(left, right)? {
                    Ok(Some(left))
                } else {
                    Ok(Some(right))
                }
            }
        }
    }

    /// Polarity-adjusted `compare(elements[a], elements[b])`
    fn preferred(&self, a: usize, b: usize) -> Result<bool, HeapError> {
        let x = self.get(a)?;
        let y = self.get(b)?;
        Ok(self.polarity.preferred(self.compare, x, y))
    }

    fn get(&self, index: usize) -> Result<&T, HeapError> {
        self.elements.get(index).ok_or(HeapError::InvalidIndex {
            index,
            len: self.elements.len(),
        })
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), HeapError> {
        let len = self.elements.len();
        check_index(a, len)?;
        check_index(b, len)?;
        self.elements.swap(a, b);
        Ok(())
    }
}
