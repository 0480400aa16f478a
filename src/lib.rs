//! Policy-Ordered Binary Heaps for Rust
//!
//! This crate provides an array-backed binary heap whose ordering is supplied
//! by the caller as a comparison policy, with max-heap or min-heap polarity
//! chosen at construction.
//!
//! # Features
//!
//! - **Pluggable ordering**: any `Fn(&T, &T) -> bool` or [`Compare`] impl
//! - **Max or min**: one [`HeapConfig`] flag flips the polarity, the policy stays the same
//! - **Extraction by position**: [`BinaryHeap::extract_at`] removes any element, not just the root
//! - **Non-destructive sort**: [`BinaryHeap::sort`] returns extraction order without touching the heap
//! - **Fail-soft insert**: [`BinaryHeap::insert`] reports internal faults as `false` instead of erroring
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::{BinaryHeap, Greater, HeapConfig, HeapError};
//!
//! let mut heap = BinaryHeap::new([45, 78, 12, 1, 45, 69], HeapConfig::max(), Greater);
//! assert_eq!(heap.top(), Ok(&78));
//! assert_eq!(heap.extract_top(), Ok(78));
//! assert!(heap.insert(85));
//! assert_eq!(heap.len(), 6);
//! assert_eq!(heap.extract_at(10), Err(HeapError::InvalidIndex { index: 10, len: 6 }));
//! ```

pub mod binary;
pub mod config;
pub mod index;
mod sift;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use config::{HeapConfig, Polarity};
pub use traits::{Compare, Greater, HeapError};
