//! Behavioural tests for BinaryHeap across both polarities
//!
//! These tests drive the public API only and check the edge cases around
//! empty/singleton heaps, extraction by position and the non-destructive sort.

use rust_binary_heaps::index::parent_index;
use rust_binary_heaps::{BinaryHeap, Compare, Greater, HeapConfig, HeapError, Polarity};

const SAMPLE: [i32; 6] = [45, 78, 12, 1, 45, 69];

/// Checks that no child is preferred over its parent
fn assert_heap_property<T, C>(heap: &BinaryHeap<T, C>, compare: &C)
where
    T: std::fmt::Debug,
    C: Compare<T>,
{
    let elements = heap.as_slice();
    let polarity = heap.polarity();
    for i in 1..elements.len() {
        let p = parent_index(i);
        assert!(
            !polarity.preferred(compare, &elements[i], &elements[p]),
            "child {:?} at {} beats parent {:?} at {} in {:?}",
            elements[i],
            i,
            elements[p],
            p,
            elements
        );
    }
}

fn test_empty_heap(config: HeapConfig) {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_config(config, Greater);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.top(), Err(HeapError::EmptyHeap));
    assert_eq!(heap.extract_top(), Err(HeapError::EmptyHeap));
    assert_eq!(
        heap.extract_at(0),
        Err(HeapError::InvalidIndex { index: 0, len: 0 })
    );
    assert_eq!(heap.sort(), Vec::<i32>::new());
    assert!(heap.as_slice().is_empty());
}

fn test_out_of_range(config: HeapConfig) {
    let mut heap = BinaryHeap::new(SAMPLE, config, Greater);
    let len = heap.len();

    assert_eq!(
        heap.extract_at(len),
        Err(HeapError::InvalidIndex { index: len, len })
    );
    assert_eq!(
        heap.extract_at(usize::MAX),
        Err(HeapError::InvalidIndex {
            index: usize::MAX,
            len
        })
    );
    // Failed extraction leaves the heap alone
    assert_eq!(heap.len(), len);
    assert_heap_property(&heap, &Greater);
}

fn test_every_index_extractable(config: HeapConfig) {
    for index in 0..SAMPLE.len() {
        let mut heap = BinaryHeap::new(SAMPLE, config, Greater);
        let before = heap.to_vec();

        let removed = heap.extract_at(index).unwrap();

        assert_eq!(heap.len(), SAMPLE.len() - 1);
        assert_heap_property(&heap, &Greater);

        let mut remaining = heap.to_vec();
        remaining.push(removed);
        remaining.sort();
        let mut expected = before;
        expected.sort();
        assert_eq!(remaining, expected, "extract_at({}) lost an element", index);
    }
}

fn test_drain_to_empty(config: HeapConfig) {
    let mut heap = BinaryHeap::new(SAMPLE, config, Greater);
    let mut drained = Vec::new();
    while !heap.is_empty() {
        drained.push(heap.extract_top().unwrap());
        assert_heap_property(&heap, &Greater);
    }
    assert_eq!(drained, BinaryHeap::new(SAMPLE, config, Greater).sort());
    assert_eq!(heap.extract_top(), Err(HeapError::EmptyHeap));
}

#[test]
fn test_empty_heap_max() {
    test_empty_heap(HeapConfig::max());
}

#[test]
fn test_empty_heap_min() {
    test_empty_heap(HeapConfig::min());
}

#[test]
fn test_out_of_range_max() {
    test_out_of_range(HeapConfig::max());
}

#[test]
fn test_out_of_range_min() {
    test_out_of_range(HeapConfig::min());
}

#[test]
fn test_every_index_extractable_max() {
    test_every_index_extractable(HeapConfig::max());
}

#[test]
fn test_every_index_extractable_min() {
    test_every_index_extractable(HeapConfig::min());
}

#[test]
fn test_drain_to_empty_max() {
    test_drain_to_empty(HeapConfig::max());
}

#[test]
fn test_drain_to_empty_min() {
    test_drain_to_empty(HeapConfig::min());
}

#[test]
fn test_round_trip_sort() {
    let max = BinaryHeap::new(SAMPLE, HeapConfig::max(), Greater);
    assert_eq!(max.sort(), vec![78, 69, 45, 45, 12, 1]);

    let min = BinaryHeap::new(SAMPLE, HeapConfig::min(), Greater);
    assert_eq!(min.sort(), vec![1, 12, 45, 45, 69, 78]);
}

#[test]
fn test_sort_is_repeatable_and_non_destructive() {
    let mut heap = BinaryHeap::new(SAMPLE, HeapConfig::max(), Greater);
    let layout = heap.to_vec();

    assert_eq!(heap.sort(), heap.sort());
    assert_eq!(heap.to_vec(), layout);
    assert_eq!(heap.len(), SAMPLE.len());

    // Heap still behaves normally afterwards
    assert_eq!(heap.extract_top(), Ok(78));
    assert!(heap.insert(100));
    assert_eq!(heap.top(), Ok(&100));
}

#[test]
fn test_construction_layout_is_sequential_insertion() {
    let heap = BinaryHeap::new(SAMPLE, HeapConfig::max(), Greater);
    assert_eq!(heap.as_slice(), &[78, 45, 69, 1, 45, 12]);

    let heap = BinaryHeap::new(SAMPLE, HeapConfig::min(), Greater);
    // 45 | 45 78 | 12 78 45 | 1 12 45 78 | 1 12 45 78 45 | 1 12 45 78 45 69
    assert_eq!(heap.as_slice(), &[1, 12, 45, 78, 45, 69]);
}

#[test]
fn test_extract_at_two_on_max_sample() {
    let mut heap = BinaryHeap::new(SAMPLE, HeapConfig::max(), Greater);
    let removed = heap.extract_at(2).unwrap();

    assert!(SAMPLE.contains(&removed));
    assert_eq!(heap.len(), 5);
    assert_heap_property(&heap, &Greater);
}

#[test]
fn test_extract_last_index() {
    let mut heap = BinaryHeap::new(SAMPLE, HeapConfig::max(), Greater);
    let last = heap.len() - 1;
    let expected = heap.as_slice()[last];
    let prefix = heap.as_slice()[..last].to_vec();

    assert_eq!(heap.extract_at(last), Ok(expected));
    assert_eq!(heap.as_slice(), prefix.as_slice());
}

#[test]
fn test_singleton() {
    for config in [HeapConfig::max(), HeapConfig::min()] {
        let mut heap = BinaryHeap::new([42], config, Greater);
        assert_eq!(heap.top(), Ok(&42));
        assert_eq!(heap.sort(), vec![42]);
        assert_eq!(heap.extract_top(), Ok(42));
        assert!(heap.is_empty());
    }
}

#[test]
fn test_duplicates_keep_identity() {
    // Same key, distinguishable payload
    let by_key = |a: &(i32, u8), b: &(i32, u8)| a.0 > b.0;
    let heap = BinaryHeap::new(
        [(45, 0), (78, 1), (12, 2), (1, 3), (45, 4), (69, 5)],
        HeapConfig::max(),
        by_key,
    );

    let sorted = heap.sort();
    let keys: Vec<i32> = sorted.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![78, 69, 45, 45, 12, 1]);

    let mut tags: Vec<u8> = sorted.iter().map(|(_, t)| *t).collect();
    tags.sort_unstable();
    assert_eq!(tags, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_custom_policy_polarity() {
    // Policy prefers shorter strings; max polarity therefore puts the shortest at the root
    let shorter = |a: &String, b: &String| a.len() < b.len();
    let words = ["heap", "a", "binary", "of"].map(String::from);

    let mut heap = BinaryHeap::new(words.clone(), HeapConfig::max(), shorter);
    assert_eq!(heap.extract_top().as_deref(), Ok("a"));

    let mut heap = BinaryHeap::new(words, HeapConfig::from(Polarity::Min), shorter);
    assert_eq!(heap.extract_top().as_deref(), Ok("binary"));
}

#[test]
fn test_count_tracks_operations() {
    let mut heap = BinaryHeap::min_heap(Vec::<i32>::new());
    for (i, x) in SAMPLE.iter().enumerate() {
        assert!(heap.insert(*x));
        assert_eq!(heap.len(), i + 1);
    }
    for i in (0..SAMPLE.len()).rev() {
        heap.extract_at(i / 2).unwrap();
        assert_eq!(heap.len(), i);
    }
}
