//! Ordered containers used by the navigators.
//!
//! A ratio-keyed search tree for sorted traversal, a max-heap for repeated
//! best-first extraction, and a stable merge sort for query batches.

pub mod max_heap;
pub mod merge_sort;
pub mod ratio_index;

pub use max_heap::{HeapError, MaxHeap};
pub use merge_sort::merge_sort_by_key;
pub use ratio_index::{InOrder, OrderedIndex};
