//! Array-backed binary max-heap.
//!
//! Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.

/// Errors raised by heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    #[error("cannot extract from an empty heap")]
    Empty,
}

/// A max-heap that always extracts its greatest element first.
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    nodes: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        MaxHeap { nodes: Vec::new() }
    }

    /// Builds a heap from an arbitrary sequence in O(n).
    pub fn heapify<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = MaxHeap {
            nodes: items.into_iter().collect(),
        };
        for i in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the greatest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Adds an element, sifting it up. O(1) when it already belongs at the bottom.
    pub fn insert(&mut self, item: T) {
        self.nodes.push(item);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the greatest element.
    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        if self.nodes.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let top = self.nodes.pop().ok_or(HeapError::Empty)?;
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Consumes the heap, returning elements in descending order.
    pub fn into_sorted_desc(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        while let Ok(item) = self.extract_max() {
            out.push(item);
        }
        out
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index] > self.nodes[parent] {
                self.nodes.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.nodes[left] > self.nodes[largest] {
                largest = left;
            }
            if right < len && self.nodes[right] > self.nodes[largest] {
                largest = right;
            }

            if largest == index {
                break;
            }

            self.nodes.swap(index, largest);
            index = largest;
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
