//! Ordered index over floating-point keys.
//!
//! An unbalanced binary search tree stored in a flat node arena. Keys are
//! compared with `f64::total_cmp`, so infinities and NaN still have a fixed
//! place in the order. Equal keys descend to the right, which makes in-order
//! traversal return them in insertion order.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Node<V> {
    key: f64,
    value: V,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary search tree keyed by `f64`, supporting insertion and ascending
/// traversal.
///
/// Insertion is O(log n) on average and O(n) when keys arrive already sorted.
/// There is no removal; rebuild with [`OrderedIndex::clear`] instead.
#[derive(Debug, Clone)]
pub struct OrderedIndex<V> {
    nodes: Vec<Node<V>>,
    root: Option<usize>,
}

impl<V> OrderedIndex<V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        OrderedIndex {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Creates an empty index with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedIndex {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Inserts `value` under `key`, after any entries with an equal key.
    pub fn insert(&mut self, key: f64, value: V) {
        let new = self.nodes.len();
        self.nodes.push(Node {
            key,
            value,
            left: None,
            right: None,
        });

        let Some(mut cur) = self.root else {
            self.root = Some(new);
            return;
        };
        loop {
            let node = &mut self.nodes[cur];
            let slot = match key.total_cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            match *slot {
                Some(next) => cur = next,
                None => {
                    *slot = Some(new);
                    return;
                }
            }
        }
    }

    /// Returns a lazy ascending traversal. Each call starts from the smallest key.
    pub fn in_order(&self) -> InOrder<'_, V> {
        InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
            pending: self.root,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Length of the longest root-to-leaf path. Zero for an empty index.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((i, d)) = stack.pop() {
            deepest = deepest.max(d);
            let node = &self.nodes[i];
            stack.extend(node.left.map(|c| (c, d + 1)));
            stack.extend(node.right.map(|c| (c, d + 1)));
        }
        deepest
    }
}

impl<V> Default for OrderedIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ascending in-order traversal of an [`OrderedIndex`].
///
/// Uses an explicit stack, so degenerate trees do not recurse. Returning
/// `None` is the end-of-sequence signal.
pub struct InOrder<'a, V> {
    nodes: &'a [Node<V>],
    stack: Vec<usize>,
    pending: Option<usize>,
}

impl<'a, V> Iterator for InOrder<'a, V> {
    type Item = (f64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.pending {
            self.stack.push(i);
            self.pending = self.nodes[i].left;
        }
        let i = self.stack.pop()?;
        let node = &self.nodes[i];
        self.pending = node.right;
        Some((node.key, &node.value))
    }
}
