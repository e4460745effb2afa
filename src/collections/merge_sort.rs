//! Stable bottom-up merge sort.

/// Returns a copy of `items` sorted by `key`, keeping equal keys in their
/// original relative order.
///
/// Runs in O(n log n) time with one scratch buffer of length n.
pub fn merge_sort_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut src: Vec<T> = items.to_vec();
    let n = src.len();
    if n < 2 {
        return src;
    }
    let mut dst: Vec<T> = Vec::with_capacity(n);

    let mut width = 1;
    while width < n {
        dst.clear();
        let mut lo = 0;
        while lo < n {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            merge(&src[lo..mid], &src[mid..hi], &mut dst, &mut key);
            lo = hi;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }
    src
}

/// Merges two sorted runs into `out`. Ties take from `left` first.
fn merge<T, K, F>(left: &[T], right: &[T], out: &mut Vec<T>, key: &mut F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if key(&right[j]) < key(&left[i]) {
            out.push(right[j].clone());
            j += 1;
        } else {
            out.push(left[i].clone());
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
