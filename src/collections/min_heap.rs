//! Binary min-heap ordered by a caller-supplied comparison.

use std::cmp::Ordering;

use crate::{Error, Result};

/// A binary min-heap whose ordering is defined by a comparison function.
///
/// Elements are opaque to the heap: it never inspects them beyond calling `compare`.
/// The comparison must be a total order; for floating-point keys use
/// [`f64::total_cmp`].
///
/// # Examples
///
/// ```rust
/// use graphworks::collections::MinHeap;
///
/// let mut heap = MinHeap::new(|a: &(f64, char), b: &(f64, char)| a.0.total_cmp(&b.0));
/// heap.insert((3.0, 'c'));
/// heap.insert((1.0, 'a'));
/// heap.insert((2.0, 'b'));
///
/// assert_eq!(heap.extract_min()?.1, 'a');
/// assert_eq!(heap.len(), 2);
/// # Ok::<(), graphworks::Error>(())
/// ```
pub struct MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    data: Vec<T>,
    compare: F,
}

impl<T: Ord> MinHeap<T, fn(&T, &T) -> Ordering> {
    /// Creates a heap ordered by `T`'s natural ordering.
    #[must_use]
    pub fn ordered() -> Self {
        let compare: fn(&T, &T) -> Ordering = T::cmp;
        MinHeap::new(compare)
    }
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `compare`.
    pub fn new(compare: F) -> Self {
        MinHeap {
            data: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the minimal element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element in O(log n).
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimal element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHeap`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let item = self.data.pop().ok_or(Error::EmptyHeap)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinHeap").field("data", &self.data).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_order() {
        let mut heap = MinHeap::ordered();
        for value in [5, 3, 8, 1, 9, 2, 7] {
            heap.insert(value);
        }

        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.extract_min().unwrap());
        }
        assert_eq!(drained, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_custom_comparison() {
        let mut heap = MinHeap::new(|a: &i32, b: &i32| b.cmp(a));
        heap.insert(1);
        heap.insert(10);
        heap.insert(5);
        assert_eq!(heap.peek(), Some(&10));
        assert_eq!(heap.extract_min().unwrap(), 10);
        assert_eq!(heap.extract_min().unwrap(), 5);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: MinHeap<u8, _> = MinHeap::with_capacity(4, |a: &u8, b: &u8| a.cmp(b));
        assert!(heap.peek().is_none());
        assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));

        heap.insert(4);
        assert_eq!(heap.extract_min().unwrap(), 4);
        assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));
    }

    #[test]
    fn test_duplicates() {
        let mut heap = MinHeap::ordered();
        for value in [2, 2, 1, 1, 3] {
            heap.insert(value);
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.extract_min().unwrap(), 1);
        assert_eq!(heap.extract_min().unwrap(), 1);
        assert_eq!(heap.extract_min().unwrap(), 2);
    }
}
