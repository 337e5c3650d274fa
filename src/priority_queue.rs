use crate::heap;
use core::iter::FromIterator;
use log::debug;

/// A max-heap that is filled one item at a time and then consumed by
/// heapsort. There is no way to remove single items; the queue only grows
/// until `into_sorted_vec` turns it into sorted output.
pub struct PQ<T> {
    pq: Vec<T>,
}

impl<T: Ord> PQ<T> {
    pub fn new() -> Self {
        Self { pq: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pq: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of `vec` and arranges it into a heap in linear time.
    pub fn from_vec(mut vec: Vec<T>) -> Self {
        heap::build_by_sinking(&mut vec);
        let q = Self { pq: vec };
        q.check();
        q
    }

    pub fn clear(&mut self) {
        self.pq.clear();
    }

    pub fn len(&self) -> usize {
        self.pq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    /// Inserts an item into the partially-sorted heap.
    pub fn insert(&mut self, item: T) {
        self.pq.push(item);
        let last = self.pq.len();
        heap::swim(&mut self.pq, last);
        self.check();
    }

    /// Returns the greatest item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.pq.first()
    }

    /// The items in heap order: position 1 first, then level by level.
    pub fn as_slice(&self) -> &[T] {
        &self.pq
    }

    /// Sorts the items in place and returns them in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let n = self.pq.len();
        debug!("into_sorted_vec: {} items", n);
        heap::sort_heap(&mut self.pq, n);
        self.pq
    }

    fn check(&self) {
        debug_assert!(heap::is_heap(&self.pq, self.pq.len()));
    }
}

impl<T: Ord> Default for PQ<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for PQ<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for PQ<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

use core::fmt::{Debug, Formatter};

impl<T: Debug> Debug for PQ<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for item in self.pq.iter() {
            write!(fmt, "{:?} ", item)?;
        }
        Ok(())
    }
}
