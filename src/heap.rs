#![doc = r###"

Binary max-heap maintenance over a mutable slice, and heapsort built on it.

Heap positions are 1-based: the root is position 1, and for position `p`

* the parent is `p / 2`,
* the left child is `2 * p`,
* the right child is `2 * p + 1`.

Position `p` is stored at `heap[p - 1]`, so no sentinel element is needed.

A slice holds a heap of logical size `n` when, for every position `p` in
`2..=n`, the element at `parent(p)` is greater than or equal to the element
at `p`. Elements after position `n` are not part of the heap. While sorting,
they are the finished (sorted) suffix.

"###]

use crate::error::Error;
use log::{debug, trace};

fn parent(child: usize) -> usize {
    child / 2
}
fn left(parent: usize) -> usize {
    parent * 2
}
fn right(parent: usize) -> usize {
    parent * 2 + 1
}

// slice index of a heap position
fn slot(pos: usize) -> usize {
    pos - 1
}

/// Swaps the elements at heap positions `i` and `j`.
pub fn exchange<T>(heap: &mut [T], i: usize, j: usize) {
    trace!("exchange {} <-> {}", i, j);
    heap.swap(slot(i), slot(j));
}

/// Moves the element at `pos` up toward the root until its parent is
/// greater than or equal to it. Returns the position the element came to
/// rest at.
///
/// This is the fix-up after appending an element to the end of a heap.
/// Equal elements do not move past each other.
pub fn swim<T: Ord>(heap: &mut [T], mut pos: usize) -> usize {
    loop {
        let parent = parent(pos);
        if pos <= 1 || heap[slot(parent)] >= heap[slot(pos)] {
            break;
        }
        exchange(heap, pos, parent);
        pos = parent;
    }
    pos
}

/// Moves the element at `pos` down until it is greater than or equal to both
/// of its children. Only positions `1..=limit` are treated as part of the
/// heap. Returns the position the element came to rest at.
///
/// When the children compare equal, the element is exchanged with the left
/// child.
pub fn sink<T: Ord>(heap: &mut [T], mut pos: usize, limit: usize) -> usize {
    loop {
        let left = left(pos);
        let right = right(pos);
        if left > limit {
            break;
        }
        let bigger = if right > limit || heap[slot(left)] >= heap[slot(right)] {
            left
        } else {
            right
        };
        if heap[slot(pos)] >= heap[slot(bigger)] {
            break;
        }
        exchange(heap, pos, bigger);
        pos = bigger;
    }
    pos
}

/// Builds a heap over the whole slice by inserting the elements one at a
/// time, in slice order. After each step `p`, positions `1..=p` hold a heap.
pub fn build_by_insertion<T: Ord>(heap: &mut [T]) {
    debug!("build_by_insertion: len = {}", heap.len());
    for pos in 1..=heap.len() {
        swim(heap, pos);
    }
}

/// Builds a heap over the whole slice in linear time, by sinking every
/// interior position, last to first.
///
/// The result is a valid heap, but not necessarily the same arrangement
/// that `build_by_insertion` produces.
pub fn build_by_sinking<T: Ord>(heap: &mut [T]) {
    let n = heap.len();
    debug!("build_by_sinking: len = {}", n);
    for pos in (1..=n / 2).rev() {
        sink(heap, pos, n);
    }
}

/// Sorts positions `1..=size` in ascending order, given that they already
/// hold a heap.
///
/// Each pass exchanges the root (the maximum) with the last heap position,
/// shrinks the heap by one, and sinks the new root. The sorted suffix grows
/// from the back.
///
/// If the positions do not hold a heap the output is not sorted, but all of
/// the elements are still present. `size` must not exceed `heap.len()`.
pub fn sort_heap<T: Ord>(heap: &mut [T], size: usize) {
    debug!("sort_heap: size = {}", size);
    let mut n = size;
    while n > 1 {
        exchange(heap, 1, n);
        n -= 1;
        sink(heap, 1, n);
    }
}

/// Like `sort_heap`, but verifies `size` and the heap order first.
pub fn try_sort_heap<T: Ord>(heap: &mut [T], size: usize) -> Result<(), Error> {
    check_heap(heap, size)?;
    sort_heap(heap, size);
    Ok(())
}

/// Sorts a slice in ascending order. Not stable.
pub fn heapsort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    build_by_insertion(items);
    sort_heap(items, n);
}

/// Checks that positions `1..=size` hold a heap. Reports the first child
/// (in position order) that is greater than its parent.
pub fn check_heap<T: Ord>(heap: &[T], size: usize) -> Result<(), Error> {
    if size > heap.len() {
        return Err(Error::InvalidSize {
            size,
            len: heap.len(),
        });
    }
    for child in 2..=size {
        let parent = parent(child);
        if heap[slot(child)] > heap[slot(parent)] {
            return Err(Error::HeapOrderViolated { parent, child });
        }
    }
    Ok(())
}

pub fn is_heap<T: Ord>(heap: &[T], size: usize) -> bool {
    check_heap(heap, size).is_ok()
}
