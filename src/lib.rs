//! Heapsort on an array-based binary max-heap.
//!
//! The building blocks are in [`heap`]: `swim` restores heap order upward
//! after an element is appended, `sink` restores it downward, and
//! `sort_heap` repeatedly moves the maximum to the back of the shrinking
//! heap. [`priority_queue::PQ`] wraps a `Vec` and drives the same steps for
//! callers that insert items one at a time.

pub mod error;
pub mod heap;
pub mod priority_queue;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::heap::{
    build_by_insertion, build_by_sinking, check_heap, exchange, heapsort, is_heap, sink,
    sort_heap, swim, try_sort_heap,
};
pub use crate::priority_queue::PQ;
