use core::cmp::Ordering;
use core::fmt::Debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Generates `count` values in `1..=200`, the range the interactive demo
/// draws from. The same seed always gives the same values.
pub fn random_values(seed: u64, count: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(1..=200)).collect()
}

pub fn assert_sorted<T: Ord + Debug>(items: &[T]) {
    for w in items.windows(2) {
        assert!(w[0] <= w[1], "not sorted: {:?}", items);
    }
}

pub fn assert_is_heap<T: Ord + Debug>(heap: &[T], size: usize) {
    assert_eq!(
        crate::heap::check_heap(heap, size),
        Ok(()),
        "heap: {:?}",
        &heap[..size.min(heap.len())]
    );
}

/// A value that compares only by `key`. `tag` tells apart elements that
/// compare equal, so tests can see which one moved.
#[derive(Clone, Copy, Debug)]
pub struct Tagged {
    pub key: i32,
    pub tag: char,
}

pub fn tagged(key: i32, tag: char) -> Tagged {
    Tagged { key, tag }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
