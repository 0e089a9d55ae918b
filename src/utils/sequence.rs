//! Pure sequence helpers. Inputs are never mutated.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;

/// Fisher–Yates shuffle over a copy, using the thread-local RNG.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Fisher–Yates shuffle over a copy with a caller-supplied RNG.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Set-union of two sequences, keeping the first occurrence of each value.
pub fn merge_arrays<T: Clone + Eq + Hash>(a: &[T], b: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(a.len() + b.len());
    a.iter()
        .chain(b.iter())
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
