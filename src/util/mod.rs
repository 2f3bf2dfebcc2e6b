//! Small generic helpers shared by the containers and the CLI

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Smaller of two values; `b` wins when they are unordered
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values; `b` wins when they are unordered
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Total order over `f64` that places NaN after every number
///
/// Two NaNs compare equal. Usable directly as a
/// [`LazySortedQueue`](crate::collections::LazySortedQueue) comparator.
pub fn float_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Concatenate slices in order
pub fn merge_slices<T: Clone>(slices: &[&[T]]) -> Vec<T> {
    let total = slices.iter().map(|s| s.len()).sum();
    let mut result = Vec::with_capacity(total);
    for slice in slices {
        result.extend_from_slice(slice);
    }
    result
}

/// Concatenate slices, keeping only the first occurrence of each value
pub fn merge_unique_slices<T: Clone + Eq + Hash>(slices: &[&[T]]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for value in slices.iter().flat_map(|s| s.iter()) {
        if seen.insert(value) {
            result.push(value.clone());
        }
    }
    result
}

pub fn first_or<T: Clone>(slice: &[T], default: T) -> T {
    slice.first().cloned().unwrap_or(default)
}

pub fn last_or<T: Clone>(slice: &[T], default: T) -> T {
    slice.last().cloned().unwrap_or(default)
}
