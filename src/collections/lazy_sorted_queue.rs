//! Append-only queue with an on-demand sorted view
//!
//! Items are stored in insertion order and only sorted when a sorted view
//! is requested. Lookups into the sorted view accept from-the-end offsets
//! and can either clamp out-of-range indices or treat them as a fatal
//! programming error.
//!
//! The sort is unstable: items the comparator considers equal may come
//! back in any relative order between calls.

use std::cmp::Ordering;
use std::fmt;

use crate::util::{max, min};

/// Where an index lands once relative offsets and clamping are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    At(usize),
    Vacant,
    OutOfBounds(isize),
}

fn resolve(len: usize, index: isize, clamp: bool) -> Slot {
    let len = len as isize;

    if index >= 0 {
        let index = if clamp { min(index, len - 1) } else { index };
        return if index < 0 {
            Slot::Vacant
        } else if index >= len {
            Slot::OutOfBounds(index)
        } else {
            Slot::At(index as usize)
        };
    }

    let mut index = len + index;
    if clamp {
        index = max(index, 0);
    }

    if index >= len {
        Slot::Vacant
    } else if index < 0 {
        Slot::OutOfBounds(index)
    } else {
        Slot::At(index as usize)
    }
}

/// Unordered append-only store that sorts lazily through a three-way comparator
pub struct LazySortedQueue<T> {
    backing: Vec<T>,
    comparator: Box<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> LazySortedQueue<T> {
    /// Create an empty queue ordered by `comparator`
    ///
    /// The comparator must describe a total order; the container's behavior
    /// is unspecified otherwise.
    pub fn new<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            backing: Vec::with_capacity(8),
            comparator: Box::new(comparator),
        }
    }

    /// Append an item without sorting
    pub fn push(&mut self, item: T) -> &mut Self {
        self.backing.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }
}

impl<T: Ord + 'static> LazySortedQueue<T> {
    /// Queue sorted smallest-first by `T`'s natural order
    pub fn ascending() -> Self {
        Self::new(T::cmp)
    }

    /// Queue sorted largest-first by `T`'s natural order
    pub fn descending() -> Self {
        Self::new(|a: &T, b: &T| b.cmp(a))
    }
}

impl<T: Clone> LazySortedQueue<T> {
    /// Copy of the items in insertion order
    pub fn raw(&self) -> Vec<T> {
        self.backing.clone()
    }

    /// Copy of the items in comparator order
    pub fn sorted(&self) -> Vec<T> {
        let mut sorted = self.backing.clone();
        sorted.sort_unstable_by(|a, b| (self.comparator)(a, b));
        sorted
    }

    /// Sorted view without the smallest item and the last `offset` items
    ///
    /// Returns `sorted[1..len - offset]`, or an empty vector when that
    /// window is empty.
    pub fn trim(&self, offset: usize) -> Vec<T> {
        let mut sorted = self.sorted();
        let end = sorted.len().saturating_sub(offset);
        if end <= 1 {
            return Vec::new();
        }
        sorted.drain(1..end).collect()
    }
}

impl<T: Clone + Default> LazySortedQueue<T> {
    /// Clamped lookup into the sorted view
    ///
    /// Negative indices count from the end. Out-of-range indices are clamped
    /// to the nearest item; an empty queue yields `T::default()`.
    pub fn get(&self, index: isize) -> T {
        self.get_with(index, true)
    }

    /// Lookup into the sorted view with explicit clamping
    ///
    /// With `clamp` set this behaves like [`get`](Self::get).
    ///
    /// # Panics
    ///
    /// With `clamp == false`, panics when `index` lies at or beyond the end
    /// of the sorted view, or when a negative index still points before the
    /// start after counting from the end.
    pub fn get_with(&self, index: isize, clamp: bool) -> T {
        let sorted = self.sorted();
        match resolve(sorted.len(), index, clamp) {
            Slot::At(i) => take(sorted, i),
            Slot::Vacant => T::default(),
            Slot::OutOfBounds(i) => panic!(
                "index out of bounds: the len is {} but the index is {}",
                sorted.len(),
                i
            ),
        }
    }

    /// Like [`get_with`](Self::get_with), but returns `None` instead of panicking
    pub fn try_get_with(&self, index: isize, clamp: bool) -> Option<T> {
        let sorted = self.sorted();
        match resolve(sorted.len(), index, clamp) {
            Slot::At(i) => Some(take(sorted, i)),
            Slot::Vacant => Some(T::default()),
            Slot::OutOfBounds(_) => None,
        }
    }
}

fn take<T>(mut items: Vec<T>, index: usize) -> T {
    items.swap_remove(index)
}

impl<T: fmt::Debug> fmt::Debug for LazySortedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySortedQueue")
            .field("backing", &self.backing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(items: &[i32]) -> LazySortedQueue<i32> {
        let mut queue = LazySortedQueue::new(|a: &i32, b: &i32| a.cmp(b));
        for item in items {
            queue.push(*item);
        }
        queue
    }

    #[test]
    fn test_new_is_empty() {
        let queue = LazySortedQueue::<i32>::ascending();
        assert!(queue.is_empty());
        assert_eq!(queue.raw(), Vec::<i32>::new());
    }

    #[test]
    fn test_push_is_chainable() {
        let mut queue = LazySortedQueue::ascending();
        queue.push(3).push(1).push(4).push(2);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_raw_keeps_insertion_order() {
        let queue = filled(&[3, 1, 4, 2]);
        assert_eq!(queue.raw(), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_sorted() {
        let queue = filled(&[3, 1, 4, 2]);
        assert_eq!(queue.sorted(), vec![1, 2, 3, 4]);
        // Sorting is a view; the backing order is untouched.
        assert_eq!(queue.raw(), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_sorted_descending() {
        let mut queue = LazySortedQueue::descending();
        queue.push(3).push(1).push(4).push(2);
        assert_eq!(queue.sorted(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sorted_ties_form_a_group() {
        let mut queue = LazySortedQueue::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        queue.push((2, 'x')).push((1, 'a')).push((2, 'y')).push((2, 'z')).push((3, 'q'));

        let sorted = queue.sorted();
        assert_eq!(sorted[0], (1, 'a'));
        assert_eq!(sorted[4], (3, 'q'));

        let mut middle: Vec<char> = sorted[1..4].iter().map(|(_, c)| *c).collect();
        middle.sort();
        assert_eq!(middle, vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_get() {
        let queue = filled(&[3, 1, 4, 2]);

        assert_eq!(queue.get(0), 1);
        assert_eq!(queue.get(1), 2);
        assert_eq!(queue.get(3), 4);

        assert_eq!(queue.get(-1), 4);
        assert_eq!(queue.get(-2), 3);

        assert_eq!(queue.get(10), 4);
        assert_eq!(queue.get(-10), 1);
    }

    #[test]
    fn test_get_on_empty_returns_default() {
        let queue = filled(&[]);
        assert_eq!(queue.get(0), 0);
        assert_eq!(queue.get(5), 0);
        assert_eq!(queue.get(-1), 0);
    }

    #[test]
    fn test_get_unclamped_in_range() {
        let queue = filled(&[3, 1, 4, 2]);
        assert_eq!(queue.get_with(-3, false), 2);
        assert_eq!(queue.get_with(2, false), 3);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_get_unclamped_past_end_panics() {
        let queue = filled(&[3, 1, 4, 2]);
        queue.get_with(10, false);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_get_unclamped_before_start_panics() {
        let queue = filled(&[3, 1, 4, 2]);
        queue.get_with(-5, false);
    }

    #[test]
    fn test_try_get_with() {
        let queue = filled(&[3, 1, 4, 2]);
        assert_eq!(queue.try_get_with(10, false), None);
        assert_eq!(queue.try_get_with(-5, false), None);
        assert_eq!(queue.try_get_with(-1, false), Some(4));
        assert_eq!(queue.try_get_with(10, true), Some(4));
    }

    #[test]
    fn test_trim() {
        let queue = filled(&[5, 3, 1, 4, 2]);
        assert_eq!(queue.trim(0), vec![2, 3, 4, 5]);
        assert_eq!(queue.trim(1), vec![2, 3, 4]);
        assert_eq!(queue.trim(3), vec![2]);
    }

    #[test]
    fn test_trim_large_offset_is_empty() {
        let queue = filled(&[5, 3, 1, 4, 2]);
        assert!(queue.trim(4).is_empty());
        assert!(queue.trim(5).is_empty());
        assert!(queue.trim(100).is_empty());
        assert!(filled(&[]).trim(0).is_empty());
        assert!(filled(&[7]).trim(0).is_empty());
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(0, 0, true), Slot::Vacant);
        assert_eq!(resolve(0, -1, true), Slot::Vacant);
        assert_eq!(resolve(4, 4, false), Slot::OutOfBounds(4));
        assert_eq!(resolve(4, -5, false), Slot::OutOfBounds(-1));
        assert_eq!(resolve(4, -5, true), Slot::At(0));
        assert_eq!(resolve(4, 9, true), Slot::At(3));
        assert_eq!(resolve(4, -2, true), Slot::At(2));
    }
}
