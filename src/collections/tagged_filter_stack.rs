//! Predicate-filtered accumulating stack
//!
//! Every push asks the accumulator for a fresh tag and stores it next to
//! the payload. The predicate then decides, over the stored tags, which
//! entries stay. The tag is independent of the payload, so callers can
//! express retention policies such as "keep while a counter is below N"
//! without coupling eviction to the stored type.

use std::fmt;

/// A payload together with the tag computed when it was pushed
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedEntry<T, V> {
    pub tag: V,
    pub payload: T,
}

/// Stack whose entries are re-filtered by a tag predicate after every push
pub struct TaggedFilterStack<T, V> {
    entries: Vec<TaggedEntry<T, V>>,
    accumulator: Box<dyn FnMut() -> V>,
    predicate: Box<dyn Fn(&V) -> bool>,
}

impl<T, V> TaggedFilterStack<T, V> {
    /// Create an empty stack
    ///
    /// `accumulator` is called once per push to produce the entry's tag;
    /// `predicate` decides whether an entry with a given tag is retained.
    pub fn new<A, P>(accumulator: A, predicate: P) -> Self
    where
        A: FnMut() -> V + 'static,
        P: Fn(&V) -> bool + 'static,
    {
        Self {
            entries: Vec::with_capacity(8),
            accumulator: Box::new(accumulator),
            predicate: Box::new(predicate),
        }
    }

    /// Tag and append an item, then drop every entry whose tag fails the predicate
    ///
    /// Returns the number of entries retained after filtering.
    pub fn push(&mut self, item: T) -> usize {
        let tag = (self.accumulator)();
        self.entries.push(TaggedEntry { tag, payload: item });

        // Full rescan: the predicate is not assumed monotonic over tags.
        let predicate = &self.predicate;
        self.entries.retain(|entry| predicate(&entry.tag));

        self.entries.len()
    }

    /// Remove and return the most recently retained payload
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop().map(|entry| entry.payload)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the retained entries, oldest first
    pub fn entries(&self) -> &[TaggedEntry<T, V>] {
        &self.entries
    }
}

impl<T: Clone, V> TaggedFilterStack<T, V> {
    /// Snapshot of the retained payloads in order
    pub fn data(&self) -> Vec<T> {
        self.entries.iter().map(|entry| entry.payload.clone()).collect()
    }
}

impl<T: PartialEq, V> TaggedFilterStack<T, V> {
    /// Check whether a retained payload equals `item`
    pub fn contains(&self, item: &T) -> bool {
        self.entries.iter().any(|entry| entry.payload == *item)
    }
}

impl<T: fmt::Debug, V: fmt::Debug> fmt::Debug for TaggedFilterStack<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedFilterStack")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> impl FnMut() -> i32 {
        let mut count = 0;
        move || {
            count += 1;
            count
        }
    }

    #[test]
    fn test_new_is_empty() {
        let stack: TaggedFilterStack<String, i32> = TaggedFilterStack::new(|| 0, |v| *v < 10);
        assert_eq!(stack.size(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_and_data() {
        let mut stack = TaggedFilterStack::new(counter(), |v| *v < 5);

        assert_eq!(stack.push("a"), 1);
        assert_eq!(stack.push("b"), 2);
        assert_eq!(stack.push("c"), 3);

        assert_eq!(stack.data(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_push_drops_entry_failing_predicate() {
        let mut stack = TaggedFilterStack::new(counter(), |v| *v <= 3);

        for item in ["a", "b", "c", "d"] {
            stack.push(item);
        }

        assert_eq!(stack.size(), 3);
        assert!(stack.contains(&"c"));
        assert!(!stack.contains(&"d"));
        let tags: Vec<i32> = stack.entries().iter().map(|e| e.tag).collect();
        assert_eq!(tags, vec![1, 2, 3]);
    }

    #[test]
    fn test_accumulator_called_once_per_push() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut stack = TaggedFilterStack::new(
            move || {
                seen.set(seen.get() + 1);
                seen.get()
            },
            |_| true,
        );

        stack.push(10);
        stack.push(20);
        stack.push(30);

        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_retention_follows_shared_pressure() {
        // Tags are fixed at push time even when the accumulator's source moves.
        let pressure = Rc::new(Cell::new(0));
        let source = Rc::clone(&pressure);
        let mut stack = TaggedFilterStack::new(move || source.get(), |v| *v < 2);

        stack.push("low");
        pressure.set(5);
        assert_eq!(stack.push("high"), 1);
        assert_eq!(stack.data(), vec!["low"]);
    }

    #[test]
    fn test_push_refilters_earlier_entries() {
        let limit = Rc::new(Cell::new(10));
        let bound = Rc::clone(&limit);
        let mut stack = TaggedFilterStack::new(counter(), move |v| *v <= bound.get());

        stack.push("a");
        stack.push("b");
        assert_eq!(stack.size(), 2);

        limit.set(1);
        assert_eq!(stack.push("c"), 1);
        assert_eq!(stack.data(), vec!["a"]);
        assert!(!stack.contains(&"b"));
    }

    #[test]
    fn test_pop_is_unconditional_and_lifo() {
        let mut stack = TaggedFilterStack::new(counter(), |v| *v < 10);
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.size(), 1);
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_data_is_a_fresh_snapshot() {
        let mut stack = TaggedFilterStack::new(counter(), |_| true);
        stack.push(1);

        let mut snapshot = stack.data();
        snapshot.push(99);

        assert_eq!(stack.data(), vec![1]);
    }
}
