//! Capacity-bounded FIFO queue
//!
//! Once the queue is full, every push evicts the oldest entry so the
//! queue always holds the most recent `capacity` items.

use std::collections::VecDeque;

use crate::error::{Result, RollbufError};

/// Capacity used by [`BoundedQueue::new`]
pub const DEFAULT_CAPACITY: usize = 3;

/// Fixed-capacity FIFO that drops its oldest entry on overflow
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most [`DEFAULT_CAPACITY`] entries
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create an empty queue with the given capacity
    ///
    /// A capacity of zero is rejected.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RollbufError::InvalidCapacity(capacity));
        }

        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append an item, evicting the oldest entry first if the queue is full
    pub fn push(&mut self, item: T) {
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Remove and return the oldest entry
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the oldest entry without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of entries currently stored
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate entries oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Snapshot of the entries, oldest-first
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
