//! Bounded and ordered in-memory containers
//!
//! - [`BoundedQueue`]: fixed-capacity FIFO that evicts its oldest entry
//! - [`TaggedFilterStack`]: stack filtered by a predicate over push-time tags
//! - [`LazySortedQueue`]: append-only store with a lazily sorted view
//!
//! All three are plain single-owner values with no internal synchronization.

mod bounded_queue;
mod lazy_sorted_queue;
mod tagged_filter_stack;

pub use bounded_queue::{BoundedQueue, DEFAULT_CAPACITY};
pub use lazy_sorted_queue::LazySortedQueue;
pub use tagged_filter_stack::{TaggedEntry, TaggedFilterStack};
