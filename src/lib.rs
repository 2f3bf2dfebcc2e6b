//! Rollbuf - bounded and lazily ordered in-memory containers
//!
//! Rollbuf provides small container primitives for rolling windows, caches
//! and priority buffers, plus a `.env` loader for configuring them.
//!
//! # Example
//!
//! ```
//! use rollbuf::{BoundedQueue, LazySortedQueue, TaggedFilterStack};
//!
//! let mut recent = BoundedQueue::with_capacity(3).unwrap();
//! for i in 1..=5 {
//!     recent.push(i);
//! }
//! assert_eq!(recent.to_vec(), vec![3, 4, 5]);
//!
//! let mut count = 0;
//! let mut first_two = TaggedFilterStack::new(
//!     move || {
//!         count += 1;
//!         count
//!     },
//!     |tag| *tag <= 2,
//! );
//! first_two.push("a");
//! first_two.push("b");
//! first_two.push("c");
//! assert_eq!(first_two.data(), vec!["a", "b"]);
//!
//! let mut scores = LazySortedQueue::ascending();
//! scores.push(3).push(1).push(4).push(2);
//! assert_eq!(scores.get(-1), 4);
//! assert_eq!(scores.trim(1), vec![2, 3]);
//! ```

pub mod cli;
pub mod collections;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod output;
pub mod util;

pub use collections::{BoundedQueue, LazySortedQueue, TaggedEntry, TaggedFilterStack};
pub use config::Settings;
pub use engine::{execute_command, Command, ExecutionContext, ExecutionResult};
pub use env::{EnvData, EnvValue};
pub use error::{Result, RollbufError};
pub use output::{format_output, OutputFormat};
