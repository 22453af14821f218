//! # Prometheus Queue
//!
//! Generic, thread-safe queues sharing one contract, for the Prometheus AI Platform.
//!
//! Every queue implements [`Queue`]: `get`, `offer`, `peek`, `size`, `is_empty`,
//! `contains`, `reset`, `clear` and `iterator`. The queues differ in ordering
//! discipline and in whether callers can wait.
//!
//! ## Key Features
//!
//! - **Priority ordering**: [`PriorityQueue`] keeps a binary heap ordered by a
//!   caller-supplied `less` predicate; no `Ord` bound on the element type
//! - **Blocking coordination**: [`BlockingQueue`] adds [`WaitQueue`] operations
//!   (`get_wait`, `peek_wait`, `offer_wait`) built on a mutex and condition variables
//! - **Capacity bounds**: [`QueueOptions`] caps the live element count for both kinds
//! - **Reset**: both queues can rewind to their construction-time contents
//! - **Serialization**: both queues serialize their live elements with `serde`
//!
//! ## PriorityQueue
//!
//! ```rust
//! use prometheus_queue::{PriorityQueue, Queue, QueueError, QueueOptions};
//!
//! // Capacity 3: only the three highest priority elements survive construction.
//! let queue = PriorityQueue::new(
//!     vec![5, 1, 4, 2, 3],
//!     |a: &i32, b: &i32| a < b,
//!     QueueOptions::new().with_capacity(3),
//! );
//!
//! assert_eq!(queue.offer(0), Err(QueueError::Full));
//! assert_eq!(queue.get(), Ok(1));
//! queue.reset();
//! assert_eq!(queue.size(), 3);
//! ```
//!
//! ## BlockingQueue
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use prometheus_queue::{BlockingQueue, Queue, QueueError, QueueOptions, WaitQueue};
//!
//! let queue = Arc::new(BlockingQueue::new(vec![1, 2, 3], QueueOptions::new().with_capacity(3)));
//! assert_eq!(queue.offer(4), Err(QueueError::Full));
//!
//! // offer_wait suspends until a get frees a slot.
//! let producer = Arc::clone(&queue);
//! let handle = thread::spawn(move || producer.offer_wait(4));
//! assert_eq!(queue.get_wait(), 1);
//! handle.join().unwrap();
//! assert_eq!(queue.clear(), vec![2, 3, 4]);
//! ```
//!
//! ## Caveats
//!
//! - [`Queue::iterator`] is destructive: each pull is a `get`, so iterating to
//!   the end empties the queue.
//! - Blocking calls have no timeout. Race them against a timer on another thread
//!   (see `tests/timeout_race_test.rs`).
//! - A blocking queue only compacts its storage on `clear` and `reset`;
//!   consumed elements are kept until then.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Queue contract, error types, and queue implementations.
pub mod core;
/// Configuration models for queue options.
pub mod config;
/// Builders to construct queues from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;

pub use crate::builders::QueueBuilder;
pub use crate::config::QueueOptions;
pub use crate::core::{
    AppResult, BlockingQueue, LessFn, PriorityQueue, Queue, QueueError, QueueIter, QueueResult,
    WaitQueue,
};
