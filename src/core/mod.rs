//! Queue contract, error types, and the blocking and priority queues.

pub mod blocking;
pub mod error;
mod heap;
pub mod priority;
pub mod queue;
mod sequence;

pub use blocking::BlockingQueue;
pub use error::{AppResult, QueueError, QueueResult};
pub use heap::LessFn;
pub use priority::PriorityQueue;
pub use queue::{Queue, QueueIter, WaitQueue};
