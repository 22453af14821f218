//! Error types for queue operations.

use thiserror::Error;

/// Errors produced by the non-blocking queue operations.
///
/// The blocking variants (`get_wait`, `peek_wait`, `offer_wait`) never return
/// these; they suspend the caller until the condition clears instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A capacity bound is in force and already saturated.
    #[error("queue is full")]
    Full,
    /// No element is currently available for removal or inspection.
    #[error("no elements available in the queue")]
    Empty,
}

/// Result of a non-blocking queue operation.
pub type QueueResult<T> = Result<T, QueueError>;

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
