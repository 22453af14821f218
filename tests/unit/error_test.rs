//! Tests for error types

use prometheus_queue::core::{AppResult, QueueError};

#[test]
fn test_full_error() {
    let err = QueueError::Full;
    assert_eq!(format!("{}", err), "queue is full");
}

#[test]
fn test_empty_error() {
    let err = QueueError::Empty;
    assert_eq!(format!("{}", err), "no elements available in the queue");
}

#[test]
fn test_error_is_std_error() {
    fn lift() -> AppResult<()> {
        Err::<(), _>(QueueError::Empty)?;
        Ok(())
    }

    let err = lift().unwrap_err();
    assert!(err.is::<QueueError>());
}
