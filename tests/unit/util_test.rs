//! Tests for utility functions

use prometheus_queue::util::{init_tracing, init_tracing_with, DEFAULT_DIRECTIVE};
use prometheus_queue::{BlockingQueue, Queue, QueueOptions};

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    init_tracing_with("prometheus_queue=trace");
}

#[test]
fn test_default_directive_targets_crate() {
    assert!(DEFAULT_DIRECTIVE.starts_with("prometheus_queue"));
}

#[test]
fn test_queue_operations_with_tracing_enabled() {
    init_tracing_with("prometheus_queue=trace");

    let queue = BlockingQueue::new(vec![1, 2, 3], QueueOptions::new().with_capacity(2));
    queue.reset();
    assert_eq!(queue.clear(), vec![1, 2]);
}
