//! Tests for builder modules

use prometheus_queue::builders::QueueBuilder;
use prometheus_queue::config::QueueOptions;
use prometheus_queue::{Queue, QueueError, WaitQueue};

#[test]
fn test_queue_builder_defaults() {
    let builder = QueueBuilder::<u32>::new();
    assert_eq!(builder.config().capacity, None);

    let queue = builder.build_blocking();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), None);
}

#[test]
fn test_queue_builder_blocking() {
    let queue = QueueBuilder::new()
        .element(1)
        .element(2)
        .element(3)
        .capacity(3)
        .build_blocking();

    assert_eq!(queue.offer(4), Err(QueueError::Full));
    assert_eq!(queue.get_wait(), 1);
}

#[test]
fn test_queue_builder_priority() {
    let queue = QueueBuilder::new()
        .elements(vec![7, 3, 9, 1])
        .options(QueueOptions::new().with_capacity(2))
        .build_priority(|a: &i32, b: &i32| a < b);

    assert_eq!(queue.capacity(), Some(2));
    assert_eq!(queue.clear(), vec![1, 3]);
}

#[test]
fn test_queue_builder_priority_default_order() {
    let queue = QueueBuilder::new().elements(vec!["b", "a"]).build_priority_default();
    assert_eq!(queue.peek(), Ok("b"));
}
