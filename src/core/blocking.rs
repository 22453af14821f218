//! FIFO queue whose readers, and capacity-bound writers, can wait.

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::QueueOptions;

use super::error::{QueueError, QueueResult};
use super::queue::{Queue, QueueIter, WaitQueue};
use super::sequence::GuardedSequence;

/// Thread-safe FIFO queue with blocking and non-blocking operations.
///
/// Every operation, including `size` and `peek`, goes through the same mutex
/// the condition variables are bound to.
///
/// `reset` rewinds to the construction-time elements and wakes every waiter.
/// Wakeup order among waiting threads is unspecified; the element each one
/// receives is always the next one in FIFO order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use prometheus_queue::{BlockingQueue, QueueOptions, WaitQueue};
///
/// let queue = Arc::new(BlockingQueue::new(vec![1, 2, 3], QueueOptions::new()));
/// assert_eq!(queue.get_wait(), 1);
/// assert_eq!(queue.get_wait(), 2);
/// assert_eq!(queue.get_wait(), 3);
///
/// let consumer = Arc::clone(&queue);
/// let handle = thread::spawn(move || consumer.get_wait());
/// queue.offer_wait(4);
/// assert_eq!(handle.join().unwrap(), 4);
/// ```
#[derive(Debug)]
pub struct BlockingQueue<T> {
    /// Contents at construction time, after trimming.
    initial: Vec<T>,
    seq: GuardedSequence<T>,
    capacity: Option<usize>,
}

impl<T: Clone> BlockingQueue<T> {
    /// Create a queue holding `elems`, oldest first.
    ///
    /// If a capacity is set and `elems` holds more elements than it allows, the
    /// sequence is truncated to its first `capacity` elements.
    #[must_use]
    pub fn new(mut elems: Vec<T>, options: QueueOptions) -> Self {
        if let Some(capacity) = options.capacity {
            if capacity < elems.len() {
                debug!(
                    supplied = elems.len(),
                    capacity,
                    "trimmed blocking queue elements to capacity"
                );
                elems.truncate(capacity);
            }
        }
        debug!(size = elems.len(), capacity = ?options.capacity, "blocking queue created");

        Self {
            initial: elems.clone(),
            seq: GuardedSequence::new(elems),
            capacity: options.capacity,
        }
    }
}

impl<T> BlockingQueue<T> {
    /// Capacity bound, if any.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn is_full(&self, unread: usize) -> bool {
        self.capacity.is_some_and(|capacity| unread >= capacity)
    }
}

impl<T: Clone> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new(Vec::new(), QueueOptions::default())
    }
}

impl<T: Clone + PartialEq> Queue<T> for BlockingQueue<T> {
    fn get(&self) -> QueueResult<T> {
        let elem = self.seq.lock().advance().ok_or(QueueError::Empty)?;
        self.seq.signal_not_full();
        Ok(elem)
    }

    fn offer(&self, elem: T) -> QueueResult<()> {
        let mut state = self.seq.lock();
        if self.is_full(state.unread()) {
            return Err(QueueError::Full);
        }
        state.push(elem);
        drop(state);
        self.seq.signal_not_empty();
        Ok(())
    }

    fn peek(&self) -> QueueResult<T> {
        self.seq.lock().front().cloned().ok_or(QueueError::Empty)
    }

    fn size(&self) -> usize {
        self.seq.lock().unread()
    }

    /// Only unread elements are compared.
    fn contains(&self, elem: &T) -> bool {
        self.seq.lock().unread_slice().contains(elem)
    }

    fn reset(&self) {
        self.seq.reset_state(&self.initial);
        debug!(size = self.initial.len(), "blocking queue reset");
    }

    /// Returns the unread elements, oldest first.
    fn clear(&self) -> Vec<T> {
        let removed = self.seq.lock().compact();
        self.seq.broadcast_not_full();
        debug!(removed = removed.len(), "blocking queue cleared");
        removed
    }

    /// Yields the unread elements oldest first, one `get` per pull.
    fn iterator(&self) -> QueueIter<'_, T> {
        QueueIter::new(self)
    }
}

impl<T: Clone + PartialEq> WaitQueue<T> for BlockingQueue<T> {
    fn get_wait(&self) -> T {
        self.seq.take_blocking()
    }

    fn peek_wait(&self) -> T {
        self.seq.peek_blocking()
    }

    /// With a capacity of zero this never returns.
    fn offer_wait(&self, elem: T) {
        let Some(capacity) = self.capacity else {
            self.seq.push_blocking(elem);
            return;
        };

        let mut state = self.seq.lock();
        self.seq.wait_not_full(&mut state, capacity);
        state.push(elem);
        drop(state);
        self.seq.signal_not_empty();
    }
}

impl<T: Serialize> Serialize for BlockingQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.seq.lock().unread_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let queue = BlockingQueue::new(vec![1, 2, 3], QueueOptions::new());
        assert_eq!(queue.get(), Ok(1));
        assert_eq!(queue.get_wait(), 2);
        assert_eq!(queue.peek(), Ok(3));
        assert_eq!(queue.get(), Ok(3));
        assert_eq!(queue.get(), Err(QueueError::Empty));
        assert_eq!(queue.peek(), Err(QueueError::Empty));
    }

    #[test]
    fn test_capacity_truncates_initial_elements() {
        let queue = BlockingQueue::new(vec![1, 2, 3], QueueOptions::new().with_capacity(2));
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.clear(), vec![1, 2]);
    }

    #[test]
    fn test_offer_full_then_room() {
        let queue = BlockingQueue::new(vec![1, 2, 3], QueueOptions::new().with_capacity(3));
        assert_eq!(queue.offer(4), Err(QueueError::Full));
        assert_eq!(queue.get(), Ok(1));
        assert_eq!(queue.offer(4), Ok(()));
        assert_eq!(queue.size(), 3);
    }

    #[test]
    fn test_contains_ignores_consumed() {
        let queue = BlockingQueue::new(vec![1, 2, 3], QueueOptions::new());
        assert!(queue.contains(&1));
        queue.get().unwrap();
        assert!(!queue.contains(&1));
        assert!(queue.contains(&3));
    }

    #[test]
    fn test_reset_restores_snapshot() {
        let queue = BlockingQueue::new(vec![1, 2, 3], QueueOptions::new().with_capacity(4));
        queue.offer_wait(4);
        assert_eq!(queue.size(), 4);
        queue.get().unwrap();

        queue.reset();
        assert_eq!(queue.size(), 3);
        assert_eq!(queue.peek(), Ok(1));
    }

    #[test]
    fn test_iterator_drains() {
        let queue = BlockingQueue::new(vec![1, 2, 3], QueueOptions::new());
        let mut iter = queue.iterator();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(queue.size(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_serialize_unread_only() {
        let queue = BlockingQueue::new(vec![3, 2, 1], QueueOptions::new());
        queue.get().unwrap();
        assert_eq!(serde_json::to_string(&queue).unwrap(), "[2,1]");
        assert_eq!(queue.size(), 2);
    }
}
