//! Priority queue backed by an array heap ordered by a caller-supplied predicate.
//!
//! The head of the queue is always the element that is least under the
//! caller's `less` predicate. Pass `|a, b| a < b` for ascending order and
//! `|a, b| a > b` for descending order.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::QueueOptions;

use super::error::{QueueError, QueueResult};
use super::heap::{default_less, select_least, LessFn, PriorityHeap};
use super::queue::{Queue, QueueIter};

/// Thread-safe priority queue.
///
/// Mutating operations take the write lock; `peek`, `size`, `is_empty`,
/// `contains` and serialization share the read lock.
///
/// # Examples
///
/// ```
/// use prometheus_queue::{PriorityQueue, Queue, QueueOptions};
///
/// let queue = PriorityQueue::new(vec![5, 1, 3], |a: &i32, b: &i32| a < b, QueueOptions::new());
/// assert_eq!(queue.get(), Ok(1));
/// assert_eq!(queue.get(), Ok(3));
/// assert_eq!(queue.get(), Ok(5));
/// ```
pub struct PriorityQueue<T> {
    /// Contents at construction time, after trimming, in heap order.
    initial: Vec<T>,
    heap: RwLock<PriorityHeap<T>>,
    capacity: Option<usize>,
}

impl<T: Clone> PriorityQueue<T> {
    /// Create a queue ordered by `less`.
    ///
    /// If a capacity is set and `elems` holds more elements than it allows,
    /// only the `capacity` highest priority elements are kept. Elements that
    /// tie under `less` keep their order in `elems`, so with no ordering the
    /// leading elements survive.
    #[must_use]
    pub fn new<F>(elems: Vec<T>, less: F, options: QueueOptions) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self::with_less_fn(elems, Arc::new(less), options)
    }

    /// Create a queue with no ordering between elements: the predicate never
    /// reports either element as smaller, so the heap never reorders.
    #[must_use]
    pub fn with_default_order(elems: Vec<T>, options: QueueOptions) -> Self {
        Self::with_less_fn(elems, default_less(), options)
    }

    /// Create a queue from an already shared predicate.
    #[must_use]
    pub fn with_less_fn(elems: Vec<T>, less: LessFn<T>, options: QueueOptions) -> Self {
        let supplied = elems.len();
        let elems = match options.capacity {
            Some(capacity) if capacity < supplied => {
                debug!(
                    supplied,
                    capacity,
                    discarded = supplied - capacity,
                    "trimmed priority queue elements to capacity"
                );
                select_least(elems, &less, capacity)
            }
            _ => elems,
        };
        let heap = PriorityHeap::new(elems, less);

        let initial = heap.as_slice().to_vec();
        debug!(size = initial.len(), capacity = ?options.capacity, "priority queue created");

        Self {
            initial,
            heap: RwLock::new(heap),
            capacity: options.capacity,
        }
    }
}

impl<T> PriorityQueue<T> {
    /// Capacity bound, if any.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl<T: Clone> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::with_default_order(Vec::new(), QueueOptions::default())
    }
}

impl<T: Clone + PartialEq> Queue<T> for PriorityQueue<T> {
    fn get(&self) -> QueueResult<T> {
        self.heap.write().pop().ok_or(QueueError::Empty)
    }

    fn offer(&self, elem: T) -> QueueResult<()> {
        let mut heap = self.heap.write();
        if self.capacity.is_some_and(|capacity| heap.len() >= capacity) {
            return Err(QueueError::Full);
        }
        heap.push(elem);
        Ok(())
    }

    fn peek(&self) -> QueueResult<T> {
        self.heap.read().peek().cloned().ok_or(QueueError::Empty)
    }

    fn size(&self) -> usize {
        self.heap.read().len()
    }

    fn is_empty(&self) -> bool {
        self.heap.read().is_empty()
    }

    fn contains(&self, elem: &T) -> bool {
        self.heap.read().as_slice().contains(elem)
    }

    fn reset(&self) {
        self.heap.write().restore(&self.initial);
        debug!(size = self.initial.len(), "priority queue reset");
    }

    /// Returns the removed elements in heap storage order.
    fn clear(&self) -> Vec<T> {
        let removed = self.heap.write().take();
        debug!(removed = removed.len(), "priority queue cleared");
        removed
    }

    /// Yields elements in priority order, one `get` per pull.
    fn iterator(&self) -> QueueIter<'_, T> {
        QueueIter::new(self)
    }
}

impl<T: Serialize> Serialize for PriorityQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.heap.read().as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &*self.heap.read())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
