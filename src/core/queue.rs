//! The queue contract shared by every queue in this crate.

use std::fmt;

use super::error::QueueResult;

/// An ordered sequence of elements, usually first in first out.
///
/// New elements are offered at the tail and existing elements are taken from
/// the head. What "head" means depends on the implementation: the oldest
/// unread element for [`BlockingQueue`](crate::core::BlockingQueue), the
/// highest priority element for [`PriorityQueue`](crate::core::PriorityQueue).
pub trait Queue<T> {
    /// Retrieves and removes the head of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`](crate::core::QueueError::Empty) when no
    /// element is available.
    fn get(&self) -> QueueResult<T>;

    /// Inserts the element at the tail of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Full`](crate::core::QueueError::Full) when a
    /// capacity bound is set and already reached.
    fn offer(&self, elem: T) -> QueueResult<()>;

    /// Retrieves, without removing, the head of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`](crate::core::QueueError::Empty) when no
    /// element is available.
    fn peek(&self) -> QueueResult<T>;

    /// Number of live elements.
    fn size(&self) -> usize;

    /// Returns true if the queue holds no live element.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns true if a live element equals `elem`.
    fn contains(&self, elem: &T) -> bool;

    /// Restores the queue to the elements it was constructed with.
    fn reset(&self);

    /// Removes every live element and returns them.
    fn clear(&self) -> Vec<T>;

    /// Returns an iterator that consumes the queue.
    ///
    /// This is destructive: each pull performs a [`Queue::get`], so every
    /// element the iterator yields is removed from the queue. Elements not yet
    /// pulled stay queued when the iterator is dropped. Use
    /// [`Queue::contains`] or serialization for a read-only view.
    fn iterator(&self) -> QueueIter<'_, T>;
}

/// Blocking extension of [`Queue`].
///
/// Each method suspends the calling thread until it can complete. There is no
/// timeout; callers that need one must race the call against their own timer.
pub trait WaitQueue<T>: Queue<T> {
    /// Removes and returns the head, waiting until an element is available.
    fn get_wait(&self) -> T;

    /// Returns the head without removing it, waiting until one is available.
    fn peek_wait(&self) -> T;

    /// Inserts the element, waiting until there is room under the capacity.
    fn offer_wait(&self, elem: T);
}

/// Destructive iterator returned by [`Queue::iterator`].
///
/// Each call to `next` takes the head with [`Queue::get`] and the iterator
/// ends at the first [`QueueError::Empty`](crate::core::QueueError::Empty).
/// It borrows the queue and cannot be restarted; elements offered while it is
/// alive are yielded too.
pub struct QueueIter<'a, T> {
    queue: &'a dyn Queue<T>,
}

impl<'a, T> QueueIter<'a, T> {
    /// Builds an iterator that pulls from `queue`.
    #[must_use]
    pub const fn new(queue: &'a dyn Queue<T>) -> Self {
        Self { queue }
    }

    /// Number of elements still in the queue.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.size()
    }
}

impl<T> Iterator for QueueIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.get().ok()
    }
}

impl<T> fmt::Debug for QueueIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueIter")
            .field("remaining", &self.remaining())
            .finish()
    }
}
