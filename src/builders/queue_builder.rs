//! Builder collecting initial elements and options for either queue kind.

use crate::config::QueueOptions;
use crate::core::{BlockingQueue, PriorityQueue};

/// Build a [`BlockingQueue`] or [`PriorityQueue`] from elements and options.
///
/// ```
/// use prometheus_queue::{QueueBuilder, Queue};
///
/// let queue = QueueBuilder::new()
///     .elements(vec![4, 2, 9])
///     .capacity(2)
///     .build_priority(|a: &i32, b: &i32| a < b);
///
/// assert_eq!(queue.size(), 2);
/// assert_eq!(queue.get(), Ok(2));
/// ```
#[derive(Debug, Clone)]
pub struct QueueBuilder<T> {
    elements: Vec<T>,
    options: QueueOptions,
}

impl<T> Default for QueueBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueueBuilder<T> {
    /// Empty, unbounded builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            options: QueueOptions::new(),
        }
    }

    /// Replace the initial elements.
    #[must_use]
    pub fn elements(mut self, elements: Vec<T>) -> Self {
        self.elements = elements;
        self
    }

    /// Append one initial element.
    #[must_use]
    pub fn element(mut self, element: T) -> Self {
        self.elements.push(element);
        self
    }

    /// Set the capacity bound.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.options = self.options.with_capacity(capacity);
        self
    }

    /// Replace all options, e.g. with ones loaded from the environment.
    #[must_use]
    pub fn options(mut self, options: QueueOptions) -> Self {
        self.options = options;
        self
    }

    /// Options currently configured.
    #[must_use]
    pub const fn config(&self) -> &QueueOptions {
        &self.options
    }
}

impl<T: Clone> QueueBuilder<T> {
    /// Build a FIFO blocking queue.
    #[must_use]
    pub fn build_blocking(self) -> BlockingQueue<T> {
        BlockingQueue::new(self.elements, self.options)
    }

    /// Build a priority queue ordered by `less`.
    #[must_use]
    pub fn build_priority<F>(self, less: F) -> PriorityQueue<T>
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        PriorityQueue::new(self.elements, less, self.options)
    }

    /// Build a priority queue with the default, non-reordering predicate.
    #[must_use]
    pub fn build_priority_default(self) -> PriorityQueue<T> {
        PriorityQueue::with_default_order(self.elements, self.options)
    }
}
