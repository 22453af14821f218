//! Array-backed binary heap ordered by an injected predicate.
//!
//! `std::collections::BinaryHeap` requires `Ord` on the element type; here the
//! ordering is a runtime strategy supplied by the caller, so the sift-up and
//! sift-down repairs are implemented directly over a `Vec`.

use std::fmt;
use std::sync::Arc;

/// Ordering predicate: `less(a, b)` reports whether `a` must leave the queue
/// before `b`.
pub type LessFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Predicate that never reports either element as smaller. Installed when the
/// caller supplies no ordering; ties never cause heap reordering.
pub(crate) fn default_less<T>() -> LessFn<T> {
    Arc::new(|_: &T, _: &T| false)
}

/// Min-heap under `less`: for every parent `p` and child `c`,
/// `less(c, p)` is false.
pub(crate) struct PriorityHeap<T> {
    elems: Vec<T>,
    less: LessFn<T>,
}

impl<T> PriorityHeap<T> {
    /// Wrap `elems` and restore heap order over them.
    pub(crate) fn new(elems: Vec<T>, less: LessFn<T>) -> Self {
        let mut heap = Self { elems, less };
        heap.init();
        heap
    }

    pub(crate) fn len(&self) -> usize {
        self.elems.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.less)(&self.elems[i], &self.elems[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.elems.swap(i, j);
    }

    /// Establish heap order over the whole array. O(n).
    pub(crate) fn init(&mut self) {
        let n = self.len();
        for i in (0..n / 2).rev() {
            self.down(i, n);
        }
    }

    /// Append `elem` and sift it up. O(log n).
    pub(crate) fn push(&mut self, elem: T) {
        self.elems.push(elem);
        self.up(self.len() - 1);
    }

    /// Remove and return the root. O(log n).
    pub(crate) fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.swap(0, last);
        self.down(0, last);
        self.elems.pop()
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.elems.first()
    }

    /// Elements in heap storage order.
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Take the backing storage, leaving the heap empty.
    pub(crate) fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut self.elems)
    }

    fn up(&mut self, mut j: usize) {
        while j > 0 {
            let parent = (j - 1) / 2;
            if !self.less(j, parent) {
                break;
            }
            self.swap(parent, j);
            j = parent;
        }
    }

    fn down(&mut self, start: usize, n: usize) {
        let mut i = start;
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < n && self.less(right, left) {
                child = right;
            }
            if !self.less(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }
}

/// Keep the `keep` least elements of `elems` under `less`, in sorted order.
///
/// Ties keep their relative order from `elems`. The sort is a bottom-up merge
/// sort over indices, so an inconsistent predicate yields some order of the
/// elements but never a panic.
pub(crate) fn select_least<T>(elems: Vec<T>, less: &LessFn<T>, keep: usize) -> Vec<T> {
    if keep >= elems.len() {
        return elems;
    }

    let n = elems.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut buf = order.clone();
    let mut width = 1;
    while width < n {
        for start in (0..n).step_by(2 * width) {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            let (mut i, mut j) = (start, mid);
            for slot in &mut buf[start..end] {
                // Take from the right run only when strictly less: stable.
                let take_right = i >= mid || (j < end && less(&elems[order[j]], &elems[order[i]]));
                if take_right {
                    *slot = order[j];
                    j += 1;
                } else {
                    *slot = order[i];
                    i += 1;
                }
            }
        }
        std::mem::swap(&mut order, &mut buf);
        width *= 2;
    }

    let mut slots: Vec<Option<T>> = elems.into_iter().map(Some).collect();
    order
        .into_iter()
        .take(keep)
        .filter_map(|i| slots[i].take())
        .collect()
}

impl<T: Clone> PriorityHeap<T> {
    /// Replace the contents with a copy of `snapshot`, which must already be
    /// in heap order.
    pub(crate) fn restore(&mut self, snapshot: &[T]) {
        // Reuse the current allocation whether the heap grew or shrank.
        self.elems.truncate(snapshot.len());
        let (overlap, tail) = snapshot.split_at(self.elems.len());
        self.elems.clone_from_slice(overlap);
        self.elems.extend_from_slice(tail);
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("elems", &self.elems)
            .finish_non_exhaustive()
    }
}
