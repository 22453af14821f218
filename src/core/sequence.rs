//! Cursor-based sequence guarded by a mutex and two condition variables.
//!
//! Removal only advances the cursor; consumed elements stay in the backing
//! `Vec` until [`SequenceState::compact`] or [`SequenceState::restore`]
//! rebuilds it. Offering without ever clearing or resetting therefore grows the
//! storage monotonically.

use parking_lot::{Condvar, Mutex, MutexGuard};
use tracing::trace;

/// Elements plus the index of the next unread one.
///
/// Invariant: `cursor <= elems.len()`.
#[derive(Debug)]
pub(crate) struct SequenceState<T> {
    elems: Vec<T>,
    cursor: usize,
}

impl<T> SequenceState<T> {
    /// Number of unread elements.
    pub(crate) fn unread(&self) -> usize {
        self.elems.len() - self.cursor
    }

    pub(crate) fn has_unread(&self) -> bool {
        self.cursor < self.elems.len()
    }

    /// Unread elements, oldest first.
    pub(crate) fn unread_slice(&self) -> &[T] {
        &self.elems[self.cursor..]
    }

    /// Next unread element, without consuming it.
    pub(crate) fn front(&self) -> Option<&T> {
        self.elems.get(self.cursor)
    }

    /// Next unread element. The caller must hold `has_unread()`.
    fn head(&self) -> &T {
        &self.elems[self.cursor]
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.elems.push(elem);
    }

    /// Drop every element and reset the cursor, returning the unread ones.
    pub(crate) fn compact(&mut self) -> Vec<T> {
        let unread = self.elems.split_off(self.cursor);
        self.elems.clear();
        self.cursor = 0;
        unread
    }
}

impl<T: Clone> SequenceState<T> {
    /// Consume the next unread element.
    pub(crate) fn advance(&mut self) -> Option<T> {
        self.has_unread().then(|| self.take_front())
    }

    /// Consume the next unread element. The caller must hold `has_unread()`.
    fn take_front(&mut self) -> T {
        let elem = self.head().clone();
        self.cursor += 1;
        elem
    }

    /// Replace the contents with `snapshot` and rewind the cursor.
    pub(crate) fn restore(&mut self, snapshot: &[T]) {
        self.elems.clear();
        self.elems.extend_from_slice(snapshot);
        self.cursor = 0;
    }
}

/// The shared blocking primitive.
///
/// `not_empty` is waited on by readers until an unread element exists;
/// `not_full` is waited on by capacity-bound writers until there is room. Both
/// are bound to the single `state` mutex, so a wait always releases and
/// re-acquires the lock that protects the predicate.
#[derive(Debug)]
pub(crate) struct GuardedSequence<T> {
    state: Mutex<SequenceState<T>>,
    not_empty: Condvar,
    not_full: Condvar,
}

impl<T> GuardedSequence<T> {
    pub(crate) fn new(elems: Vec<T>) -> Self {
        Self {
            state: Mutex::new(SequenceState { elems, cursor: 0 }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, SequenceState<T>> {
        self.state.lock()
    }

    /// Block until an unread element exists.
    ///
    /// Loops on the predicate: a broadcast from `reset` or a competing reader
    /// can leave nothing to read after a wakeup.
    pub(crate) fn wait_not_empty(&self, guard: &mut MutexGuard<'_, SequenceState<T>>) {
        while !guard.has_unread() {
            trace!("waiting for an element");
            self.not_empty.wait(guard);
        }
    }

    /// Block until fewer than `capacity` unread elements are held.
    pub(crate) fn wait_not_full(
        &self,
        guard: &mut MutexGuard<'_, SequenceState<T>>,
        capacity: usize,
    ) {
        while guard.unread() >= capacity {
            trace!(capacity, "waiting for room");
            self.not_full.wait(guard);
        }
    }

    /// Wake one reader; exactly one new element became available.
    pub(crate) fn signal_not_empty(&self) {
        self.not_empty.notify_one();
    }

    /// Wake one capacity-bound writer; exactly one slot was freed.
    pub(crate) fn signal_not_full(&self) {
        self.not_full.notify_one();
    }

    /// Wake every capacity-bound writer.
    pub(crate) fn broadcast_not_full(&self) {
        self.not_full.notify_all();
    }

    /// Append `elem` and wake one reader.
    pub(crate) fn push_blocking(&self, elem: T) {
        self.lock().push(elem);
        self.signal_not_empty();
    }
}

impl<T: Clone> GuardedSequence<T> {
    /// Consume the next element, waiting until one is available, then wake one
    /// writer waiting for the slot it freed.
    pub(crate) fn take_blocking(&self) -> T {
        let mut guard = self.lock();
        self.wait_not_empty(&mut guard);
        let elem = guard.take_front();
        drop(guard);
        self.signal_not_full();
        elem
    }

    /// Return the next element without consuming it, waiting until one is
    /// available.
    ///
    /// The wakeup this call absorbed was meant for "an element exists", which
    /// is still true afterwards, so it is passed on to the next reader.
    pub(crate) fn peek_blocking(&self) -> T {
        let mut guard = self.lock();
        self.wait_not_empty(&mut guard);
        let elem = guard.head().clone();
        drop(guard);
        self.signal_not_empty();
        elem
    }

    /// Restore `snapshot`, rewind the cursor and wake every waiter so each one
    /// re-evaluates its predicate.
    pub(crate) fn reset_state(&self, snapshot: &[T]) {
        self.lock().restore(snapshot);
        self.not_empty.notify_all();
        self.not_full.notify_all();
    }
}
