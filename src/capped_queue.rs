//! Capped queue
//!
//! A FIFO that accepts at most `capacity` enqueues in total. Dequeuing does not
//! free a slot; only [`CappedQueue::clear`] does.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct CappedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
    /// Enqueues since creation or the last clear
    enqueued: usize,
}

impl<T> CappedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            enqueued: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once `capacity` items have been enqueued.
    pub fn is_at_capacity(&self) -> bool {
        self.enqueued >= self.capacity
    }

    /// Enqueue `item` unless the cap is reached. Returns whether it was accepted.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_at_capacity() {
            return false;
        }
        self.items.push_back(item);
        self.enqueued += 1;
        true
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Drop all items and reset the enqueue count.
    pub fn clear(&mut self) {
        self.items.clear();
        self.enqueued = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
