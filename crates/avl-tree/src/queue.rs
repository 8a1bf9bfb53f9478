//! FIFO queue used by breadth-first traversal.

use std::collections::VecDeque;

use crate::error::QueueError;

#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the oldest item, failing with [`QueueError::Empty`] when
    /// nothing is queued.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_insertion_order() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.dequeue(), Ok(2));
        q.enqueue(4);
        assert_eq!(q.dequeue(), Ok(3));
        assert_eq!(q.dequeue(), Ok(4));
        assert!(q.is_empty());
    }

    #[test]
    fn dequeue_on_empty_fails() {
        let mut q: Queue<u8> = Queue::new();
        assert_eq!(q.dequeue(), Err(QueueError::Empty));
    }
}
