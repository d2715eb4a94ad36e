//! Circular FIFO queue with a fixed number of slots.

use crate::error::{PaintError, Result};

/// Bounded first-in first-out queue backed by a ring of slots
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    /// Physical index of the oldest element
    front: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    /// Create an empty queue holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: 0,
            len: 0,
        }
    }

    /// Append an item at the back of the queue
    ///
    /// # Errors
    /// Returns `StoreFull` when the queue is at capacity. The queue is left
    /// unchanged and the rejected item is dropped.
    pub fn append(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(PaintError::StoreFull {
                capacity: self.capacity(),
            });
        }
        let rear = (self.front + self.len) % self.capacity();
        self.slots[rear] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the oldest item
    pub fn serve(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        item
    }

    /// Iterate oldest to newest without consuming anything
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.front + i) % capacity].as_ref())
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the queue has no free slot left
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Maximum number of items
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = CircularQueue::new(3);
        queue.append(1).unwrap();
        queue.append(2).unwrap();
        queue.append(3).unwrap();

        assert_eq!(queue.serve(), Some(1));
        assert_eq!(queue.serve(), Some(2));
        assert_eq!(queue.serve(), Some(3));
        assert_eq!(queue.serve(), None);
    }

    #[test]
    fn test_append_when_full() {
        let mut queue = CircularQueue::new(2);
        queue.append('a').unwrap();
        queue.append('b').unwrap();

        let err = queue.append('c').unwrap_err();
        assert!(matches!(err, PaintError::StoreFull { capacity: 2 }));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!['a', 'b']);
    }

    #[test]
    fn test_wraps_around() {
        let mut queue = CircularQueue::new(3);
        for i in 0..3 {
            queue.append(i).unwrap();
        }
        queue.serve();
        queue.serve();
        queue.append(3).unwrap();
        queue.append(4).unwrap();

        assert!(queue.is_full());
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut queue: CircularQueue<u8> = CircularQueue::new(0);
        assert!(queue.append(1).is_err());
        assert_eq!(queue.serve(), None);
        assert_eq!(queue.iter().count(), 0);
    }
}
