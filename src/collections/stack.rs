//! Array stack with a logical top and tombstoned slots.
//!
//! The slots above the logical top are not cleared by `pop`. They keep the
//! popped values until `clear_tail` tombstones them, which lets the undo
//! history re-extend into them for redo. Slots are arranged as a ring so
//! that evicting the bottom entry when full does not shift anything.

/// Bounded LIFO stack whose popped slots stay readable until cleared
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    slots: Vec<Option<T>>,
    /// Physical index of the bottom entry
    base: usize,
    len: usize,
}

impl<T> ArrayStack<T> {
    /// Create an empty stack holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            base: 0,
            len: 0,
        }
    }

    fn slot_index(&self, logical: usize) -> usize {
        (self.base + logical) % self.slots.len()
    }

    /// Push an item as the new top
    ///
    /// When the stack is full the bottom entry is evicted and returned.
    /// A zero-capacity stack hands the pushed item straight back.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity() == 0 {
            return Some(item);
        }

        let evicted = if self.is_full() {
            let oldest = self.slots[self.base].take();
            self.base = (self.base + 1) % self.capacity();
            self.len -= 1;
            oldest
        } else {
            None
        };

        let index = self.slot_index(self.len);
        self.slots[index] = Some(item);
        self.len += 1;
        evicted
    }

    /// Lower the logical top by one, returning the entry that was on top
    ///
    /// The slot keeps its value.
    pub fn pop(&mut self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let index = self.slot_index(self.len);
        self.slots[index].as_ref()
    }

    /// Pop the top entry and empty its slot
    pub fn pop_discard(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let index = self.slot_index(self.len);
        self.slots[index].take()
    }

    /// The current top entry
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.slot_index(self.len - 1)].as_ref()
    }

    /// The retained entry just above the logical top, if it was not tombstoned
    pub fn peek_next(&self) -> Option<&T> {
        if self.len >= self.capacity() {
            return None;
        }
        self.slots[self.slot_index(self.len)].as_ref()
    }

    /// Grow the logical top back over a retained entry
    ///
    /// Returns `None` and changes nothing if the next slot is tombstoned or
    /// the stack is already full.
    pub fn reextend(&mut self) -> Option<&T> {
        if self.peek_next().is_none() {
            return None;
        }
        let index = self.slot_index(self.len);
        self.len += 1;
        self.slots[index].as_ref()
    }

    /// Tombstone every slot above the logical top
    ///
    /// Returns how many retained entries were discarded.
    pub fn clear_tail(&mut self) -> usize {
        let mut cleared = 0;
        for logical in self.len..self.capacity() {
            let index = self.slot_index(logical);
            if self.slots[index].take().is_some() {
                cleared += 1;
            }
        }
        cleared
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no live entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if every slot holds a live entry
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
