//! Capacity-bounded list kept in ascending key order.

use crate::error::{PaintError, Result};

/// Sorted list of keyed values
///
/// Entries with equal keys keep their insertion order.
#[derive(Debug, Clone)]
pub struct SortedList<T> {
    entries: Vec<(u64, T)>,
    capacity: usize,
}

impl<T> SortedList<T> {
    /// Create an empty list holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert `value` at its sorted position for `key`
    ///
    /// # Errors
    /// Returns `StoreFull` when the list is at capacity.
    pub fn add(&mut self, key: u64, value: T) -> Result<()> {
        if self.is_full() {
            return Err(PaintError::StoreFull {
                capacity: self.capacity,
            });
        }
        let position = self.entries.partition_point(|(k, _)| *k <= key);
        self.entries.insert(position, (key, value));
        Ok(())
    }

    /// Position of the first entry with `key`
    pub fn position_of_key(&self, key: u64) -> Option<usize> {
        let position = self.entries.partition_point(|(k, _)| *k < key);
        match self.entries.get(position) {
            Some((k, _)) if *k == key => Some(position),
            _ => None,
        }
    }

    /// Check if any entry has `key`
    pub fn contains_key(&self, key: u64) -> bool {
        self.position_of_key(key).is_some()
    }

    /// Remove the entry at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.entries.len() {
            Some(self.entries.remove(index).1)
        } else {
            None
        }
    }

    /// Value at `index` in key order
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|(_, value)| value)
    }

    /// Iterate values in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the list is at capacity
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_key_order() {
        let mut list = SortedList::new(5);
        list.add(30, "c").unwrap();
        list.add(10, "a").unwrap();
        list.add(20, "b").unwrap();

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(list.position_of_key(20), Some(1));
        assert_eq!(list.position_of_key(25), None);
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let mut list = SortedList::new(5);
        list.add(1, "first").unwrap();
        list.add(0, "zero").unwrap();
        list.add(1, "second").unwrap();

        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec!["zero", "first", "second"]
        );
        assert_eq!(list.position_of_key(1), Some(1));
    }

    #[test]
    fn test_capacity_and_removal() {
        let mut list = SortedList::new(2);
        list.add(1, 'x').unwrap();
        list.add(2, 'y').unwrap();
        assert!(list.add(3, 'z').is_err());

        assert_eq!(list.remove_at(0), Some('x'));
        assert_eq!(list.remove_at(5), None);
        assert!(!list.contains_key(1));
        assert!(list.contains_key(2));
        assert_eq!(list.len(), 1);
    }
}
